use clipnorm::{ConvertOptions, DocumentError};
use std::collections::BTreeMap;
use std::io::{IsTerminal, Read};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Shape(clipnorm::Error),
    Document(DocumentError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Shape(err) => write!(f, "{err}"),
            CliError::Document(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<clipnorm::Error> for CliError {
    fn from(value: clipnorm::Error) -> Self {
        Self::Shape(value)
    }
}

impl From<DocumentError> for CliError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Convert,
    Path,
    Shape,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    /// File for `convert`, path data for `path`, element tag for `shape`.
    input: Option<String>,
    attributes: Vec<(String, String)>,
    clip_path_id: Option<String>,
    precision: Option<u32>,
    config: Option<String>,
    pretty: bool,
    report: bool,
    out: Option<String>,
    verbose: bool,
}

fn usage() -> &'static str {
    "clipnorm-cli\n\
\n\
USAGE:\n\
  clipnorm-cli [convert] [--id <clip-id>] [--precision <n>] [--config <file.json>] [--pretty] [--report] [--out <path>] [--verbose] [<path>|-]\n\
  clipnorm-cli path [--precision <n>] [--verbose] [<path-data>|-]\n\
  clipnorm-cli shape [--precision <n>] <tag> [name=value ...]\n\
\n\
NOTES:\n\
  - If <path> (or <path-data>) is omitted or '-', input is read from stdin.\n\
  - convert prints the clipPath SVG document to stdout by default; use --out to write a file.\n\
  - --report prints a one-line JSON conversion report to stderr.\n\
  - Options are resolved as: defaults, then --config, then individual flags.\n\
  - Exit codes: 2 usage error, 3 no convertible shapes, 1 any other failure.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    if let Some(cmd) = it.peek() {
        let command = match cmd.as_str() {
            "convert" => Some(Command::Convert),
            "path" => Some(Command::Path),
            "shape" => Some(Command::Shape),
            _ => None,
        };
        if let Some(command) = command {
            args.command = command;
            it.next();
        }
    }

    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--report" => args.report = true,
            "--verbose" | "-v" => args.verbose = true,
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.clip_path_id = Some(id.clone());
            }
            "--precision" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.precision = Some(n.parse::<u32>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                for rest in it.by_ref() {
                    push_positional(&mut args, rest)?;
                }
            }
            "-" if args.command != Command::Shape => push_positional(&mut args, a)?,
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            value => push_positional(&mut args, value)?,
        }
    }

    if args.command == Command::Shape && args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn push_positional(args: &mut Args, value: &str) -> Result<(), CliError> {
    if args.command == Command::Shape && args.input.is_some() {
        let Some((name, v)) = value.split_once('=') else {
            return Err(CliError::Usage(usage()));
        };
        args.attributes.push((name.to_string(), v.to_string()));
        return Ok(());
    }
    if args.input.is_some() {
        return Err(CliError::Usage(usage()));
    }
    args.input = Some(value.to_string());
    Ok(())
}

fn resolve_options(args: &Args) -> Result<ConvertOptions, CliError> {
    let mut options = match args.config.as_deref() {
        Some(path) => serde_json::from_str::<ConvertOptions>(&std::fs::read_to_string(path)?)?,
        None => ConvertOptions::default(),
    };
    if let Some(precision) = args.precision {
        options.normalize.precision = precision;
    }
    if let Some(id) = &args.clip_path_id {
        options.clip_path_id = id.clone();
    }
    if args.pretty {
        options.pretty = true;
    }
    Ok(options)
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => read_stdin(),
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let options = resolve_options(&args)?;
    tracing::debug!(command = ?args.command, ?options, "resolved options");

    match args.command {
        Command::Convert => {
            let svg = read_input(args.input.as_deref())?;
            let doc = clipnorm::convert_document(&svg, &options)?;
            if args.report {
                eprintln!("{}", serde_json::to_string(doc.report())?);
            }
            let mut text = doc.to_svg_string();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            write_text(&text, args.out.as_deref())
        }
        Command::Path => {
            let d = match args.input.as_deref() {
                None | Some("-") => read_stdin()?,
                Some(d) => d.to_string(),
            };
            let normalized = clipnorm::normalize_path_data(d.trim(), &options.normalize)?;
            write_text(&format!("{normalized}\n"), args.out.as_deref())
        }
        Command::Shape => {
            let tag = args.input.as_deref().unwrap_or_default();
            let attrs: BTreeMap<String, String> = args.attributes.into_iter().collect();
            let normalized = clipnorm::normalize_shape(tag, &attrs, &options.normalize)?;
            write_text(&format!("{normalized}\n"), args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => {}
        Err(CliError::Document(DocumentError::NoShapesFound)) => {
            eprintln!("{}", DocumentError::NoShapesFound);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
