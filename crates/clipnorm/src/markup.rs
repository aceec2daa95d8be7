//! Minimal SVG markup writer for clipPath documents.

pub(crate) const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

/// Appends elements one per line (indented) or back to back.
pub(crate) struct MarkupWriter {
    out: String,
    pretty: bool,
    depth: usize,
}

impl MarkupWriter {
    pub(crate) fn new(pretty: bool) -> Self {
        Self {
            out: String::with_capacity(256),
            pretty,
            depth: 0,
        }
    }

    fn start_line(&mut self) {
        if self.pretty {
            for _ in 0..self.depth {
                self.out.push_str("  ");
            }
        }
    }

    fn end_line(&mut self) {
        if self.pretty {
            self.out.push('\n');
        }
    }

    fn push_tag<'a>(&mut self, name: &str, attrs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        self.start_line();
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            escape_xml_into(&mut self.out, value);
            self.out.push('"');
        }
    }

    pub(crate) fn open<'a>(
        &mut self,
        name: &str,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) {
        self.push_tag(name, attrs);
        self.out.push('>');
        self.end_line();
        self.depth += 1;
    }

    pub(crate) fn empty<'a>(
        &mut self,
        name: &str,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) {
        self.push_tag(name, attrs);
        self.out.push_str("/>");
        self.end_line();
    }

    pub(crate) fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.start_line();
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
        self.end_line();
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
