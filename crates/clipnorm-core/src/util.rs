/// Rounds to `precision` decimal digits, folding `-0` into `0`.
pub fn round_to(v: f64, precision: u32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let factor = 10f64.powi(precision.min(i32::MAX as u32) as i32);
    let scaled = v * factor;
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        // More digits than an f64 carries: nothing to round away.
        v
    };
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Appends `v` the way JavaScript's `Number#toString` prints it (`1`, `0.5`, `-12.25`).
///
/// Non-finite values print as `0`.
pub(crate) fn push_number(out: &mut String, buf: &mut ryu_js::Buffer, mut v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }
    if v == 0.0 {
        v = 0.0;
    }
    out.push_str(buf.format_finite(v));
}

pub(crate) fn push_pair(out: &mut String, buf: &mut ryu_js::Buffer, x: f64, y: f64) {
    push_number(out, buf, x);
    out.push(',');
    push_number(out, buf, y);
}
