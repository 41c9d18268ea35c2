//! Chart endpoint URL construction.
//!
//! URL shape: `{base}?{chart}/?course={course}`. The chart server parses that
//! literal form, so only the two values are escaped.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEndpoint {
    base: String,
}

impl ChartEndpoint {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn chart_url(&self, chart: &str, course: &str) -> String {
        let chart = percent_encode(chart);
        let course = percent_encode(course);
        let mut out = String::with_capacity(self.base.len() + chart.len() + course.len() + 10);
        out.push_str(&self.base);
        out.push('?');
        out.push_str(&chart);
        out.push_str("/?course=");
        out.push_str(&course);
        out
    }
}

/// Escapes everything outside the RFC 3986 unreserved set as `%XX`.
pub fn percent_encode(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}
