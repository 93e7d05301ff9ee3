//! Status line tokenizing.

/// Extracts the status code from a status line such as `HTTP/1.0 200 OK`.
///
/// The line is split on whitespace and the second token parsed as an integer.
/// Returns `None` when the line is not an HTTP status line, or when the token
/// is absent or non-numeric.
pub fn parse_status_line(line: &str) -> Option<u16> {
    if !line.contains("HTTP") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}
