//! Response splitting into status, known headers and body.

use std::collections::BTreeMap;

use log::trace;

use super::headers::KnownHeader;
use super::status::parse_status_line;

/// Parsed view of one raw response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Status code, unset when no status line was recognised.
    pub status: Option<u16>,
    /// Known headers with their values exactly as received (leading space kept).
    pub headers: BTreeMap<KnownHeader, String>,
    /// Integer value of `Content-Length`; 0 when absent or unparseable.
    pub content_length: u64,
    /// Every line after the first blank line, concatenated without separators.
    pub body: String,
}

impl ParsedResponse {
    /// Returns the raw value of a known header, if the response carried it.
    pub fn header(&self, header: KnownHeader) -> Option<&str> {
        self.headers.get(&header).map(String::as_str)
    }
}

/// Parses a `Content-Length` value. Surrounding whitespace is ignored and any
/// parse failure yields 0.
pub fn parse_content_length(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}

/// Splits a raw response into status, known headers and body.
///
/// Lines are separated by `\r\n`. Before the first blank line:
/// - a line without a colon that contains `HTTP` is a status line,
/// - any other line without a colon is ignored,
/// - other lines split on their first colon into name and value; unknown names
///   are dropped and a repeated header keeps its last value.
pub fn parse_response(raw: &str) -> ParsedResponse {
    let mut response = ParsedResponse::default();
    let mut lines = raw.split("\r\n");

    for line in lines.by_ref() {
        if line.is_empty() {
            break;
        }
        match line.split_once(':') {
            Some((name, value)) => match KnownHeader::from_name(name) {
                Some(header) => {
                    if header == KnownHeader::ContentLength {
                        response.content_length = parse_content_length(value);
                    }
                    response.headers.insert(header, value.to_string());
                }
                None => trace!("Dropping unrecognised header: {name}"),
            },
            None => {
                if let Some(status) = parse_status_line(line) {
                    response.status = Some(status);
                }
            }
        }
    }

    response.body = lines.collect();
    response
}
