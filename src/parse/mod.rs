//! Raw HTTP response parsing.
//!
//! This module splits the text read from one connection into:
//! - The status code (from the status line)
//! - A fixed set of known header fields, stored verbatim
//! - The body (everything after the first blank line)
//!
//! Parsing never fails: missing or malformed parts are left unset.

mod headers;
mod response;
mod status;

// Re-export public API
pub use headers::KnownHeader;
pub use response::{parse_content_length, parse_response, ParsedResponse};
pub use status::parse_status_line;
