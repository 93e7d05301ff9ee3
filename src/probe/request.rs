//! Request construction.

use crate::models::Target;

/// Builds the single request sent on every connection.
///
/// Method GET, protocol HTTP/1.0 and a `Host` header; no other headers and no
/// body, so the server closes the connection after responding.
pub fn build_request(target: &Target) -> String {
    format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\n\r\n",
        target.path,
        target.host_header()
    )
}
