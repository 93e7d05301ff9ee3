// Parse module tests.

use super::*;
use strum::IntoEnumIterator;

const CLOUDFLARE_RESPONSE: &str = "HTTP/1.1 200 OK\r\n\
Date: Sat, 17 Oct 2020 04:19:24 GMT\r\n\
Content-Type: application/json\r\n\
Content-Length: 193\r\n\
Connection: close\r\n\
Set-Cookie: __cfduid=d1b5; expires=Mon, 16-Nov-20 04:19:24 GMT\r\n\
cf-request-id: 05d8c79e0d0000\r\n\
Expect-CT: max-age=604800\r\n\
Report-To: {\"endpoints\":[{\"url\":\"https://a.nel.cloudflare.com\"}]}\r\n\
NEL: {\"max_age\":604800}\r\n\
Server: cloudflare\r\n\
CF-Ray: 5e3a4c1b5d4e0000-SJC\r\n\
\r\n\
[{\"name\":\"one\"},\r\n{\"name\":\"two\"}]";

#[test]
fn test_status_line_extracts_code() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\n\r\n");
    assert_eq!(parsed.status, Some(200));
}

#[test]
fn test_status_line_without_reason_phrase() {
    assert_eq!(parse_status_line("HTTP/1.1 404"), Some(404));
}

#[test]
fn test_status_line_with_extra_whitespace() {
    // Offset-based slicing would break here; tokenizing does not.
    assert_eq!(parse_status_line("HTTP/1.1   503   Service Unavailable"), Some(503));
}

#[test]
fn test_status_line_non_numeric_code_is_unset() {
    assert_eq!(parse_status_line("HTTP/1.1 OK"), None);
    assert_eq!(parse_status_line("HTTP/1.1"), None);
}

#[test]
fn test_line_without_http_is_not_a_status_line() {
    assert_eq!(parse_status_line("ICY 200 OK"), None);
    let parsed = parse_response("ICY 200 OK\r\nServer: shoutcast\r\n\r\nbody");
    assert_eq!(parsed.status, None);
    assert_eq!(parsed.header(KnownHeader::Server), Some(" shoutcast"));
    assert_eq!(parsed.body, "body");
}

#[test]
fn test_content_length_without_space() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\nContent-Length:1234\r\n\r\n");
    assert_eq!(parsed.content_length, 1234);
    assert_eq!(parsed.header(KnownHeader::ContentLength), Some("1234"));
}

#[test]
fn test_content_length_with_leading_space() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\nContent-Length: 1234\r\n\r\n");
    assert_eq!(parsed.content_length, 1234);
    assert_eq!(parsed.header(KnownHeader::ContentLength), Some(" 1234"));
}

#[test]
fn test_content_length_unparseable_is_zero() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\nContent-Length:abc\r\n\r\n");
    assert_eq!(parsed.content_length, 0);
    assert_eq!(parsed.header(KnownHeader::ContentLength), Some("abc"));
}

#[test]
fn test_parse_content_length_negative_is_zero() {
    assert_eq!(parse_content_length("-5"), 0);
    assert_eq!(parse_content_length(""), 0);
}

#[test]
fn test_header_value_split_on_first_colon_only() {
    let parsed = parse_response(CLOUDFLARE_RESPONSE);
    assert_eq!(
        parsed.header(KnownHeader::Date),
        Some(" Sat, 17 Oct 2020 04:19:24 GMT")
    );
    assert_eq!(
        parsed.header(KnownHeader::ReportTo),
        Some(" {\"endpoints\":[{\"url\":\"https://a.nel.cloudflare.com\"}]}")
    );
}

#[test]
fn test_full_response() {
    let parsed = parse_response(CLOUDFLARE_RESPONSE);
    assert_eq!(parsed.status, Some(200));
    assert_eq!(parsed.content_length, 193);
    assert_eq!(parsed.header(KnownHeader::Connection), Some(" close"));
    assert_eq!(parsed.header(KnownHeader::CfRequestId), Some(" 05d8c79e0d0000"));
    assert_eq!(parsed.header(KnownHeader::ExpectCt), Some(" max-age=604800"));
    assert_eq!(parsed.header(KnownHeader::Nel), Some(" {\"max_age\":604800}"));
    assert_eq!(parsed.header(KnownHeader::Server), Some(" cloudflare"));
    assert_eq!(parsed.header(KnownHeader::CfRay), Some(" 5e3a4c1b5d4e0000-SJC"));
    assert!(parsed.header(KnownHeader::SetCookie).is_some());
    // Body lines are joined without separators.
    assert_eq!(parsed.body, "[{\"name\":\"one\"},{\"name\":\"two\"}]");
}

#[test]
fn test_hyphenated_content_type_is_not_recognised() {
    let parsed = parse_response(CLOUDFLARE_RESPONSE);
    assert_eq!(parsed.header(KnownHeader::ContentType), None);

    let parsed = parse_response("HTTP/1.0 200 OK\r\nContentType: text/plain\r\n\r\n");
    assert_eq!(parsed.header(KnownHeader::ContentType), Some(" text/plain"));
}

#[test]
fn test_header_names_are_case_sensitive() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\nserver: nginx\r\nDATE: today\r\n\r\n");
    assert!(parsed.headers.is_empty());
}

#[test]
fn test_unknown_headers_dropped() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\nX-Powered-By: php\r\nVary: Accept\r\n\r\nok");
    assert!(parsed.headers.is_empty());
    assert_eq!(parsed.body, "ok");
}

#[test]
fn test_colonless_header_line_is_ignored() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\ngarbage line\r\nServer: x\r\n\r\nbody");
    assert_eq!(parsed.status, Some(200));
    assert_eq!(parsed.header(KnownHeader::Server), Some(" x"));
    assert_eq!(parsed.body, "body");
}

#[test]
fn test_body_keeps_lines_after_inner_blank_lines() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\n\r\nfirst\r\n\r\nsecond: not a header\r\n");
    assert_eq!(parsed.body, "firstsecond: not a header");
    assert!(parsed.headers.is_empty());
}

#[test]
fn test_repeated_header_keeps_last_value() {
    let parsed = parse_response("HTTP/1.0 200 OK\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n\r\n");
    assert_eq!(parsed.header(KnownHeader::SetCookie), Some(" b=2"));
}

#[test]
fn test_empty_response() {
    let parsed = parse_response("");
    assert_eq!(parsed, ParsedResponse::default());
}

#[test]
fn test_headers_without_blank_line_have_empty_body() {
    let parsed = parse_response("HTTP/1.0 301 Moved Permanently\r\nServer: x");
    assert_eq!(parsed.status, Some(301));
    assert_eq!(parsed.body, "");
}

#[test]
fn test_known_header_names_round_trip() {
    for header in KnownHeader::iter() {
        assert_eq!(KnownHeader::from_name(header.name()), Some(header));
    }
    assert_eq!(KnownHeader::iter().count(), 11);
    assert_eq!(KnownHeader::from_name("Content-Type"), None);
}
