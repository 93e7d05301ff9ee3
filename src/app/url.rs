//! URL validation and conversion into a probe target.

use log::debug;
use url::{Host, Url};

use crate::config::HTTPS_PORT;
use crate::error_handling::ConfigError;
use crate::models::Target;

/// Parses a URL into the host, port and request path every probe uses.
///
/// Adds an `https://` prefix if the input has no scheme. Only `https` is
/// accepted. An empty path becomes `/`; a query string is kept as part of the
/// request target; a fragment is dropped.
///
/// # Errors
///
/// Returns a `ConfigError` if the URL does not parse, uses another scheme, or
/// has no host.
pub fn parse_target(raw: &str) -> Result<Target, ConfigError> {
    let normalized = if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let parsed = Url::parse(&normalized).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    if parsed.scheme() != "https" {
        return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    let host = match parsed.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => return Err(ConfigError::MissingHost(raw.to_string())),
    };
    let port = parsed.port().unwrap_or(HTTPS_PORT);

    let mut path = parsed.path().to_string();
    if path.is_empty() {
        path.push('/');
    }
    if let Some(query) = parsed.query() {
        path.push('?');
        path.push_str(query);
    }

    let target = Target::new(host, port, path);
    debug!("Parsed target {:?} from {raw}", target);
    Ok(target)
}

fn has_scheme(raw: &str) -> bool {
    raw.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
