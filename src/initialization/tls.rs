//! TLS client setup.

use std::sync::Arc;

use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

/// Builds the TLS connector shared by all probes.
///
/// Trusts the Mozilla root set from `webpki-roots`; no client authentication
/// and no certificate customization.
pub fn init_tls_connector() -> TlsConnector {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    TlsConnector::from(Arc::new(config))
}
