//! TLS probe client.
//!
//! Uses `tokio-rustls` for the encrypted connection. Every exchange opens a
//! fresh connection; nothing is pooled or reused.

use std::io;
use std::time::{Duration, Instant};

use log::{debug, error};
use rustls::pki_types::ServerName;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use super::request::build_request;
use super::Prober;
use crate::config::READ_BUFFER_CAPACITY;
use crate::error_handling::ProbeError;
use crate::models::{RawResponse, Target};

/// Probes a target over a new TLS connection per call.
#[derive(Clone)]
pub struct TlsProber {
    connector: TlsConnector,
    connect_timeout: Duration,
}

impl TlsProber {
    /// Creates a prober.
    ///
    /// # Arguments
    ///
    /// * `connector` - TLS connector carrying the client configuration (trust roots)
    /// * `connect_timeout` - Bound applied to the TCP connect and, separately, to the TLS handshake
    pub fn new(connector: TlsConnector, connect_timeout: Duration) -> Self {
        Self {
            connector,
            connect_timeout,
        }
    }
}

impl Prober for TlsProber {
    /// Runs one exchange against `target`.
    ///
    /// The connection is dropped on every exit path. The elapsed time covers
    /// dial, handshake, write and the full read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The host is not a valid TLS server name
    /// - TCP connection fails or times out
    /// - TLS handshake fails or times out
    /// - Writing the request or reading the response fails
    async fn probe(&self, target: &Target) -> Result<RawResponse, ProbeError> {
        let address = target.address();
        let timeout_secs = self.connect_timeout.as_secs();

        let server_name = ServerName::try_from(target.host.clone())
            .map_err(|_| ProbeError::InvalidServerName(target.host.clone()))?;

        let start = Instant::now();

        debug!("Connecting to {address}");
        let sock = match tokio::time::timeout(
            self.connect_timeout,
            TcpStream::connect((target.host.as_str(), target.port)),
        )
        .await
        {
            Ok(Ok(sock)) => sock,
            Ok(Err(e)) => {
                error!("Failed to connect to {address} - {e}");
                return Err(ProbeError::Connect { address, source: e });
            }
            Err(_) => {
                error!("TCP connection timeout for {address}");
                return Err(ProbeError::ConnectTimeout {
                    address,
                    timeout_secs,
                });
            }
        };

        let mut tls_stream = match tokio::time::timeout(
            self.connect_timeout,
            self.connector.connect(server_name, sock),
        )
        .await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                error!("TLS connection failed for {}: {e}", target.host);
                return Err(ProbeError::Handshake {
                    host: target.host.clone(),
                    source: e,
                });
            }
            Err(_) => {
                error!("TLS handshake timeout for {}", target.host);
                return Err(ProbeError::HandshakeTimeout {
                    host: target.host.clone(),
                    timeout_secs,
                });
            }
        };

        let request = build_request(target);
        tls_stream
            .write_all(request.as_bytes())
            .await
            .map_err(ProbeError::Write)?;
        tls_stream.flush().await.map_err(ProbeError::Write)?;

        let mut bytes = Vec::with_capacity(READ_BUFFER_CAPACITY);
        match tls_stream.read_to_end(&mut bytes).await {
            Ok(_) => {}
            // HTTP/1.0 servers often close the socket without a TLS close_notify.
            // The response is complete at that point.
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("{address} closed without close_notify after {} bytes", bytes.len());
            }
            Err(e) => {
                error!("Failed to read response from {address}: {e}");
                return Err(ProbeError::Read(e));
            }
        }

        let elapsed = start.elapsed();
        drop(tls_stream);

        debug!(
            "Read {} bytes from {address} in {} ms",
            bytes.len(),
            elapsed.as_millis()
        );
        Ok(RawResponse { bytes, elapsed })
    }
}
