//! DNS-over-TLS transport (RFC 7858)
//!
//! - One `ClientConfig` per transport, so TLS session resumption works
//!   across reconnects to the same upstream.
//! - Idle TLS connections are pooled per upstream and reused for later
//!   queries, which skips the TCP and TLS handshakes.

use super::pool::IdlePool;
use super::tcp::{connect_tcp, exchange_on_stream};
use super::{map_io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use dotlookup_domain::{DomainError, UpstreamAddr};
use rustls::pki_types::ServerName;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tracing::debug;

/// Client config trusting the bundled web PKI roots plus any certificates
/// found in the PEM file `ca_file`.
pub fn build_client_config(ca_file: Option<&Path>) -> Result<Arc<rustls::ClientConfig>, DomainError> {
    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    if let Some(path) = ca_file {
        let added = add_pem_roots(&mut root_store, path)?;
        debug!(path = %path.display(), certificates = added, "Loaded extra TLS trust anchors");
    }

    client_config_with_roots(root_store)
}

pub fn client_config_with_roots(
    root_store: rustls::RootCertStore,
) -> Result<Arc<rustls::ClientConfig>, DomainError> {
    let config = rustls::ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()
    .map_err(|e| DomainError::ConfigError(format!("TLS protocol versions: {}", e)))?
    .with_root_certificates(root_store)
    .with_no_client_auth();

    Ok(Arc::new(config))
}

fn add_pem_roots(root_store: &mut rustls::RootCertStore, path: &Path) -> Result<usize, DomainError> {
    let file = File::open(path).map_err(|e| {
        DomainError::ConfigError(format!("Cannot open CA file '{}': {}", path.display(), e))
    })?;
    let mut reader = BufReader::new(file);

    let mut added = 0;
    for cert in rustls_pemfile::certs(&mut reader) {
        let cert = cert.map_err(|e| {
            DomainError::ConfigError(format!("Bad PEM in '{}': {}", path.display(), e))
        })?;
        root_store.add(cert).map_err(|e| {
            DomainError::ConfigError(format!(
                "Rejected CA certificate in '{}': {}",
                path.display(),
                e
            ))
        })?;
        added += 1;
    }

    if added == 0 {
        return Err(DomainError::ConfigError(format!(
            "No certificates found in '{}'",
            path.display()
        )));
    }

    Ok(added)
}

pub struct TlsTransport {
    upstream_addr: UpstreamAddr,
    hostname: String,
    connector: tokio_rustls::TlsConnector,
    pool: IdlePool<TlsStream<TcpStream>>,
}

impl TlsTransport {
    pub fn new(upstream_addr: UpstreamAddr, hostname: String) -> Result<Self, DomainError> {
        Ok(Self::with_client_config(
            upstream_addr,
            hostname,
            build_client_config(None)?,
        ))
    }

    pub fn with_client_config(
        upstream_addr: UpstreamAddr,
        hostname: String,
        client_config: Arc<rustls::ClientConfig>,
    ) -> Self {
        Self {
            upstream_addr,
            hostname,
            connector: tokio_rustls::TlsConnector::from(client_config),
            pool: IdlePool::new(),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    fn pool_key(&self) -> String {
        format!("{}#{}", self.upstream_addr, self.hostname)
    }

    /// TCP connect followed by the TLS handshake, each bounded by `timeout`.
    async fn connect_new(&self, timeout: Duration) -> Result<TlsStream<TcpStream>, DomainError> {
        let server = self.upstream_addr.to_string();

        let server_name = ServerName::try_from(self.hostname.clone())
            .map_err(|e| DomainError::InvalidTlsHostname(format!("{}: {}", self.hostname, e)))?;

        let tcp_stream = connect_tcp(&self.upstream_addr, timeout).await?;

        let tls_stream = tokio::time::timeout(timeout, self.connector.connect(server_name, tcp_stream))
            .await
            .map_err(|_| timeout_error(&server))?
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidData => DomainError::TlsHandshakeFailed {
                    server: server.clone(),
                    reason: e.to_string(),
                },
                _ => map_io_error(&server, e),
            })?;

        debug!(server = %server, hostname = %self.hostname, "TLS connection established");
        Ok(tls_stream)
    }
}

#[async_trait]
impl DnsTransport for TlsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let key = self.pool_key();
        let server = self.upstream_addr.to_string();
        let start = Instant::now();

        if let Some(mut stream) = self.pool.take(&key) {
            match exchange_on_stream(&mut stream, message_bytes, timeout, &server).await {
                Ok(response_bytes) => {
                    debug!(server = %server, "TLS query via pooled connection");
                    self.pool.put(&key, stream);
                    return Ok(TransportResponse {
                        bytes: Bytes::from(response_bytes),
                        protocol_used: self.protocol_name(),
                        rtt: start.elapsed(),
                    });
                }
                Err(e @ DomainError::TransportConnectionReset { .. }) => {
                    debug!(server = %server, error = %e, "Pooled TLS connection stale, reconnecting");
                }
                Err(e) => return Err(e),
            }
        }

        let mut stream = self.connect_new(timeout).await?;
        let response_bytes = exchange_on_stream(&mut stream, message_bytes, timeout, &server).await?;
        let rtt = start.elapsed();

        debug!(
            server = %server,
            response_len = response_bytes.len(),
            rtt = ?rtt,
            "TLS response received"
        );

        self.pool.put(&key, stream);

        Ok(TransportResponse {
            bytes: Bytes::from(response_bytes),
            protocol_used: self.protocol_name(),
            rtt,
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TLS"
    }
}
