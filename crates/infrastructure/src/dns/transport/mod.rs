pub mod pool;
pub mod tcp;
pub mod tls;

use async_trait::async_trait;
use bytes::Bytes;
use dotlookup_domain::{DnsProtocol, DomainError};
use std::io;
use std::path::Path;
use std::time::Duration;

pub use pool::IdlePool;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Bytes,

    pub protocol_used: &'static str,

    /// Connect (when no idle connection was reused) plus write plus read.
    pub rtt: Duration,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Tcp(tcp::TcpTransport),
    Tls(tls::TlsTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tls(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Tcp(t) => DnsTransport::protocol_name(t),
            Self::Tls(t) => DnsTransport::protocol_name(t),
        }
    }
}

/// Builds the transport for `protocol`. `ca_file` adds PEM trust anchors on
/// top of the bundled web PKI roots and is ignored for plain TCP.
pub fn create_transport(
    protocol: &DnsProtocol,
    ca_file: Option<&Path>,
) -> Result<Transport, DomainError> {
    match protocol {
        DnsProtocol::Tcp { addr } => Ok(Transport::Tcp(tcp::TcpTransport::new(addr.clone()))),
        DnsProtocol::Tls { addr, hostname } => {
            let client_config = tls::build_client_config(ca_file)?;
            Ok(Transport::Tls(tls::TlsTransport::with_client_config(
                addr.clone(),
                hostname.to_string(),
                client_config,
            )))
        }
    }
}

pub(crate) fn map_io_error(server: &str, e: io::Error) -> DomainError {
    match e.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
            server: server.to_string(),
            reason: e.to_string(),
        },
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => DomainError::TransportConnectionReset {
            server: server.to_string(),
        },
        io::ErrorKind::TimedOut => DomainError::TransportTimeout {
            server: server.to_string(),
        },
        _ => DomainError::IoError(format!("{}: {}", server, e)),
    }
}

pub(crate) fn timeout_error(server: &str) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}
