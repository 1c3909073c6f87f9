use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("DNS response ID mismatch: sent {expected}, received {actual}")]
    ResponseIdMismatch { expected: u16, actual: u16 },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}: {reason}")]
    TransportConnectionRefused { server: String, reason: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("TLS handshake failed with {server}: {reason}")]
    TlsHandshakeFailed { server: String, reason: String },

    #[error("Invalid TLS hostname '{0}'")]
    InvalidTlsHostname(String),

    #[error("Invalid upstream: {0}")]
    InvalidUpstream(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// The raw domain could not be turned into an ASCII-compatible wire name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not encode domain '{domain}': {cause}")]
pub struct NormalizationError {
    /// The domain exactly as the caller supplied it.
    pub domain: String,
    pub cause: String,
}

impl NormalizationError {
    pub fn new(domain: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            cause: cause.into(),
        }
    }
}

impl DomainError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::TransportTimeout { .. })
    }

    /// Network-level failures, as opposed to malformed replies.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::TlsHandshakeFailed { .. }
                | DomainError::IoError(_)
        )
    }
}
