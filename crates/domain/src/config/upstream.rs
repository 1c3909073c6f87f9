use crate::{DnsProtocol, DomainError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_UPSTREAM: &str = "tls://1.1.1.1:853";
pub const DEFAULT_TLS_HOSTNAME: &str = "cloudflare-dns.com";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// `tls://HOST:PORT` or `tcp://HOST:PORT`
    #[serde(default = "default_server")]
    pub server: String,

    /// TLS server name; defaults to the host part of `server`.
    #[serde(default)]
    pub tls_hostname: Option<String>,

    /// Extra PEM trust anchors on top of the webpki roots.
    #[serde(default)]
    pub tls_ca_file: Option<String>,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            tls_hostname: Some(DEFAULT_TLS_HOSTNAME.to_string()),
            tls_ca_file: None,
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl UpstreamConfig {
    pub fn protocol(&self) -> Result<DnsProtocol, DomainError> {
        let protocol: DnsProtocol = self.server.parse()?;
        Ok(match &self.tls_hostname {
            Some(hostname) => protocol.with_tls_hostname(hostname),
            None => protocol,
        })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

fn default_server() -> String {
    DEFAULT_UPSTREAM.to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}
