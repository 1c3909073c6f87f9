use crate::DomainError;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_TLS_PORT: u16 = 853;
pub const DEFAULT_TCP_PORT: u16 = 53;

/// Upstream address that may still need a hostname lookup at connect time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpstreamAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl UpstreamAddr {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            UpstreamAddr::Resolved(addr) => Some(*addr),
            UpstreamAddr::Unresolved { .. } => None,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            UpstreamAddr::Resolved(addr) => addr.port(),
            UpstreamAddr::Unresolved { port, .. } => *port,
        }
    }

    /// Host part without the port, as used for the TLS server name.
    pub fn host(&self) -> String {
        match self {
            UpstreamAddr::Resolved(addr) => addr.ip().to_string(),
            UpstreamAddr::Unresolved { hostname, .. } => hostname.to_string(),
        }
    }
}

impl fmt::Display for UpstreamAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamAddr::Resolved(addr) => write!(f, "{}", addr),
            UpstreamAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

/// Stream transport to the upstream resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DnsProtocol {
    Tcp {
        addr: UpstreamAddr,
    },
    Tls {
        addr: UpstreamAddr,
        hostname: Arc<str>,
    },
}

impl DnsProtocol {
    pub fn addr(&self) -> &UpstreamAddr {
        match self {
            DnsProtocol::Tcp { addr } | DnsProtocol::Tls { addr, .. } => addr,
        }
    }

    pub fn hostname(&self) -> Option<&str> {
        match self {
            DnsProtocol::Tls { hostname, .. } => Some(hostname),
            DnsProtocol::Tcp { .. } => None,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            DnsProtocol::Tcp { .. } => "TCP",
            DnsProtocol::Tls { .. } => "TLS",
        }
    }

    /// Replaces the TLS server name; a no-op for plain TCP.
    pub fn with_tls_hostname(self, tls_hostname: &str) -> Self {
        match self {
            DnsProtocol::Tls { addr, .. } => DnsProtocol::Tls {
                addr,
                hostname: tls_hostname.into(),
            },
            tcp => tcp,
        }
    }
}

impl fmt::Display for DnsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsProtocol::Tcp { addr } => write!(f, "tcp://{}", addr),
            DnsProtocol::Tls { addr, hostname } => write!(f, "tls://{} ({})", addr, hostname),
        }
    }
}

fn parse_host_port(s: &str, default_port: u16) -> Option<(&str, u16)> {
    if let Some(rest) = s.strip_prefix('[') {
        let end = rest.find(']')?;
        let host = &rest[..end];
        let port = match rest[end + 1..].strip_prefix(':') {
            Some(port_str) => port_str.parse::<u16>().ok()?,
            None if rest.len() == end + 1 => default_port,
            None => return None,
        };
        return Some((host, port));
    }
    match s.rsplit_once(':') {
        Some((host, port_str)) if !host.contains(':') => {
            let port = port_str.parse::<u16>().ok()?;
            Some((host, port))
        }
        Some(_) => None,
        None => Some((s, default_port)),
    }
}

fn parse_upstream_addr(addr_str: &str, default_port: u16) -> Result<UpstreamAddr, DomainError> {
    if let Ok(addr) = addr_str.parse::<SocketAddr>() {
        return Ok(UpstreamAddr::Resolved(addr));
    }
    let (host, port) = parse_host_port(addr_str, default_port)
        .filter(|(host, _)| !host.is_empty())
        .ok_or_else(|| DomainError::InvalidUpstream(format!("Invalid address '{}'", addr_str)))?;
    if let Ok(ip) = host.parse::<std::net::IpAddr>() {
        return Ok(UpstreamAddr::Resolved(SocketAddr::new(ip, port)));
    }
    Ok(UpstreamAddr::Unresolved {
        hostname: host.into(),
        port,
    })
}

impl FromStr for DnsProtocol {
    type Err = DomainError;

    /// Accepts `tls://HOST[:PORT]`, `tcp://HOST[:PORT]`, or a bare
    /// `HOST[:PORT]` which means TLS.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(addr_str) = s.strip_prefix("tcp://") {
            let addr = parse_upstream_addr(addr_str, DEFAULT_TCP_PORT)?;
            return Ok(DnsProtocol::Tcp { addr });
        }
        if s.contains("://") && !s.starts_with("tls://") {
            return Err(DomainError::InvalidUpstream(format!(
                "Unsupported scheme in '{}'. Expected 'tls://HOST:PORT' or 'tcp://HOST:PORT'",
                s
            )));
        }
        let addr_str = s.strip_prefix("tls://").unwrap_or(s);
        let addr = parse_upstream_addr(addr_str, DEFAULT_TLS_PORT)?;
        let hostname: Arc<str> = addr.host().into();
        Ok(DnsProtocol::Tls { addr, hostname })
    }
}
