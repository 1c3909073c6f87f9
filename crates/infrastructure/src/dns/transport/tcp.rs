use super::pool::IdlePool;
use super::{map_io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use dotlookup_domain::{DomainError, UpstreamAddr};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

/// Plain DNS over TCP (RFC 1035 §4.2.2, RFC 7766).
pub struct TcpTransport {
    upstream_addr: UpstreamAddr,
    pool: IdlePool<TcpStream>,
}

impl TcpTransport {
    pub fn new(upstream_addr: UpstreamAddr) -> Self {
        Self {
            upstream_addr,
            pool: IdlePool::new(),
        }
    }

    fn pool_key(&self) -> String {
        self.upstream_addr.to_string()
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.pool_key();
        let start = Instant::now();

        if let Some(mut stream) = self.pool.take(&server) {
            match exchange_on_stream(&mut stream, message_bytes, timeout, &server).await {
                Ok(response_bytes) => {
                    debug!(server = %server, "TCP query via pooled connection");
                    self.pool.put(&server, stream);
                    return Ok(TransportResponse {
                        bytes: Bytes::from(response_bytes),
                        protocol_used: self.protocol_name(),
                        rtt: start.elapsed(),
                    });
                }
                // only a connection the server already closed is safe to redial
                Err(e @ DomainError::TransportConnectionReset { .. }) => {
                    debug!(server = %server, error = %e, "Pooled TCP connection stale, reconnecting");
                }
                Err(e) => return Err(e),
            }
        }

        let mut stream = connect_tcp(&self.upstream_addr, timeout).await?;
        let response_bytes = exchange_on_stream(&mut stream, message_bytes, timeout, &server).await?;
        let rtt = start.elapsed();

        debug!(
            server = %server,
            response_len = response_bytes.len(),
            rtt = ?rtt,
            "TCP response received"
        );

        self.pool.put(&server, stream);

        Ok(TransportResponse {
            bytes: Bytes::from(response_bytes),
            protocol_used: self.protocol_name(),
            rtt,
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

/// Opens a TCP connection, resolving the host first when needed.
pub(crate) async fn connect_tcp(
    upstream_addr: &UpstreamAddr,
    timeout: Duration,
) -> Result<TcpStream, DomainError> {
    let server = upstream_addr.to_string();

    let connect = async {
        match upstream_addr {
            UpstreamAddr::Resolved(addr) => TcpStream::connect(*addr).await,
            UpstreamAddr::Unresolved { hostname, port } => {
                TcpStream::connect((hostname.as_ref(), *port)).await
            }
        }
    };

    let stream = tokio::time::timeout(timeout, connect)
        .await
        .map_err(|_| timeout_error(&server))?
        .map_err(|e| map_io_error(&server, e))?;

    stream
        .set_nodelay(true)
        .map_err(|e| map_io_error(&server, e))?;

    Ok(stream)
}

/// Writes one framed query and reads one framed reply, each step bounded by
/// `timeout`.
pub(crate) async fn exchange_on_stream<S>(
    stream: &mut S,
    message_bytes: &[u8],
    timeout: Duration,
    server: &str,
) -> Result<Vec<u8>, DomainError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    tokio::time::timeout(timeout, send_with_length_prefix(stream, message_bytes, server))
        .await
        .map_err(|_| timeout_error(server))??;

    tokio::time::timeout(timeout, read_with_length_prefix(stream, server))
        .await
        .map_err(|_| timeout_error(server))?
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
    server: &str,
) -> Result<(), DomainError>
where
    S: AsyncWrite + Unpin,
{
    if message_bytes.len() > MAX_TCP_MESSAGE_SIZE {
        return Err(DomainError::IoError(format!(
            "Query too large: {} bytes (max {})",
            message_bytes.len(),
            MAX_TCP_MESSAGE_SIZE
        )));
    }

    let length_bytes = (message_bytes.len() as u16).to_be_bytes();

    stream
        .write_all(&length_bytes)
        .await
        .map_err(|e| map_io_error(server, e))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| map_io_error(server, e))?;
    stream.flush().await.map_err(|e| map_io_error(server, e))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(
    stream: &mut S,
    server: &str,
) -> Result<Vec<u8>, DomainError>
where
    S: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| map_io_error(server, e))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| map_io_error(server, e))?;

    Ok(response)
}
