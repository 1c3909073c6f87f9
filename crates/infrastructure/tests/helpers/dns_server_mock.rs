#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_rustls::TlsAcceptor;

/// How the mock answers every query it reads.
#[derive(Debug, Clone)]
pub struct MockBehavior {
    pub rcode: u8,
    pub answers: Vec<Ipv4Addr>,
    /// Added to the query ID before echoing it back.
    pub id_offset: u16,
    pub respond: bool,
    /// Number of queries answered on each connection before going silent.
    pub replies_per_connection: Option<usize>,
    pub close_after_reply: bool,
}

impl MockBehavior {
    pub fn answer(answers: &[Ipv4Addr]) -> Self {
        Self {
            rcode: 0,
            answers: answers.to_vec(),
            id_offset: 0,
            respond: true,
            replies_per_connection: None,
            close_after_reply: false,
        }
    }

    pub fn example_com() -> Self {
        Self::answer(&[Ipv4Addr::new(93, 184, 216, 34)])
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Self::answer(&[])
        }
    }

    pub fn silent() -> Self {
        Self {
            respond: false,
            ..Self::answer(&[])
        }
    }

    pub fn wrong_id(mut self) -> Self {
        self.id_offset = 1;
        self
    }

    /// Answers the first query on a connection, then never replies on it again.
    pub fn silent_after_first(mut self) -> Self {
        self.replies_per_connection = Some(1);
        self
    }

    pub fn close_after_reply(mut self) -> Self {
        self.close_after_reply = true;
        self
    }
}

/// Stream DNS server on 127.0.0.1 speaking either plain TCP or TLS.
pub struct MockDnsServer {
    addr: SocketAddr,
    accepted: Arc<AtomicUsize>,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start_tcp(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        Self::start(behavior, None).await
    }

    pub async fn start_tls(
        behavior: MockBehavior,
        acceptor: TlsAcceptor,
    ) -> Result<Self, std::io::Error> {
        Self::start(behavior, Some(acceptor)).await
    }

    async fn start(
        behavior: MockBehavior,
        acceptor: Option<TlsAcceptor>,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let accepted = Arc::new(AtomicUsize::new(0));
        let queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = accepted.clone();
        let query_counter = queries.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = listener.accept() => {
                        let Ok((stream, _)) = result else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);
                        let behavior = behavior.clone();
                        let acceptor = acceptor.clone();
                        let query_counter = query_counter.clone();
                        tokio::spawn(async move {
                            match acceptor {
                                Some(acceptor) => {
                                    if let Ok(tls) = acceptor.accept(stream).await {
                                        serve_connection(tls, behavior, query_counter).await;
                                    }
                                }
                                None => serve_connection(stream, behavior, query_counter).await,
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            accepted,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of TCP connections accepted so far.
    pub fn accepted_connections(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    /// Number of complete queries read across all connections.
    pub fn queries_received(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_connection<S>(mut stream: S, behavior: MockBehavior, queries: Arc<AtomicUsize>)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut replied = 0usize;
    loop {
        let mut len_buf = [0u8; 2];
        if stream.read_exact(&mut len_buf).await.is_err() {
            return;
        }
        let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        if stream.read_exact(&mut query).await.is_err() {
            return;
        }
        queries.fetch_add(1, Ordering::SeqCst);

        let exhausted = behavior
            .replies_per_connection
            .is_some_and(|limit| replied >= limit);
        if !behavior.respond || exhausted {
            tokio::time::sleep(Duration::from_secs(30)).await;
            return;
        }

        let response = build_mock_response(&query, &behavior);
        let len = (response.len() as u16).to_be_bytes();
        if stream.write_all(&len).await.is_err()
            || stream.write_all(&response).await.is_err()
            || stream.flush().await.is_err()
        {
            return;
        }
        replied += 1;

        if behavior.close_after_reply {
            let _ = stream.shutdown().await;
            return;
        }
    }
}

/// Echoes the question and appends one A record per configured address,
/// each pointing back at the question name.
pub fn build_mock_response(query: &[u8], behavior: &MockBehavior) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let mut response = Vec::with_capacity(512);

    let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(behavior.id_offset);
    response.extend_from_slice(&id.to_be_bytes());

    response.push(0x81);
    response.push(0x80 | (behavior.rcode & 0x0f));

    response.extend_from_slice(&query[4..6]);

    response.extend_from_slice(&(behavior.answers.len() as u16).to_be_bytes());

    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..]);

    for ip in &behavior.answers {
        response.extend_from_slice(&[
            0xc0, 0x0c,
            0x00, 0x01,
            0x00, 0x01,
            0x00, 0x00, 0x00, 0x3c,
            0x00, 0x04,
        ]);
        response.extend_from_slice(&ip.octets());
    }

    response
}
