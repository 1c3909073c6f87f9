use async_trait::async_trait;
use dotlookup_domain::{AnswerRecord, DomainError, WireQuestion};
use std::time::Duration;

/// Parsed reply to a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResponse {
    /// RCODE as sent by the resolver.
    pub response_code: u16,

    /// Answer section, in the order the resolver returned it.
    pub answers: Vec<AnswerRecord>,

    /// Time between writing the query and reading the full reply.
    pub rtt: Duration,
}

impl ExchangeResponse {
    pub fn new(response_code: u16, answers: Vec<AnswerRecord>, rtt: Duration) -> Self {
        Self {
            response_code,
            answers,
            rtt,
        }
    }
}

/// Sends one question to the upstream resolver and waits for its reply.
///
/// Implementations must be safe to call concurrently; a query and its reply
/// never share a connection with another in-flight query.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(&self, question: &WireQuestion) -> Result<ExchangeResponse, DomainError>;

    /// Human-readable upstream identity, used in logs.
    fn upstream(&self) -> String;
}
