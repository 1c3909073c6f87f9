#![allow(dead_code)]

use async_trait::async_trait;
use dotlookup_application::ports::{DnsExchange, ExchangeResponse};
use dotlookup_domain::{AnswerRecord, DomainError, WireQuestion};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

pub const MOCK_RTT: Duration = Duration::from_millis(7);

/// Deterministic resolver stub keyed by the fully-qualified question name.
#[derive(Clone, Default)]
pub struct MockDnsExchange {
    responses: Arc<RwLock<HashMap<String, Result<ExchangeResponse, DomainError>>>>,
    questions: Arc<RwLock<Vec<WireQuestion>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, response: ExchangeResponse) {
        self.responses
            .write()
            .unwrap()
            .insert(name.to_string(), Ok(response));
    }

    pub fn set_error(&self, name: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(name.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn questions(&self) -> Vec<WireQuestion> {
        self.questions.read().unwrap().clone()
    }
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(&self, question: &WireQuestion) -> Result<ExchangeResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.questions.write().unwrap().push(question.clone());

        self.responses
            .read()
            .unwrap()
            .get(question.name.as_ref())
            .cloned()
            .unwrap_or_else(|| Ok(ExchangeResponse::new(3, vec![], MOCK_RTT)))
    }

    fn upstream(&self) -> String {
        "mock://resolver".to_string()
    }
}

pub struct ExchangeResponseBuilder {
    response_code: u16,
    answers: Vec<AnswerRecord>,
    rtt: Duration,
}

impl ExchangeResponseBuilder {
    pub fn new() -> Self {
        Self {
            response_code: 0,
            answers: vec![],
            rtt: MOCK_RTT,
        }
    }

    pub fn rcode(mut self, response_code: u16) -> Self {
        self.response_code = response_code;
        self
    }

    pub fn a_record(mut self, owner: &str, ip: &str) -> Self {
        self.answers.push(AnswerRecord::new(
            owner,
            format!("{} 300 IN A {}", owner, ip),
        ));
        self
    }

    pub fn answer(mut self, owner: &str, text: &str) -> Self {
        self.answers.push(AnswerRecord::new(owner, text));
        self
    }

    pub fn rtt(mut self, rtt: Duration) -> Self {
        self.rtt = rtt;
        self
    }

    pub fn build(self) -> ExchangeResponse {
        ExchangeResponse::new(self.response_code, self.answers, self.rtt)
    }
}
