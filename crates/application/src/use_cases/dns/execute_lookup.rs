use crate::ports::DnsExchange;
use crate::services::DomainNormalizer;
use dotlookup_domain::{DnsQuery, LookupReport, ReportEntry, ResponseCodeClass, WireQuestion};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

pub const ENCODING_ERROR_LABEL: &str = "encoding error";
pub const REQUEST_ERROR_LABEL: &str = "DNS request error";
pub const RESPONSE_CODE_LABEL: &str = "non-successful response code";
pub const NOT_FOUND_LABEL: &str = "could not find DNS entry for question type";

/// Resolves one question against the upstream and turns the outcome into a
/// display-ready [`LookupReport`].
///
/// Every failure ends the call with a single status entry; nothing is retried.
pub struct ExecuteLookupUseCase {
    exchange: Arc<dyn DnsExchange>,
}

impl ExecuteLookupUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self { exchange }
    }

    pub async fn execute(&self, query: &DnsQuery) -> LookupReport {
        let canonical = match DomainNormalizer::normalize(&query.domain) {
            Ok(canonical) => canonical,
            Err(e) => {
                warn!(domain = %e.domain, error = %e.cause, "Could not encode domain name");
                return LookupReport::status(ENCODING_ERROR_LABEL, e.cause);
            }
        };

        let question = WireQuestion::new(&canonical, query.record_type);

        let start = Instant::now();
        let response = match self.exchange.exchange(&question).await {
            Ok(response) => response,
            Err(e) => {
                let elapsed = start.elapsed();
                warn!(
                    error = %e,
                    domain = %question.name,
                    upstream = %self.exchange.upstream(),
                    transport = e.is_transport_error(),
                    "Could not execute DNS request"
                );
                return LookupReport::status(REQUEST_ERROR_LABEL, e.to_string())
                    .with_elapsed(elapsed);
            }
        };

        let rcode = ResponseCodeClass::from_code(response.response_code);
        if let Some(message) = rcode.error_message() {
            debug!(domain = %question.name, rcode = %rcode, "Non-successful response code");
            return LookupReport::status(RESPONSE_CODE_LABEL, message).with_elapsed(response.rtt);
        }

        if response.answers.is_empty() {
            debug!(
                domain = %question.name,
                record_type = %query.record_type,
                "No answers for question type"
            );
            return LookupReport::status(NOT_FOUND_LABEL, query.record_type_label.to_uppercase())
                .with_elapsed(response.rtt);
        }

        debug!(
            domain = %question.name,
            answers = response.answers.len(),
            rtt = ?response.rtt,
            "DNS answer received"
        );

        let entries = response
            .answers
            .into_iter()
            .map(|answer| ReportEntry::new(answer.owner, answer.text, false))
            .collect();

        LookupReport::answers(entries, response.rtt)
    }
}
