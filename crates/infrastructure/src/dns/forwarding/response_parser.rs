use dotlookup_domain::{AnswerRecord, DomainError};
use hickory_proto::op::Message;
use hickory_proto::rr::Record;
use tracing::debug;

const DNS_HEADER_LEN: usize = 12;
const QR_BIT: u8 = 0x80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub response_code: u16,

    pub answers: Vec<AnswerRecord>,

    pub truncated: bool,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a reply to the query sent with `expected_id`.
    ///
    /// A reply with a different ID or without the QR bit is rejected before
    /// the body is decoded.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<ParsedResponse, DomainError> {
        if response_bytes.len() < DNS_HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response too short: {} bytes",
                response_bytes.len()
            )));
        }

        let actual_id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        if actual_id != expected_id {
            return Err(DomainError::ResponseIdMismatch {
                expected: expected_id,
                actual: actual_id,
            });
        }

        if response_bytes[2] & QR_BIT == 0 {
            return Err(DomainError::InvalidDnsResponse(
                "Message is a query, not a response".to_string(),
            ));
        }

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let response_code = u16::from(message.response_code());
        let truncated = message.truncated();
        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::to_answer).collect();

        debug!(
            rcode = response_code,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            response_code,
            answers,
            truncated,
        })
    }

    fn to_answer(record: &Record) -> AnswerRecord {
        AnswerRecord::new(record.name().to_ascii(), record.to_string())
    }
}
