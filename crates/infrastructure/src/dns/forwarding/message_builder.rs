//! Serializes a [`WireQuestion`] into a DNS query message using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use dotlookup_domain::{DnsClass, DomainError, WireQuestion};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a single-question query with a random ID and returns the ID
    /// together with the wire bytes, for matching the reply.
    pub fn build_query(question: &WireQuestion) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_ascii(&question.name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", question.name, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(&question.record_type));
        query.set_query_class(Self::dns_class(question.class));

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(question.recursion_desired);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn dns_class(class: DnsClass) -> DNSClass {
        match class {
            DnsClass::Internet => DNSClass::IN,
        }
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
