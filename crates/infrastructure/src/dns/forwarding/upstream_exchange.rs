use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::{create_transport, Transport};
use async_trait::async_trait;
use dotlookup_application::ports::{DnsExchange, ExchangeResponse};
use dotlookup_domain::{Config, DnsProtocol, DomainError, WireQuestion};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// [`DnsExchange`] backed by one fixed upstream resolver.
///
/// The transport pools its connections internally, so one instance is meant
/// to be shared by every concurrent lookup.
pub struct UpstreamExchange {
    protocol: DnsProtocol,
    transport: Transport,
    timeout: Duration,
}

impl UpstreamExchange {
    pub fn new(
        protocol: DnsProtocol,
        ca_file: Option<&Path>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let transport = create_transport(&protocol, ca_file)?;
        Ok(Self::with_transport(protocol, transport, timeout))
    }

    pub fn with_transport(protocol: DnsProtocol, transport: Transport, timeout: Duration) -> Self {
        Self {
            protocol,
            transport,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let protocol = config.upstream.protocol()?;
        let ca_file = config.upstream.tls_ca_file.as_deref().map(Path::new);
        Self::new(protocol, ca_file, config.upstream.query_timeout())
    }

    pub fn protocol(&self) -> &DnsProtocol {
        &self.protocol
    }
}

#[async_trait]
impl DnsExchange for UpstreamExchange {
    async fn exchange(&self, question: &WireQuestion) -> Result<ExchangeResponse, DomainError> {
        let (query_id, query_bytes) = MessageBuilder::build_query(question)?;

        debug!(
            domain = %question.name,
            record_type = %question.record_type,
            upstream = %self.protocol,
            transport = self.transport.protocol_name(),
            query_id = query_id,
            "Sending DNS query"
        );

        let response = self.transport.send(&query_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, query_id)?;

        if parsed.truncated {
            warn!(
                domain = %question.name,
                protocol = response.protocol_used,
                "Upstream set TC on a stream transport; using the partial answer"
            );
        }

        Ok(ExchangeResponse::new(
            parsed.response_code,
            parsed.answers,
            response.rtt,
        ))
    }

    fn upstream(&self) -> String {
        self.protocol.to_string()
    }
}
