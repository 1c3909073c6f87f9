//! dotlookup domain layer
pub mod config;
pub mod dns_protocol;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup_report;
pub mod response_code;
pub mod wire_question;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, UpstreamConfig};
pub use dns_protocol::{DnsProtocol, UpstreamAddr};
pub use dns_query::DnsQuery;
pub use dns_record::{AnswerRecord, RecordType};
pub use errors::{DomainError, NormalizationError};
pub use lookup_report::{LookupReport, ReportEntry};
pub use response_code::ResponseCodeClass;
pub use wire_question::{DnsClass, WireQuestion};
