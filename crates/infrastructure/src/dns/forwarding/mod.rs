pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;
pub mod upstream_exchange;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::{ParsedResponse, ResponseParser};
pub use upstream_exchange::UpstreamExchange;
