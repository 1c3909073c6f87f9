mod dns_exchange;

pub use dns_exchange::{DnsExchange, ExchangeResponse};
