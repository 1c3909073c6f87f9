mod dns_server_mock;
mod tls_certs;

pub use dns_server_mock::*;
pub use tls_certs::*;
