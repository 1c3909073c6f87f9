//! dotlookup application layer: ports and use cases
pub mod ports;
pub mod services;
pub mod use_cases;
