//! dotlookup infrastructure: wire codec and stream transports
pub mod dns;
