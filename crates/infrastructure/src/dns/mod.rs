pub mod forwarding;
pub mod transport;

pub use forwarding::UpstreamExchange;
