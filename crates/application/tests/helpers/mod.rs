mod mock_exchange;

pub use mock_exchange::*;
