use dotlookup_application::use_cases::ExecuteLookupUseCase;
use dotlookup_domain::Config;
use dotlookup_infrastructure::dns::UpstreamExchange;
use std::sync::Arc;
use tracing::info;

pub struct LookupServices {
    pub execute_lookup: ExecuteLookupUseCase,
}

impl LookupServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let exchange = UpstreamExchange::from_config(config)?;
        info!(
            upstream = %exchange.protocol(),
            timeout_ms = config.upstream.query_timeout_ms,
            "Upstream resolver configured"
        );

        Ok(Self {
            execute_lookup: ExecuteLookupUseCase::new(Arc::new(exchange)),
        })
    }
}
