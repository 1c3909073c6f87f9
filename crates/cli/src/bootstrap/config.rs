use dotlookup_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Must run after `init_logging`, otherwise the event has no subscriber.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        server = %config.upstream.server,
        tls_hostname = config.upstream.tls_hostname.as_deref().unwrap_or("-"),
        timeout_ms = config.upstream.query_timeout_ms,
        "Configuration loaded"
    );
}
