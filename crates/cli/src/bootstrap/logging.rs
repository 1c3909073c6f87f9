use dotlookup_domain::Config;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout is reserved for the lookup report.
///
/// `RUST_LOG` takes precedence over the configured level, e.g.
/// `RUST_LOG=dotlookup_infrastructure=debug`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(&config.logging.level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_env_filter(filter)
        .with_ansi(true)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}

fn level_filter(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::WARN)
}
