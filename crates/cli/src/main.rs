use clap::Parser;
use dotlookup_domain::{CliOverrides, DnsQuery, RecordType};
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod di;
mod render;

#[derive(Parser)]
#[command(name = "dotlookup")]
#[command(version)]
#[command(about = "Resolve one DNS question over DNS-over-TLS")]
struct Cli {
    /// Domain to look up (Unicode names are Punycode-encoded)
    domain: String,

    /// Record type, e.g. A, AAAA, MX, TXT
    #[arg(default_value = "A")]
    record_type: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream resolver: tls://HOST[:PORT], tcp://HOST[:PORT] or HOST[:PORT]
    #[arg(short = 's', long)]
    server: Option<String>,

    /// TLS server name to verify the upstream certificate against
    #[arg(long)]
    tls_hostname: Option<String>,

    /// Query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        tls_hostname: cli.tls_hostname.clone(),
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    let record_type: RecordType = cli.record_type.parse()?;
    let query = DnsQuery::with_label(cli.domain.as_str(), record_type, cli.record_type.as_str());

    let services = di::LookupServices::new(&config)?;

    info!(domain = %query.domain, record_type = %record_type, "Starting lookup");
    let report = services.execute_lookup.execute(&query).await;

    print!("{}", render::render_report(&report));

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
