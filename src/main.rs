use anyhow::Result;
use linksnip::config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; ignore absence in production
    let _ = dotenvy::dotenv();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format);

    config.print_summary();

    linksnip::server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level; `LOG_FORMAT=json` switches to
/// structured output for log aggregation.
fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
