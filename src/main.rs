use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use decision_calm_client::{
    cli::{connect, execute_command, Cli, CliResult},
    config::{Config, LogFormat},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "Decision Calm client starting"
    );

    let api = match connect(&config) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "Failed to initialize Decision API client");
            return Err(e.into());
        }
    };

    // A page load abandoned with Ctrl-C never renders its result
    let result = tokio::select! {
        result = execute_command(cli.command, api, &config) => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Request cancelled");
            CliResult::error("Cancelled.")
        }
    };

    if result.exit_code == 0 {
        println!("{}", result.message);
    } else {
        eprintln!("{}", result.message);
    }
    std::process::exit(result.exit_code);
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
