//! One-shot WebSocket liveness probe for the Voxgate health endpoint.
//!
//! Performs a single handshake against the gateway's health endpoint and
//! exits 0 when the server accepts and closes the session normally, 1 on any
//! failure. Log output is silent unless `RUST_LOG` is set; supervisors only
//! consume the exit code, and transient failures during startup races are
//! expected.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

use voxgate_ops::errors::probe_error::ProbeResult;
use voxgate_ops::probe::{self, ProbeConfig};

/// Voxgate health probe - exits 0 when the gateway health endpoint is live
#[derive(Parser, Debug)]
#[command(name = "healthcheck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// WebSocket URL of the health endpoint
    #[arg(short = 'u', long = "url", value_name = "WS_URL")]
    url: Option<Url>,

    /// Handshake timeout in seconds
    #[arg(long = "connect-timeout-secs", value_name = "SECS")]
    connect_timeout_secs: Option<u64>,

    /// Bound on the wait for the server's close frame, in seconds
    #[arg(long = "close-timeout-secs", value_name = "SECS")]
    close_timeout_secs: Option<u64>,
}

/// Resolve the probe configuration: env vars first, CLI flags override.
fn build_config(cli: Cli) -> ProbeResult<ProbeConfig> {
    let mut config = ProbeConfig::from_env()?;

    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(secs) = cli.connect_timeout_secs {
        config.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = cli.close_timeout_secs {
        config.close_timeout = Duration::from_secs(secs);
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Silent by default; RUST_LOG opts back into diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .init();

    let cli = Cli::parse();

    let config = match build_config(cli) {
        Ok(config) => config,
        Err(e) => {
            debug!("invalid probe configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match probe::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("health probe failed: {e}");
            ExitCode::FAILURE
        }
    }
}
