//! Probe configuration
//!
//! Configuration for the liveness probe, loaded from environment variables
//! with built-in defaults. Priority: CLI flags (applied by the binary) >
//! environment variables > defaults.
//!
//! Environment variables:
//! - `HEALTHCHECK_URL` - WebSocket URL of the health endpoint
//! - `HEALTHCHECK_CONNECT_TIMEOUT_SECS` - handshake timeout in seconds
//! - `HEALTHCHECK_CLOSE_TIMEOUT_SECS` - bound on the wait for the server
//!   to close the session, in seconds

use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::probe_error::{ProbeError, ProbeResult};

/// Default health endpoint exposed by the gateway
pub const DEFAULT_HEALTH_URL: &str = "ws://localhost:8085/health";

/// Default bound on the WebSocket handshake
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound on the post-handshake wait for the server's close frame
pub const DEFAULT_CLOSE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for a single probe attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// WebSocket URL of the health endpoint
    pub url: Url,

    /// Maximum time allowed for the WebSocket handshake
    pub connect_timeout: Duration,

    /// Maximum time to wait for the server's close frame after the
    /// handshake succeeds; re-armed for each received frame
    pub close_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_HEALTH_URL).expect("default health URL must parse"),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            close_timeout: DEFAULT_CLOSE_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset. Returns an error for values that are
    /// set but unusable.
    pub fn from_env() -> ProbeResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("HEALTHCHECK_URL") {
            config.url = Url::parse(&raw).map_err(|e| ProbeError::InvalidEndpoint {
                url: raw.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(timeout) = duration_from_env("HEALTHCHECK_CONNECT_TIMEOUT_SECS")? {
            config.connect_timeout = timeout;
        }

        if let Some(timeout) = duration_from_env("HEALTHCHECK_CLOSE_TIMEOUT_SECS")? {
            config.close_timeout = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// The endpoint must be a `ws` or `wss` URL with a host, and both
    /// timeouts must be non-zero.
    pub fn validate(&self) -> ProbeResult<()> {
        match self.url.scheme() {
            "ws" | "wss" => {}
            other => {
                return Err(ProbeError::InvalidEndpoint {
                    url: self.url.to_string(),
                    reason: format!("unsupported scheme '{other}', expected ws or wss"),
                });
            }
        }

        if self.url.host_str().is_none() {
            return Err(ProbeError::InvalidEndpoint {
                url: self.url.to_string(),
                reason: "missing host".to_string(),
            });
        }

        if self.connect_timeout.is_zero() {
            return Err(ProbeError::Configuration(
                "connect timeout must be non-zero".to_string(),
            ));
        }

        if self.close_timeout.is_zero() {
            return Err(ProbeError::Configuration(
                "close timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Read a seconds-valued environment variable as a `Duration`.
///
/// Returns `Ok(None)` when the variable is unset and an error when it is
/// set to something that does not parse as an unsigned integer.
fn duration_from_env(name: &str) -> ProbeResult<Option<Duration>> {
    match env::var(name) {
        Ok(raw) => {
            let secs: u64 = raw.parse().map_err(|_| {
                ProbeError::Configuration(format!("{name} must be an unsigned integer, got '{raw}'"))
            })?;
            Ok(Some(Duration::from_secs(secs)))
        }
        Err(_) => Ok(None),
    }
}
