//! Probe error types
//!
//! Every failure class the liveness probe can hit, kept distinct for
//! diagnostics even though the `healthcheck` binary collapses all of them
//! into a single non-zero exit code.

use std::time::Duration;
use thiserror::Error;

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors produced by the health probe
#[derive(Error, Debug)]
pub enum ProbeError {
    /// WebSocket handshake did not complete within the connect timeout
    #[error("WebSocket handshake timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// Connection refused, upgrade rejected, or TLS failure during the handshake
    #[error("WebSocket handshake failed: {0}")]
    Handshake(String),

    /// Server accepted the handshake but never closed the session
    #[error("server did not close the session within {0:?}")]
    CloseTimeout(Duration),

    /// Server closed the session with a non-normal status code
    #[error("server closed the session abnormally (code {code}): {reason}")]
    AbnormalClosure { code: u16, reason: String },

    /// Stream ended without a close frame
    #[error("connection ended without a close frame")]
    ConnectionLost,

    /// Protocol or IO error while awaiting the server's close
    #[error("transport error while awaiting close: {0}")]
    Transport(String),

    /// Probe endpoint URL is not usable
    #[error("invalid probe endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Probe configuration is not usable
    #[error("invalid probe configuration: {0}")]
    Configuration(String),
}
