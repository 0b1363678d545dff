//! WebSocket liveness probe
//!
//! A single-attempt health check against the gateway's WebSocket health
//! endpoint. The probe performs the handshake, waits for the server to close
//! the session, and reports the outcome as a `ProbeResult`. Retry and backoff
//! policy belong to the caller (a container supervisor or orchestrator).

pub mod client;
pub mod config;

pub use client::run;
pub use config::ProbeConfig;
