//! Error types for the operational tooling.

pub mod probe_error;

pub use probe_error::{ProbeError, ProbeResult};
