//! Operational tooling for the Voxgate realtime voice gateway.
//!
//! Two independent units ship in this crate:
//! - `probe` - a one-shot WebSocket liveness probe against the gateway's
//!   local health endpoint, exposed as the `healthcheck` binary
//! - `fixtures` - deterministic provider configuration fixtures (LLM, STT,
//!   TTS, embeddings) and a session-scoped async runtime for tests

pub mod errors;
pub mod fixtures;
pub mod probe;

// Re-export commonly used items for convenience
pub use errors::probe_error::{ProbeError, ProbeResult};
pub use fixtures::{ProviderFixture, session_runtime};
pub use probe::ProbeConfig;
