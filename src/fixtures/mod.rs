//! Test Fixtures
//!
//! Deterministic configuration fixtures for the provider integrations the
//! gateway talks to, plus a session-scoped async runtime for tests:
//! - Provider configuration fixtures (LLM, STT, TTS, embeddings)
//! - Session-scoped Tokio runtime shared across a test run
//!
//! Values are test doubles, never real credentials.

pub mod providers;
pub mod runtime;

pub use providers::{
    FixtureValue, ProviderFixture, deepgram_stt, elevenlabs_tts, local_embeddings, ollama_llm,
    openai_embeddings, openai_llm, openai_tts, piper_tts,
};
pub use runtime::session_runtime;
