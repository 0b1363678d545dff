//! Provider configuration fixtures
//!
//! One factory per provider shape, each returning a flat, immutable mapping
//! of option name to scalar value. Factories take no arguments, never fail,
//! and return value-equal mappings on every call, so parameterized tests can
//! rely on them without setup or teardown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Fixture Values
// =============================================================================

/// A scalar configuration value: string or integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureValue {
    /// String-valued option (API keys, model names, device selectors)
    Str(String),
    /// Integer-valued option (speaker indices, ports)
    Int(i64),
}

impl FixtureValue {
    /// Borrow the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            Self::Int(_) => None,
        }
    }

    /// Get the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Str(_) => None,
            Self::Int(i) => Some(*i),
        }
    }

    /// True only for an empty string; integers always count as populated.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }
}

impl From<&str> for FixtureValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for FixtureValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

// =============================================================================
// Provider Fixture Mapping
// =============================================================================

/// An immutable mapping from option name to scalar value for one provider.
///
/// Read-only by construction: the inner map is never exposed mutably, so a
/// fixture handed to a test cannot drift from what its factory returned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderFixture(BTreeMap<String, FixtureValue>);

impl ProviderFixture {
    fn from_pairs<const N: usize>(pairs: [(&str, FixtureValue); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    /// Look up a value by option name.
    pub fn get(&self, key: &str) -> Option<&FixtureValue> {
        self.0.get(key)
    }

    /// Look up a string value by option name.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(FixtureValue::as_str)
    }

    /// Look up an integer value by option name.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(FixtureValue::as_int)
    }

    /// True when the fixture defines the option.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Option names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of options in the fixture.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the fixture has no options.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// LLM Providers
// =============================================================================

/// Hosted LLM configuration (OpenAI chat-completion shape).
pub fn openai_llm() -> ProviderFixture {
    ProviderFixture::from_pairs([
        ("api_key", "test-openai-api-key".into()),
        ("model", "gpt-4o-mini".into()),
    ])
}

/// Locally hosted LLM configuration (OpenAI-compatible base URL shape).
pub fn ollama_llm() -> ProviderFixture {
    ProviderFixture::from_pairs([
        ("base_url", "http://localhost:11434/v1".into()),
        ("model", "llama3.1:8b".into()),
    ])
}

// =============================================================================
// Speech-to-Text Providers
// =============================================================================

/// Hosted STT configuration (Deepgram streaming shape).
pub fn deepgram_stt() -> ProviderFixture {
    ProviderFixture::from_pairs([
        ("api_key", "test-deepgram-api-key".into()),
        ("model", "nova-2".into()),
        ("language", "en-US".into()),
    ])
}

// =============================================================================
// Text-to-Speech Providers
// =============================================================================

/// Hosted TTS configuration, model + voice shape (OpenAI).
pub fn openai_tts() -> ProviderFixture {
    ProviderFixture::from_pairs([
        ("api_key", "test-openai-api-key".into()),
        ("model", "tts-1".into()),
        ("voice", "alloy".into()),
    ])
}

/// Hosted TTS configuration, voice_id + model_id shape (ElevenLabs).
pub fn elevenlabs_tts() -> ProviderFixture {
    ProviderFixture::from_pairs([
        ("api_key", "test-elevenlabs-api-key".into()),
        ("voice_id", "21m00Tcm4TlvDq8ikWAM".into()),
        ("model_id", "eleven_turbo_v2_5".into()),
    ])
}

/// Local TTS configuration (Piper ONNX model on disk). `speaker` is the
/// integer speaker index within the voice model.
pub fn piper_tts() -> ProviderFixture {
    ProviderFixture::from_pairs([
        ("model_path", "/models/en_US-lessac-medium.onnx".into()),
        ("speaker", 0i64.into()),
    ])
}

// =============================================================================
// Embedding Providers
// =============================================================================

/// Hosted embeddings configuration (OpenAI shape).
pub fn openai_embeddings() -> ProviderFixture {
    ProviderFixture::from_pairs([
        ("api_key", "test-openai-api-key".into()),
        ("model", "text-embedding-3-small".into()),
    ])
}

/// Local embeddings configuration (sentence-transformers model + device).
pub fn local_embeddings() -> ProviderFixture {
    ProviderFixture::from_pairs([
        ("model", "all-MiniLM-L6-v2".into()),
        ("device", "cpu".into()),
    ])
}
