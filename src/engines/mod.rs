//! Speech synthesis engines.
//!
//! This module contains implementations of text-to-speech engines.
//!
//! # Available Engines
//!
//! Enable engines via Cargo features:
//! - `elevenlabs` - ElevenLabs HTTP API (enabled by default, requires an API key)

#[cfg(feature = "elevenlabs")]
pub mod elevenlabs;
