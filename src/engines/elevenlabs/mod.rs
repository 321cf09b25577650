//! ElevenLabs text-to-speech engine implementation.
//!
//! This module submits text to the ElevenLabs REST API and returns the
//! encoded audio it answers with. Requests are blocking and issued one at a
//! time.
//!
//! # Requirements
//!
//! An ElevenLabs API key, passed to [`ElevenLabsEngine::new`] (the
//! `bingo-tts` binary reads it from `ELEVENLABS_API_KEY`).
//!
//! # Request Shape
//!
//! ```text
//! POST /v1/text-to-speech/{voice_id}?output_format=mp3_44100_128
//! xi-api-key: ...
//! {
//!   "text": "[excited] ¡cincuenta y cuatro! ... cinco-cuatro",
//!   "model_id": "eleven_v3",
//!   "voice_settings": { "stability": 0.0, "similarity_boost": 0.85, "style": 0.75, "use_speaker_boost": true },
//!   "language_code": "es"
//! }
//! ```
//!
//! Any status other than 200 becomes [`ElevenLabsError::Api`] carrying the
//! status and the first 500 characters of the body.
//!
//! # Models
//!
//! | Model | Notes |
//! |---|---|
//! | `eleven_v3` | Highest quality; stability must be 0.0, 0.5 or 1.0 |
//! | `eleven_turbo_v2` | Faster generation |
//! | `eleven_multilingual_v2` | Best for non-English languages |

pub mod client;
pub mod engine;
pub mod settings;

pub use client::{ElevenLabsClient, ElevenLabsError};
pub use engine::{ElevenLabsEngine, ElevenLabsParams};
pub use settings::{ElevenLabsModel, VoiceSettings};
