//! ElevenLabs TTS provider.
//!
//! Synthesizes the reference audio the learner listens to before
//! recording. One request per word; the result is a complete MP3 payload,
//! not a stream.

mod config;
mod provider;

pub use config::{DEFAULT_VOICE_ID, ELEVENLABS_TTS_URL, ElevenLabsTtsConfig};
pub use provider::{ElevenLabsTts, TtsError};
