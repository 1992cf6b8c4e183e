//! Text-to-speech providers for reference audio.

pub mod elevenlabs;

pub use elevenlabs::{ELEVENLABS_TTS_URL, ElevenLabsTts, ElevenLabsTtsConfig, TtsError};
