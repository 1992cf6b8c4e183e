//! Practice-word generation via the DeepSeek chat-completions API.
//!
//! The generator asks a chat model for a single challenging English word,
//! passing the session's recently used words so the model avoids
//! repeating itself. The response is a plain word, nothing else.

mod client;
mod config;
mod messages;

pub use client::{WordGenError, WordGenerator};
pub use config::{DEEPSEEK_API_URL, DEFAULT_WORDGEN_MODEL, WordGenConfig};
