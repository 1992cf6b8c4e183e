//! Azure Speech pronunciation assessment.
//!
//! # Architecture
//!
//! Azure's short-audio speech-recognition REST endpoint accepts a complete
//! WAV payload and returns a detailed recognition result. Pronunciation
//! assessment is requested through the `Pronunciation-Assessment` header:
//! a base64-encoded JSON blob carrying the reference text, the grading
//! system, and the granularity. This implementation:
//!
//! 1. Posts the learner's recording with the assessment header
//! 2. Picks the top `NBest` hypothesis from the detailed response
//! 3. Flattens the word/phoneme tree into the crate's `PhonemeScore` list
//!
//! Language is fixed to `en-US`, grading to the 100-point scale, and
//! granularity to phoneme level.

mod client;
mod config;
mod messages;

pub use client::{AssessmentError, AzurePronunciationAssessor, PronunciationResult};
pub use config::AzureAssessmentConfig;
