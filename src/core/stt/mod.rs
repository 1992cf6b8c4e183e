//! Speech-to-text providers with pronunciation assessment.

pub mod azure;

pub use azure::{
    AssessmentError, AzureAssessmentConfig, AzurePronunciationAssessor, PronunciationResult,
};
