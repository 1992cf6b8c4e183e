//! Feedback tiers derived from the overall pronunciation score.

use serde::{Deserialize, Serialize};

/// Coarse quality tier for an overall score on the 100-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    /// Score of at least 95.
    Excellent,
    /// Score of at least 80.
    Great,
    /// Score of at least 70.
    Good,
    /// Everything below 70.
    KeepPracticing,
}

impl FeedbackTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 95.0 {
            Self::Excellent
        } else if score >= 80.0 {
            Self::Great
        } else if score >= 70.0 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Outstanding pronunciation! Keep up the excellent work!",
            Self::Great => "Great job! You're getting really good at this!",
            Self::Good => "Good effort! Practice makes perfect!",
            Self::KeepPracticing => "Keep practicing! You'll improve with time!",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Great => "great",
            Self::Good => "good",
            Self::KeepPracticing => "keep_practicing",
        }
    }
}

/// Feedback payload attached to a scoring response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub tier: FeedbackTier,
    pub message: String,
}

impl Feedback {
    pub fn for_score(score: f64) -> Self {
        let tier = FeedbackTier::for_score(score);
        Self {
            tier,
            message: tier.message().to_string(),
        }
    }
}
