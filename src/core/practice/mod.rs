//! Practice-domain logic: syllable splitting, assessment comparison,
//! improvement tips, and feedback tiers.
//!
//! Everything in this module is pure and deterministic. Vendor clients
//! produce raw scores (see `core::stt`); this module turns them into the
//! per-syllable judgments the API returns.

mod assessment;
mod feedback;
mod syllable;
mod tips;

pub use assessment::{
    CORRECTNESS_THRESHOLD, MismatchReport, SyllableAssessment, SyllableBreakdown, assess_syllables,
    mismatch_reports, syllable_breakdown, syllable_mismatches,
};
pub use feedback::{Feedback, FeedbackTier};
pub use syllable::SyllableSplitter;
pub use tips::{mismatch_tips, phoneme_tips, syllable_tips};

use serde::{Deserialize, Serialize};

/// A single phoneme accuracy score as returned by the assessment service.
///
/// The phoneme symbol is an IPA symbol; the accuracy value is on the
/// vendor's 100-point grading scale. These are never computed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonemeScore {
    pub phoneme: String,
    pub accuracy_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phoneme_score_wire_shape() {
        let score = PhonemeScore {
            phoneme: "æ".to_string(),
            accuracy_score: 92.5,
        };

        let json = serde_json::to_string(&score).unwrap();
        assert!(json.contains("\"phoneme\":\"æ\""));
        assert!(json.contains("\"accuracyScore\":92.5"));
    }
}
