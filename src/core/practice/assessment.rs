//! Assessment comparison.
//!
//! Pure transformation from vendor assessment data to presentation data:
//! given the target word's syllables, the recognized phrase's syllables,
//! and the vendor-supplied phoneme scores, produce per-syllable
//! correctness judgments and improvement tips. No side effects.

use serde::{Deserialize, Serialize};

use super::PhonemeScore;
use super::tips::{mismatch_tips, phoneme_tips, syllable_tips};

/// An assessed unit is correct iff its accuracy score reaches this value.
/// Exactly 80 is correct; 79.999 is not.
pub const CORRECTNESS_THRESHOLD: f64 = 80.0;

/// Judgment for one target syllable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllableAssessment {
    pub syllable: String,
    pub is_correct: bool,
    pub accuracy_score: f64,
    pub tips: Vec<String>,
}

/// Server-computed syllable comparison, the single source of truth for
/// mispronunciation display. `mispronounced` carries one entry per target
/// syllable, correct or not, mirroring the wire shape clients consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllableBreakdown {
    pub target: Vec<String>,
    pub recognized: Vec<String>,
    pub mispronounced: Vec<SyllableAssessment>,
}

/// A target syllable whose recognized counterpart is absent or different,
/// with generic improvement tips attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchReport {
    pub syllable: String,
    pub tips: Vec<String>,
}

/// Target syllables whose same-index recognized syllable is absent or
/// differs by exact string comparison. A recognized sequence shorter than
/// the target treats the missing positions as empty strings, so they
/// always mismatch.
pub fn syllable_mismatches(target: &[String], recognized: &[String]) -> Vec<String> {
    target
        .iter()
        .enumerate()
        .filter(|(i, syllable)| recognized.get(*i) != Some(syllable))
        .map(|(_, syllable)| syllable.clone())
        .collect()
}

/// Mismatched syllables with their generic improvement tips.
pub fn mismatch_reports(target: &[String], recognized: &[String]) -> Vec<MismatchReport> {
    syllable_mismatches(target, recognized)
        .into_iter()
        .map(|syllable| {
            let tips = mismatch_tips(&syllable);
            MismatchReport { syllable, tips }
        })
        .collect()
}

/// Build one assessment per target syllable.
///
/// The per-syllable accuracy is the mean of the assessed word's phoneme
/// scores (the vendor scopes phonemes to the word, not to individual
/// syllables). Syllables below [`CORRECTNESS_THRESHOLD`] collect
/// syllable-level tips plus the tips for every phoneme of the word.
pub fn assess_syllables(target: &[String], phonemes: &[PhonemeScore]) -> Vec<SyllableAssessment> {
    let accuracy = if phonemes.is_empty() {
        0.0
    } else {
        phonemes.iter().map(|p| p.accuracy_score).sum::<f64>() / phonemes.len() as f64
    };
    let is_correct = accuracy >= CORRECTNESS_THRESHOLD;

    target
        .iter()
        .map(|syllable| {
            let tips = if is_correct {
                Vec::new()
            } else {
                let mut tips = syllable_tips(syllable);
                for phoneme in phonemes {
                    tips.extend(phoneme_tips(&phoneme.phoneme));
                }
                tips
            };

            SyllableAssessment {
                syllable: syllable.clone(),
                is_correct,
                accuracy_score: accuracy,
                tips,
            }
        })
        .collect()
}

/// Assemble the full breakdown, padding the recognized side with empty
/// strings up to the target length so positional comparison is total.
pub fn syllable_breakdown(
    target: Vec<String>,
    mut recognized: Vec<String>,
    phonemes: &[PhonemeScore],
) -> SyllableBreakdown {
    if recognized.len() < target.len() {
        recognized.resize(target.len(), String::new());
    }
    let mispronounced = assess_syllables(&target, phonemes);
    SyllableBreakdown {
        target,
        recognized,
        mispronounced,
    }
}
