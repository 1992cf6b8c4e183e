//! Azure detailed-recognition response payloads.
//!
//! Field names follow the service's PascalCase convention. Only the parts
//! the practice flow consumes are modeled; the service sends more.

use serde::Deserialize;

/// Top-level detailed recognition response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecognitionResponse {
    pub recognition_status: String,
    #[serde(default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub n_best: Option<Vec<NBestEntry>>,
}

/// One recognition hypothesis. The first entry is the best one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NBestEntry {
    pub lexical: String,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub pronunciation_assessment: Option<PronunciationAssessmentScores>,
    #[serde(default)]
    pub words: Option<Vec<WordEntry>>,
}

/// Utterance-level assessment scores, 100-point scale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PronunciationAssessmentScores {
    #[serde(default)]
    pub accuracy_score: f64,
    #[serde(default)]
    pub completeness_score: f64,
    #[serde(default)]
    pub fluency_score: f64,
    #[serde(default)]
    pub pron_score: f64,
}

/// Per-word assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub pronunciation_assessment: Option<WordAssessmentScores>,
    #[serde(default)]
    pub phonemes: Option<Vec<PhonemeEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WordAssessmentScores {
    #[serde(default)]
    pub accuracy_score: f64,
    #[serde(default)]
    pub error_type: Option<String>,
}

/// Per-phoneme assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhonemeEntry {
    pub phoneme: String,
    #[serde(default)]
    pub pronunciation_assessment: Option<PhonemeAssessmentScores>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhonemeAssessmentScores {
    #[serde(default)]
    pub accuracy_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_response_parsing() {
        let body = r#"{
            "RecognitionStatus": "Success",
            "Offset": 400000,
            "Duration": 11000000,
            "DisplayText": "Banana.",
            "NBest": [
                {
                    "Confidence": 0.96,
                    "Lexical": "banana",
                    "ITN": "banana",
                    "MaskedITN": "banana",
                    "Display": "Banana.",
                    "PronunciationAssessment": {
                        "AccuracyScore": 98.0,
                        "FluencyScore": 100.0,
                        "CompletenessScore": 100.0,
                        "PronScore": 98.8
                    },
                    "Words": [
                        {
                            "Word": "banana",
                            "Offset": 400000,
                            "Duration": 11000000,
                            "PronunciationAssessment": {
                                "AccuracyScore": 98.0,
                                "ErrorType": "None"
                            },
                            "Phonemes": [
                                {
                                    "Phoneme": "b",
                                    "PronunciationAssessment": { "AccuracyScore": 100.0 }
                                },
                                {
                                    "Phoneme": "ə",
                                    "PronunciationAssessment": { "AccuracyScore": 95.0 }
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let response: RecognitionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.recognition_status, "Success");
        assert_eq!(response.display_text.as_deref(), Some("Banana."));

        let best = &response.n_best.unwrap()[0];
        assert_eq!(best.lexical, "banana");

        let scores = best.pronunciation_assessment.as_ref().unwrap();
        assert!((scores.pron_score - 98.8).abs() < f64::EPSILON);
        assert!((scores.fluency_score - 100.0).abs() < f64::EPSILON);

        let phonemes = best.words.as_ref().unwrap()[0].phonemes.as_ref().unwrap();
        assert_eq!(phonemes[0].phoneme, "b");
        assert!(
            (phonemes[1]
                .pronunciation_assessment
                .as_ref()
                .unwrap()
                .accuracy_score
                - 95.0)
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_no_match_response_parsing() {
        let body = r#"{ "RecognitionStatus": "NoMatch", "Offset": 0, "Duration": 0 }"#;

        let response: RecognitionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.recognition_status, "NoMatch");
        assert!(response.n_best.is_none());
    }
}
