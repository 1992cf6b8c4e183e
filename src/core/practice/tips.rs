//! Canned improvement tips.
//!
//! Phoneme tips are keyed by the IPA symbols the assessment service
//! returns. Symbols without a dedicated entry fall back to a generic
//! three-line template so every phoneme always yields advice.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static PHONEME_TIPS: Lazy<HashMap<&'static str, [&'static str; 3]>> = Lazy::new(|| {
    HashMap::from([
        (
            "æ",
            [
                "Open your mouth wider, like saying \"cat\"",
                "Place your tongue low and flat in your mouth",
                "Keep your lips spread slightly",
            ],
        ),
        (
            "ʌ",
            [
                "Make a short \"uh\" sound like in \"cup\"",
                "Keep your mouth relaxed and slightly open",
                "Position your tongue in the middle of your mouth",
            ],
        ),
        (
            "ə",
            [
                "Make a neutral \"uh\" sound like in \"about\"",
                "Keep your mouth and tongue relaxed",
                "This is a very short, unstressed sound",
            ],
        ),
        (
            "ɪ",
            [
                "Make a short \"i\" sound like in \"bit\"",
                "Keep your tongue high but relaxed",
                "Don't stretch your lips too much",
            ],
        ),
        (
            "i:",
            [
                "Make a long \"ee\" sound like in \"see\"",
                "Keep your tongue high and tense",
                "Spread your lips slightly",
            ],
        ),
    ])
});

/// Tips for a single phoneme, with a generic fallback for symbols that
/// have no dedicated entry.
pub fn phoneme_tips(phoneme: &str) -> Vec<String> {
    match PHONEME_TIPS.get(phoneme) {
        Some(tips) => tips.iter().map(|t| t.to_string()).collect(),
        None => vec![
            format!("Focus on making the \"{phoneme}\" sound clearly"),
            "Listen to the reference audio and try to match the sound".to_string(),
            "Practice the sound in isolation before combining it with others".to_string(),
        ],
    }
}

/// Tips attached to a syllable that scored below the correctness
/// threshold.
pub fn syllable_tips(syllable: &str) -> Vec<String> {
    vec![
        format!("Focus on the \"{syllable}\" sound - try breaking it down into individual sounds"),
        format!("Listen carefully to how the reference audio pronounces \"{syllable}\""),
        format!("Practice saying \"{syllable}\" slowly, then gradually increase your speed"),
    ]
}

/// Generic tips attached to a mismatched syllable, independent of any
/// phoneme scores.
pub fn mismatch_tips(syllable: &str) -> Vec<String> {
    vec![
        format!("Listen carefully to how the reference audio pronounces \"{syllable}\""),
        "Try breaking down the sound into smaller parts".to_string(),
        "Practice saying it slowly, then speed up gradually".to_string(),
    ]
}
