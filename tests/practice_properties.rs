//! Property-style tests for the pure practice units: the syllable
//! splitters, the assessment comparator, and the feedback tiers.

use parrot_gateway::core::practice::{
    Feedback, FeedbackTier, PhonemeScore, SyllableSplitter, assess_syllables, syllable_breakdown,
    syllable_mismatches,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const WORD_CORPUS: &[&str] = &[
    "a",
    "see",
    "boot",
    "banana",
    "comfortable",
    "enthusiasm",
    "particular",
    "necessary",
    "significant",
    "opportunity",
    "technology",
    "vocabulary",
    "restaurant",
    "interesting",
    "rhythm",
    "strengths",
    "queueing",
    "yellow",
    "aorta",
    "Mixed",
    "UPPER",
];

#[test]
fn splits_concatenate_to_the_lowercased_word() {
    for word in WORD_CORPUS {
        for splitter in [SyllableSplitter::Simple, SyllableSplitter::DiphthongAware] {
            let syllables = splitter.split(word);
            assert!(!syllables.is_empty(), "empty split for {word}");
            assert!(syllables.iter().all(|s| !s.is_empty()));
            assert_eq!(syllables.concat(), word.to_lowercase());
        }
    }
}

#[test]
fn vowel_free_words_are_a_single_syllable() {
    for word in ["tsk", "pfft", "hmm", "brr"] {
        for splitter in [SyllableSplitter::Simple, SyllableSplitter::DiphthongAware] {
            assert_eq!(splitter.split(word), vec![word.to_string()]);
        }
    }
}

#[test]
fn diphthong_aware_preserves_double_e() {
    assert_eq!(
        SyllableSplitter::DiphthongAware.split("see"),
        vec!["s", "ee"]
    );
    // The simple variant has no diphthong table.
    assert_eq!(SyllableSplitter::Simple.split("see"), vec!["s", "e", "e"]);
}

#[test]
fn missing_positions_always_mismatch() {
    let target = strings(&["com", "fort", "a", "ble"]);
    let recognized = strings(&["com", "fort"]);

    let mismatches = syllable_mismatches(&target, &recognized);
    assert_eq!(mismatches, strings(&["a", "ble"]));
}

#[test]
fn correctness_threshold_is_inclusive_at_80() {
    let target = strings(&["see"]);

    let exactly_80 = [PhonemeScore {
        phoneme: "s".to_string(),
        accuracy_score: 80.0,
    }];
    assert!(assess_syllables(&target, &exactly_80)[0].is_correct);

    let just_below = [PhonemeScore {
        phoneme: "s".to_string(),
        accuracy_score: 79.999,
    }];
    assert!(!assess_syllables(&target, &just_below)[0].is_correct);
}

#[test]
fn banana_recognized_as_banana_is_excellent() {
    let splitter = SyllableSplitter::DiphthongAware;
    let target = splitter.split("banana");
    let recognized = splitter.split("banana");

    assert!(syllable_mismatches(&target, &recognized).is_empty());

    let phonemes = [
        PhonemeScore {
            phoneme: "b".to_string(),
            accuracy_score: 100.0,
        },
        PhonemeScore {
            phoneme: "ə".to_string(),
            accuracy_score: 95.0,
        },
        PhonemeScore {
            phoneme: "n".to_string(),
            accuracy_score: 98.0,
        },
    ];
    let breakdown = syllable_breakdown(target, recognized, &phonemes);
    assert!(breakdown.mispronounced.iter().all(|a| a.is_correct));

    let feedback = Feedback::for_score(96.0);
    assert_eq!(feedback.tier, FeedbackTier::Excellent);
    assert_eq!(feedback.tier.as_str(), "excellent");
}

#[test]
fn breakdown_recognized_side_is_padded_to_target_length() {
    let breakdown = syllable_breakdown(strings(&["a", "b", "c"]), strings(&["a"]), &[]);
    assert_eq!(breakdown.recognized, strings(&["a", "", ""]));
}
