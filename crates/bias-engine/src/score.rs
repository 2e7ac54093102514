//! Diversity score: severity-weighted penalty per 100 characters

use shared_types::Occurrence;

pub const MAX_SCORE: u8 = 100;

/// Score a text from its raw occurrences.
///
/// `text_len` is measured in codepoints. Empty text scores 100.
pub fn score(occurrences: &[Occurrence], text_len: usize) -> u8 {
    if text_len == 0 {
        return MAX_SCORE;
    }

    let total_penalty: u64 = occurrences
        .iter()
        .map(|occurrence| u64::from(occurrence.severity.weight()))
        .sum();

    let density = total_penalty as f64 / (text_len as f64 / 100.0);
    let score = (100.0 - density * 2.0).clamp(0.0, 100.0);

    score.round() as u8
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::{Category, Severity, TextPosition};

    fn severity_strategy() -> impl Strategy<Value = Severity> {
        prop_oneof![Just(Severity::High), Just(Severity::Medium), Just(Severity::Low)]
    }

    fn occurrences(severities: &[Severity]) -> Vec<Occurrence> {
        severities
            .iter()
            .map(|severity| Occurrence {
                term: "x".to_string(),
                category: Category::Age,
                severity: *severity,
                suggestion: "y".to_string(),
                position: TextPosition::new(0, 1),
            })
            .collect()
    }

    proptest! {
        /// Property: score stays within 0..=100
        #[test]
        fn score_is_bounded(
            severities in prop::collection::vec(severity_strategy(), 0..50),
            len in 0usize..5000
        ) {
            prop_assert!(score(&occurrences(&severities), len) <= MAX_SCORE);
        }

        /// Property: adding an occurrence never raises the score
        #[test]
        fn adding_occurrence_never_raises_score(
            severities in prop::collection::vec(severity_strategy(), 0..50),
            extra in severity_strategy(),
            len in 1usize..5000
        ) {
            let before = score(&occurrences(&severities), len);
            let mut more = severities.clone();
            more.push(extra);
            prop_assert!(score(&occurrences(&more), len) <= before);
        }
    }
}
