use std::sync::Arc;

use cefr_core::{Mean, ScoringConfig, WordScorer, round_to, score_sentence};
use cefr_lexicon::Lexicon;
use cefr_model::{AnalyzedSentence, AnalyzedWord, LexiconEntry, Upos};
use proptest::prelude::*;

fn level() -> impl Strategy<Value = f64> {
    prop_oneof![(1u8..=6).prop_map(f64::from), 0.0f64..7.0]
}

fn scorer(levels: &[f64], digits: u32) -> WordScorer {
    let entries = levels
        .iter()
        .enumerate()
        .map(|(i, cefr)| LexiconEntry::new(format!("ord{i}"), format!("ord{i}"), "noun-en", *cefr))
        .collect();
    WordScorer::new(
        Arc::new(Lexicon::from_entries(entries)),
        ScoringConfig::default().with_round_digits(digits),
    )
}

proptest! {
    #[test]
    fn rounding_is_idempotent(value in -10.0f64..10.0, digits in 0u32..8) {
        let once = round_to(value, digits);
        prop_assert_eq!(round_to(once, digits), once);
    }

    #[test]
    fn rounding_stays_within_half_a_step(value in 0.0f64..7.0, digits in 0u32..6) {
        let step = 10f64.powi(-(digits as i32));
        prop_assert!((round_to(value, digits) - value).abs() <= step / 2.0 + 1e-12);
    }

    #[test]
    fn mean_lies_between_extremes(scores in prop::collection::vec(prop::option::of(level()), 0..20)) {
        let mean: Mean = scores.iter().copied().collect();
        let present: Vec<f64> = scores.iter().flatten().copied().collect();
        prop_assert_eq!(mean.count(), present.len());
        match mean.value() {
            None => prop_assert!(present.is_empty()),
            Some(value) => {
                let min = present.iter().copied().fold(f64::INFINITY, f64::min);
                let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(value >= min - 1e-9 && value <= max + 1e-9);
            }
        }
    }

    #[test]
    fn skipped_words_never_change_a_sentence(
        levels in prop::collection::vec(level(), 1..10),
        digits in 0u32..4,
    ) {
        let scorer = scorer(&levels, digits);
        let words: Vec<AnalyzedWord> = (0..levels.len())
            .map(|i| AnalyzedWord::new(format!("ord{i}"), format!("ord{i}"), Upos::Noun))
            .collect();
        let plain = score_sentence(&scorer, &AnalyzedSentence::new(words.clone())).unwrap();

        let mut padded = words;
        padded.push(AnalyzedWord::new(".", ".", Upos::Punct));
        padded.insert(0, AnalyzedWord::new("Sverige", "Sverige", Upos::Propn));
        padded.insert(1, AnalyzedWord::new("3", "3", Upos::Num));
        let with_skipped = score_sentence(&scorer, &AnalyzedSentence::new(padded)).unwrap();

        prop_assert_eq!(plain, with_skipped);
        prop_assert!(plain.is_some());
    }
}
