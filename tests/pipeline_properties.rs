//! Property tests for normalization, filtering and ranking invariants.

use proptest::prelude::*;

use textprep::analysis::frequency::{rank, rank_all};
use textprep::analysis::normalizer::normalize;
use textprep::analysis::token::{AnnotatedToken, pos};
use textprep::analysis::token_filter::filter_tokens;
use textprep::config::PreprocessConfig;

fn config_strategy() -> impl Strategy<Value = PreprocessConfig> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(prop::collection::vec(
            prop::sample::select(vec![pos::NOUN, pos::VERB, pos::ADJ, pos::PUNCT, pos::X]),
            0..3,
        )),
        0usize..6,
    )
        .prop_map(
            |(lowercase, remove_punct, remove_numbers, remove_stopwords, lemmatize, keep_pos, min)| {
                let config = PreprocessConfig {
                    lowercase,
                    remove_punct,
                    remove_numbers,
                    remove_stopwords,
                    lemmatize,
                    keep_pos: None,
                    min_token_len: min,
                };
                match keep_pos {
                    Some(tags) => config.with_keep_pos(tags),
                    None => config,
                }
            },
        )
}

fn token_strategy() -> impl Strategy<Value = AnnotatedToken> {
    (
        "[a-zA-Zé ]{0,8}",
        "[a-zé ]{0,8}",
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::sample::select(vec![pos::NOUN, pos::VERB, pos::ADJ, pos::PUNCT, pos::X]),
    )
        .prop_map(|(text, lemma, is_punct, is_stop, is_space, tag)| {
            AnnotatedToken::new(text, lemma, tag)
                .with_punct(is_punct)
                .with_stop(is_stop)
                .with_space(is_space)
        })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(
        text in "[a-zA-Z0-9éÉ \t\n.,!?]{0,64}",
        config in config_strategy(),
    ) {
        let once = normalize(&text, &config);
        prop_assert_eq!(normalize(&once, &config), once);
    }

    #[test]
    fn normalized_text_has_no_whitespace_runs(
        text in "[a-zA-Z0-9 \t\n]{0,64}",
        config in config_strategy(),
    ) {
        let normalized = normalize(&text, &config);
        prop_assert!(!normalized.contains("  "));
        prop_assert!(!normalized.contains('\n') && !normalized.contains('\t'));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn filtered_tokens_respect_min_length(
        tokens in prop::collection::vec(token_strategy(), 0..24),
        config in config_strategy(),
    ) {
        let min = config.min_token_len;
        let filtered = filter_tokens(tokens, &config).unwrap();
        prop_assert!(filtered.iter().all(|t| t.chars().count() >= min && !t.is_empty()));
    }

    #[test]
    fn punctuation_never_survives_when_removed(
        tokens in prop::collection::vec(token_strategy(), 0..24),
        config in config_strategy(),
    ) {
        let config = config.with_remove_punct(true);
        // Mark punctuation tokens with a sentinel that cannot come from the
        // text strategy, then check no sentinel is emitted.
        let tokens: Vec<AnnotatedToken> = tokens
            .into_iter()
            .map(|t| {
                if t.is_punct {
                    AnnotatedToken {
                        lemma: "§punct§".to_string(),
                        ..t.with_text("§punct§")
                    }
                } else {
                    t
                }
            })
            .collect();
        let filtered = filter_tokens(tokens, &config).unwrap();
        prop_assert!(!filtered.iter().any(|t| t == "§punct§"));
    }

    #[test]
    fn ranking_counts_sum_to_token_count(tokens in prop::collection::vec("[a-d]", 0..40)) {
        let total: usize = rank_all(&tokens).iter().map(|(_, c)| c).sum();
        prop_assert_eq!(total, tokens.len());
    }

    #[test]
    fn ranking_is_ordered_and_stable(tokens in prop::collection::vec("[a-f]", 0..40)) {
        let ranking = rank_all(&tokens);
        let first_seen = |word: &str| tokens.iter().position(|t| t == word).unwrap();

        for pair in ranking.windows(2) {
            let (ref a, ca) = pair[0];
            let (ref b, cb) = pair[1];
            prop_assert!(ca >= cb);
            if ca == cb {
                prop_assert!(first_seen(a.as_str()) < first_seen(b.as_str()));
            }
        }
    }

    #[test]
    fn truncation_returns_min_of_k_and_distinct(
        tokens in prop::collection::vec("[a-h]", 0..40),
        k in 1usize..12,
    ) {
        let distinct = rank_all(&tokens).len();
        prop_assert_eq!(rank(&tokens, k).unwrap().len(), k.min(distinct));
    }
}
