//! Word frequency ranking.
//!
//! Counts how often each distinct token occurs and orders the counts from
//! most to least frequent. Tokens with equal counts keep the order in which
//! they first appeared, so the ranking is fully deterministic.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::frequency::rank;
//!
//! let tokens = ["dog", "cat", "cat", "bird", "dog", "cat"];
//! let ranking = rank(tokens, 2).unwrap();
//!
//! assert_eq!(ranking, vec![("cat".to_string(), 3), ("dog".to_string(), 2)]);
//! ```

use ahash::AHashMap;

use crate::error::{PreprocessError, Result};

/// Count every distinct token, most frequent first.
pub fn rank_all<I, S>(tokens: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Slot index per distinct token; slots are in first-occurrence order.
    let mut slots: AHashMap<String, usize> = AHashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match slots.get(token) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(token.to_string(), counts.len());
                counts.push((token.to_string(), 1));
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `top_k` most frequent tokens with their counts.
///
/// Returns `min(top_k, distinct tokens)` pairs. A `top_k` of zero is
/// rejected rather than treated as "nothing".
pub fn rank<I, S>(tokens: I, top_k: usize) -> Result<Vec<(String, usize)>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if top_k == 0 {
        return Err(PreprocessError::configuration(
            "top_k must be greater than zero",
        ));
    }

    let mut ranking = rank_all(tokens);
    ranking.truncate(top_k);
    Ok(ranking)
}
