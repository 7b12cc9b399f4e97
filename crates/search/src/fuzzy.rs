//! Approximate substring matching.
//!
//! A query matches a field when some substring of the field is within a few
//! edits of the query. Edits are single-character insertions, deletions,
//! substitutions and adjacent transpositions. The dissimilarity score is the
//! smallest such edit count divided by the query length, clamped to `[0, 1]`:
//!
//! - `0.0`: the query occurs verbatim (ignoring case) somewhere in the field
//! - `1.0`: nothing in the field resembles the query, or the field is empty

/// A lower-cased query, prepared once and scored against many fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    chars: Vec<char>,
}

impl Pattern {
    /// Prepare `query` for matching. Returns `None` for the empty query.
    pub fn new(query: &str) -> Option<Self> {
        let chars = fold(query);
        if chars.is_empty() { None } else { Some(Self { chars }) }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Dissimilarity of this pattern against already-folded field text.
    pub fn score_folded(&self, text: &[char]) -> f64 {
        let edits = substring_edit_distance(&self.chars, text);
        (edits as f64 / self.chars.len() as f64).min(1.0)
    }

    /// Dissimilarity of this pattern against raw field text.
    pub fn score(&self, text: &str) -> f64 {
        self.score_folded(&fold(text))
    }
}

/// Lower-case `text` into a char buffer suitable for [`Pattern::score_folded`].
pub fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Fewest edits turning `pattern` into any substring of `text`.
///
/// Dynamic programming over `text` with a free starting column, so the match
/// may begin anywhere; the answer is the minimum of the last row. Runs in
/// `O(|pattern| * |text|)` time and `O(|text|)` space.
pub fn substring_edit_distance(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    let n = text.len();
    if m == 0 {
        return 0;
    }
    if n == 0 {
        return m;
    }

    // Row 0: the empty pattern prefix matches before any text position for free.
    let mut before_prev = vec![0usize; n + 1];
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(pattern[i - 1] != text[j - 1]);
            let mut best = (prev[j - 1] + cost)
                .min(prev[j] + 1)
                .min(curr[j - 1] + 1);

            if i > 1
                && j > 1
                && pattern[i - 1] == text[j - 2]
                && pattern[i - 2] == text[j - 1]
            {
                best = best.min(before_prev[j - 2] + 1);
            }
            curr[j] = best;
        }

        core::mem::swap(&mut before_prev, &mut prev);
        core::mem::swap(&mut prev, &mut curr);
    }

    prev.into_iter().min().unwrap_or(m)
}
