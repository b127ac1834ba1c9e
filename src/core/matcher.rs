//! Greedy backward alignment of abbreviation units against phrase tokens.

use crate::core::units::{abbr_units, word_unit, AbbrSegment};

/// Result of aligning one abbreviation against its preceding tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Parsed abbreviation segments, in order.
    pub segments: Vec<AbbrSegment>,
    /// `indices[i]` is the token index matched by abbreviation unit `i`,
    /// or `None` when that unit found no token. Matched indices strictly
    /// increase in abbreviation order.
    pub indices: Vec<Option<usize>>,
    /// Fraction of abbreviation units that matched a token.
    pub match_ratio: f64,
    /// Fraction of unit-bearing tokens, from the first matched token to
    /// the end of the token list, that were consumed by a match. Penalizes
    /// alignments that skip over many real words.
    pub words_matched_ratio: f64,
}

impl MatchOutcome {
    fn empty() -> Self {
        MatchOutcome {
            segments: Vec::new(),
            indices: Vec::new(),
            match_ratio: 0.0,
            words_matched_ratio: 0.0,
        }
    }

    /// Token indices that matched, in abbreviation order.
    pub fn matched_indices(&self) -> Vec<usize> {
        self.indices.iter().flatten().copied().collect()
    }
}

/// Align the abbreviation's comparable units against the phrase tokens.
///
/// Walks the abbreviation units from last to first. For each unit, tokens
/// are scanned backward from the current right boundary; the first token
/// whose unit starts with the abbreviation unit wins, and the boundary
/// moves to just before it so earlier units can only match further left.
/// An unmatched unit keeps the boundary where it is.
///
/// Greedy, not globally optimal: when several tokens could satisfy a
/// unit, the rightmost one always wins.
pub fn match_abbreviation(tokens: &[&str], abbr: &str) -> MatchOutcome {
    let segments = abbr_units(abbr);
    if segments.is_empty() {
        return MatchOutcome::empty();
    }

    let units: Vec<String> = tokens.iter().map(|t| word_unit(t)).collect();
    let mut indices: Vec<Option<usize>> = vec![None; segments.len()];
    let mut right = tokens.len();

    for (abbr_idx, segment) in segments.iter().enumerate().rev() {
        if segment.unit.is_empty() {
            continue;
        }
        for word_idx in (0..right).rev() {
            let unit = &units[word_idx];
            if unit.is_empty() {
                continue;
            }
            if unit.starts_with(&segment.unit) {
                indices[abbr_idx] = Some(word_idx);
                right = word_idx;
                break;
            }
        }
    }

    let matched: Vec<usize> = indices.iter().flatten().copied().collect();
    let match_ratio = matched.len() as f64 / segments.len() as f64;

    let mut words_matched_ratio = 0.0;
    if let Some(&start) = matched.iter().min() {
        let matchable = units[start..].iter().filter(|u| !u.is_empty()).count();
        if matchable > 0 {
            words_matched_ratio = (matched.len() as f64 / matchable as f64).min(1.0);
        }
    }

    MatchOutcome {
        segments,
        indices,
        match_ratio,
        words_matched_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_match_tail_aligned() {
        let tokens = tokenize("accelerated failure time");
        let outcome = match_abbreviation(&tokens, "AFT");
        assert_eq!(outcome.indices, vec![Some(0), Some(2), Some(4)]);
        assert_eq!(outcome.match_ratio, 1.0);
    }

    #[test]
    fn test_filler_words_skipped() {
        let tokens = tokenize("and accelerated failure time");
        let outcome = match_abbreviation(&tokens, "AFT");
        assert_eq!(outcome.indices, vec![Some(2), Some(4), Some(6)]);
        assert_eq!(outcome.match_ratio, 1.0);
    }

    #[test]
    fn test_command_units_match_by_prefix() {
        let tokens = tokenize("$\\alpha$-synclein protein");
        let outcome = match_abbreviation(&tokens, r"$\alpha$-SP");
        assert_eq!(outcome.indices, vec![Some(0), Some(2), Some(4)]);
        assert_eq!(outcome.match_ratio, 1.0);
    }

    #[test]
    fn test_letter_unit_matches_command_word_by_prefix() {
        // `alpha`.starts_with("a"): a lone letter can consume a Greek word.
        let tokens = tokenize("$\\alpha$ Predictive p-value");
        let outcome = match_abbreviation(&tokens, "aPP");
        assert_eq!(outcome.match_ratio, 1.0);
        assert_eq!(outcome.indices[0], Some(0));
    }

    #[test]
    fn test_each_token_claimed_once() {
        // Both units want "time"; the earlier unit must move left and miss.
        let tokens = tokenize("time");
        let outcome = match_abbreviation(&tokens, "TT");
        assert_eq!(outcome.indices, vec![None, Some(0)]);
        assert_eq!(outcome.match_ratio, 0.5);
    }

    #[test]
    fn test_citation_has_low_ratio() {
        let tokens = tokenize("this one");
        let outcome = match_abbreviation(&tokens, "Li et al. 2025");
        assert_eq!(outcome.match_ratio, 0.0);
    }

    #[test]
    fn test_matched_indices_strictly_increase() {
        let tokens = tokenize("randomized survival probabilities of the model");
        let outcome = match_abbreviation(&tokens, "RSP");
        let matched = outcome.matched_indices();
        assert!(matched.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_abbreviation_yields_empty_outcome() {
        let tokens = tokenize("some words");
        let outcome = match_abbreviation(&tokens, "--");
        assert!(outcome.indices.is_empty());
        assert_eq!(outcome.match_ratio, 0.0);
    }

    #[test]
    fn test_words_matched_ratio_penalizes_gaps() {
        let tokens = tokenize("red herring words accelerated failure time");
        let outcome = match_abbreviation(&tokens, "AFT");
        assert_eq!(outcome.match_ratio, 1.0);
        assert_eq!(outcome.words_matched_ratio, 1.0);

        let tokens = tokenize("alpha beta gamma time");
        let outcome = match_abbreviation(&tokens, "AT");
        // "a" claims gamma? No: backward scan, "t" -> time, then "a" ->
        // gamma ("gamma" does not start with "a"), beta no, alpha yes.
        assert_eq!(outcome.indices, vec![Some(0), Some(6)]);
        // span alpha..time holds four real words, two matched
        assert_eq!(outcome.words_matched_ratio, 0.5);
    }
}
