//! Separator-preserving tokenization of definition phrases.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR_RE: Regex = Regex::new(r"[ -]+").unwrap();
}

/// Split a phrase into word tokens and separator tokens.
///
/// Separator runs (spaces and hyphens) are kept as tokens of their own, so
/// concatenating the returned slices reproduces `phrase` byte for byte.
/// That is what lets the reconstructor rejoin a token sub-slice and get the
/// original spacing and hyphenation back. Empty tokens are dropped.
pub fn tokenize(phrase: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for sep in SEPARATOR_RE.find_iter(phrase) {
        if sep.start() > last {
            tokens.push(&phrase[last..sep.start()]);
        }
        tokens.push(sep.as_str());
        last = sep.end();
    }
    if last < phrase.len() {
        tokens.push(&phrase[last..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_separators_are_tokens() {
        assert_eq!(
            tokenize("accelerated failure time"),
            vec!["accelerated", " ", "failure", " ", "time"]
        );
    }

    #[test]
    fn test_hyphen_runs_kept() {
        assert_eq!(tokenize("Time-Constant"), vec!["Time", "-", "Constant"]);
        assert_eq!(tokenize("$\\alpha$-synclein protein"), vec!["$\\alpha$", "-", "synclein", " ", "protein"]);
    }

    #[test]
    fn test_concatenation_reproduces_phrase() {
        let phrases = ["a - b  c", "-leading", "trailing-", "one"];
        for phrase in phrases {
            assert_eq!(tokenize(phrase).concat(), phrase);
        }
    }

    #[test]
    fn test_empty_phrase() {
        assert!(tokenize("").is_empty());
    }
}
