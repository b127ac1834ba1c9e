//! Candidate scanning and usage counting.
//!
//! The scanner is permissive: anything shaped like `words (ABBR)` on one
//! line becomes a candidate, and bare citations or symbol asides are left
//! for the validator to reject on match ratio.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

/// A raw `(phrase, abbreviation)` pair found by the scanner, prior to any
/// validation. Borrows from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// The word run preceding the parenthesis, trimmed.
    pub phrase: &'a str,
    /// The parenthesized content, trimmed.
    pub abbr: &'a str,
    /// Byte span of the whole candidate in the scanned text.
    pub span: Range<usize>,
}

lazy_static! {
    /// One to ten word-like tokens (word characters, `\`, `$`, braces)
    /// separated by space/hyphen runs, an optional trailing separator, then
    /// a parenthesized group. Separators exclude `\n`, so the phrase never
    /// crosses a line.
    static ref CANDIDATE_RE: Regex = Regex::new(
        r"((?:[\w\\$\{\}]+[ -]+){0,9}[\w\\$\{\}]+[ -]?)\(([^()]+)\)"
    )
    .unwrap();
    /// At least two consecutive alphanumerics of real content.
    static ref ALNUM_PAIR_RE: Regex = Regex::new(r"[a-zA-Z0-9]{2,}").unwrap();
}

/// Scan text for `phrase (ABBR)` candidates.
///
/// The parenthesized content must carry at least two consecutive
/// alphanumeric characters and at least one uppercase letter, backslash,
/// or `$`. (The `regex` crate has no lookaround, so these run as code
/// checks on the capture rather than inside the pattern.)
pub fn scan(text: &str) -> Vec<Candidate<'_>> {
    let mut candidates = Vec::new();
    for caps in CANDIDATE_RE.captures_iter(text) {
        let abbr = match caps.get(2) {
            Some(m) => m.as_str().trim(),
            None => continue,
        };
        if !ALNUM_PAIR_RE.is_match(abbr) {
            continue;
        }
        if !abbr
            .chars()
            .any(|c| c.is_ascii_uppercase() || c == '\\' || c == '$')
        {
            continue;
        }
        let phrase = match caps.get(1) {
            Some(m) => m.as_str().trim(),
            None => continue,
        };
        if phrase.is_empty() {
            continue;
        }
        let span = caps.get(0).map_or(0..0, |m| m.range());
        candidates.push(Candidate { phrase, abbr, span });
    }
    candidates
}

/// Count standalone occurrences of an abbreviation elsewhere in the text.
///
/// An occurrence counts only when it is not glued to a letter on either
/// side and not wrapped in parentheses, so `AFTER` contributes nothing to
/// `AFT` and the defining `(AFT)` is excluded. The pattern is built
/// dynamically from the abbreviation; a pattern the engine refuses is
/// reported as an error and the caller degrades the count to zero.
pub fn count_usage(text: &str, abbr: &str) -> Result<usize, regex::Error> {
    let needle: String = abbr.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    if needle.is_empty() {
        return Ok(0);
    }
    let literal = Regex::new(&regex::escape(&needle))?;

    let mut count = 0;
    for m in literal.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        let blocked_before =
            matches!(before, Some(c) if c.is_ascii_alphabetic() || c == '(' || c == ')');
        let blocked_after = matches!(after, Some(c) if c.is_ascii_alphabetic() || c == ')');
        if !blocked_before && !blocked_after {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_candidate() {
        let candidates = scan("accelerated failure time (AFT) models");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].phrase, "accelerated failure time");
        assert_eq!(candidates[0].abbr, "AFT");
        assert_eq!(candidates[0].span, 0..30);
    }

    #[test]
    fn test_no_space_before_paren() {
        let candidates = scan("accelerated failure time(AFT)");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].abbr, "AFT");
    }

    #[test]
    fn test_lowercase_only_content_rejected() {
        assert!(scan("this is not an abbreviation (acronym) either").is_empty());
    }

    #[test]
    fn test_single_character_content_rejected() {
        assert!(scan("the statistic ($T$) here").is_empty());
    }

    #[test]
    fn test_citation_is_still_a_candidate() {
        // Citations pass the scanner; the validator kills them on ratio.
        let candidates = scan("as shown in this one (Li et al. 2025)");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].abbr, "Li et al. 2025");
    }

    #[test]
    fn test_phrase_does_not_cross_lines() {
        let candidates = scan("first line words\nsecond (SL) here");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].phrase, "second");
    }

    #[test]
    fn test_command_content_accepted() {
        let candidates = scan(r"$\frac{\gamma}{Z}$-residuals ($\frac{\gamma}{Z}$-R)");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].abbr, r"$\frac{\gamma}{Z}$-R");
    }

    #[test]
    fn test_usage_count_excludes_definition_and_substrings() {
        let text = "accelerated failure time (AFT) models. AFT is common. AFT again. RAFTER.";
        assert_eq!(count_usage(text, "AFT").unwrap(), 2);
    }

    #[test]
    fn test_usage_count_zero_when_absent() {
        assert_eq!(count_usage("nothing here", "AFT").unwrap(), 0);
    }

    #[test]
    fn test_usage_count_empty_needle() {
        assert_eq!(count_usage("()()", "()").unwrap(), 0);
    }
}
