//! Comparable units: the reduced alphabet over which matching happens.
//!
//! Both sides of a candidate are lowered into comparable units before the
//! backward matcher runs. An abbreviation yields one unit per segment
//! (`$\alpha$-SP` -> `alpha`, `s`, `p`); a phrase token yields a single
//! unit, or the empty string when it cannot participate in matching
//! (separators, brace tokens, symbol-only tokens).

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::is_known_command;

/// One parsed unit of an abbreviation string: the comparable unit plus the
/// original substring it came from. The original is kept for diagnostics
/// and export, not for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbrSegment {
    pub unit: String,
    pub original: String,
}

lazy_static! {
    /// Abbreviation segment grammar, in preference order: a command, a
    /// letter-digit run, an uppercase letter with absorbed lowercase tail,
    /// a lowercase run (first letter significant), a digit run.
    static ref ABBR_SEGMENT_RE: Regex =
        Regex::new(r"(\\[a-zA-Z]+)|([A-Z][0-9]+)|([A-Z])(?:[a-z]+)?|([a-z])[a-z]*|([0-9]+)")
            .unwrap();
    /// A leading command, optionally behind an opening `$`.
    static ref LEADING_COMMAND_RE: Regex = Regex::new(r"^\$?\\([a-zA-Z]+)").unwrap();
    /// Leading markup to see past: one command with an optional brace.
    static ref LEADING_MARKUP_RE: Regex = Regex::new(r"^\s*\\[a-zA-Z]+\s*\{?").unwrap();
    /// The core of a word: alphanumeric runs, possibly dot- or hyphen-joined.
    static ref CORE_WORD_RE: Regex = Regex::new(r"[a-zA-Z0-9]+(?:[.-]?[a-zA-Z0-9]+)*").unwrap();
    /// Fallback: any alphanumeric run.
    static ref ALNUM_RUN_RE: Regex = Regex::new(r"[a-zA-Z0-9]+").unwrap();
}

/// Parse an abbreviation string into its comparable segments.
///
/// - a recognized command contributes its lowercased name (`\alpha` ->
///   `alpha`); any other command contributes the first letter of its name
///   (`\textbf` -> `t`);
/// - `N1`-style letter-digit runs stay whole (`n1`), since the digit is
///   what distinguishes them;
/// - an uppercase letter contributes itself lowercased, absorbing a
///   trailing lowercase tail (`CPs` -> `c`, `p`: the plural `s` vanishes
///   into the `P` segment);
/// - a standalone lowercase run contributes its first letter;
/// - a digit run stays whole (`2025`).
pub fn abbr_units(abbr: &str) -> Vec<AbbrSegment> {
    let mut segments = Vec::new();
    for caps in ABBR_SEGMENT_RE.captures_iter(abbr) {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let segment = if let Some(cmd) = caps.get(1) {
            let name = &cmd.as_str()[1..];
            let unit = if is_known_command(name) {
                name.to_lowercase()
            } else {
                name[..1].to_lowercase()
            };
            AbbrSegment {
                unit,
                original: cmd.as_str().to_string(),
            }
        } else if let Some(cap_num) = caps.get(2) {
            AbbrSegment {
                unit: cap_num.as_str().to_lowercase(),
                original: cap_num.as_str().to_string(),
            }
        } else if let Some(upper) = caps.get(3) {
            AbbrSegment {
                unit: upper.as_str().to_lowercase(),
                original: whole.to_string(),
            }
        } else if let Some(lower) = caps.get(4) {
            AbbrSegment {
                unit: lower.as_str().to_string(),
                original: whole.to_string(),
            }
        } else if let Some(digits) = caps.get(5) {
            AbbrSegment {
                unit: digits.as_str().to_string(),
                original: digits.as_str().to_string(),
            }
        } else {
            continue;
        };
        segments.push(segment);
    }
    segments
}

/// Derive the comparable unit of a single phrase token.
///
/// A token that starts with a recognized command (optionally behind `$`)
/// yields the lowercased command name. Anything else is stripped of one
/// leading command-and-brace wrapper and stray `$`/`{`/`}` junk, then
/// yields its lowercased core word. Tokens with no alphanumeric content
/// yield the empty string and are skipped by the matcher.
pub fn word_unit(token: &str) -> String {
    let word = token.trim();
    if word.is_empty() {
        return String::new();
    }

    if let Some(caps) = LEADING_COMMAND_RE.captures(word) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        if is_known_command(name) {
            return name.to_lowercase();
        }
    }

    let stripped = LEADING_MARKUP_RE.replace(word, "");
    let core = stripped.trim_matches(|c| matches!(c, ' ' | '$' | '{' | '}'));
    if let Some(m) = CORE_WORD_RE.find(core) {
        return m.as_str().to_lowercase();
    }

    // Stripping can eat the whole token (e.g. a bare `\textbf`); fall back
    // to the first alphanumeric run of the original.
    if let Some(m) = ALNUM_RUN_RE.find(token) {
        return m.as_str().to_lowercase();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn units(abbr: &str) -> Vec<String> {
        abbr_units(abbr).into_iter().map(|s| s.unit).collect()
    }

    #[test]
    fn test_plain_uppercase_abbreviation() {
        assert_eq!(units("GLM"), vec!["g", "l", "m"]);
        assert_eq!(units("AFT"), vec!["a", "f", "t"]);
    }

    #[test]
    fn test_trailing_lowercase_absorbed() {
        assert_eq!(units("CPs"), vec!["c", "p"]);
        assert_eq!(units("Rsp"), vec!["r"]);
    }

    #[test]
    fn test_known_command_keeps_name() {
        assert_eq!(units(r"\alpha SP"), vec!["alpha", "s", "p"]);
        assert_eq!(units(r"$\sigma$-ZR"), vec!["sigma", "z", "r"]);
    }

    #[test]
    fn test_unknown_command_first_letter() {
        assert_eq!(units(r"\textbf X"), vec!["t", "x"]);
    }

    #[test]
    fn test_letter_digit_runs() {
        assert_eq!(units("BFN1"), vec!["b", "f", "n1"]);
        assert_eq!(units("H2O"), vec!["h2", "o"]);
    }

    #[test]
    fn test_digit_runs_stay_whole() {
        assert_eq!(units("Li et al. 2025"), vec!["l", "e", "a", "2025"]);
    }

    #[test]
    fn test_original_segments_preserved() {
        let segments = abbr_units(r"$\alpha$-SP");
        let originals: Vec<&str> = segments.iter().map(|s| s.original.as_str()).collect();
        assert_eq!(originals, vec![r"\alpha", "S", "P"]);
    }

    #[test]
    fn test_word_unit_plain_word() {
        assert_eq!(word_unit("Generalized"), "generalized");
        assert_eq!(word_unit("protein"), "protein");
    }

    #[test]
    fn test_word_unit_known_command() {
        assert_eq!(word_unit(r"$\alpha$"), "alpha");
        assert_eq!(word_unit(r"\frac{\gamma}{Z}"), "frac");
    }

    #[test]
    fn test_word_unit_sees_past_markup() {
        assert_eq!(word_unit(r"\textbf{Word}"), "word");
        assert_eq!(word_unit(r"\textbf"), "textbf");
    }

    #[test]
    fn test_word_unit_separators_and_symbols_empty() {
        assert_eq!(word_unit(" "), "");
        assert_eq!(word_unit("-"), "");
        assert_eq!(word_unit("{"), "");
    }

    #[test]
    fn test_word_unit_hyphen_joined_core() {
        assert_eq!(word_unit("p-value"), "p-value");
    }
}
