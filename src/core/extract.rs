//! Extraction pipeline: scan, match, validate, reconstruct.

use fxhash::FxHashMap;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::matcher::match_abbreviation;
use crate::core::normalize::normalize;
use crate::core::scan::{count_usage, scan};
use crate::core::token::tokenize;
use crate::core::units::abbr_units;
use crate::utils::error::ExtractWarning;

/// How the definition phrase is sliced once a match is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconstructionPolicy {
    /// Slice from the first matched token to the end of the phrase,
    /// keeping trailing qualifier words past the last-matched unit.
    #[default]
    ToEndOfLine,
    /// Slice from the first matched token to the last matched token only.
    MinToMax,
}

/// Tunable extraction behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Minimum fraction of abbreviation units that must match (0.0 to 1.0).
    pub threshold: f64,
    /// Phrase slicing policy.
    pub reconstruction: ReconstructionPolicy,
    /// Additionally require the first and last abbreviation units to have
    /// matched.
    pub require_first_last_match: bool,
    /// Minimum standalone usage count elsewhere in the text.
    pub min_usage: usize,
    /// Run the normalizer before scanning. Disable when the input has
    /// already been normalized.
    pub normalize: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            threshold: 0.7,
            reconstruction: ReconstructionPolicy::default(),
            require_first_last_match: false,
            min_usage: 0,
            normalize: true,
        }
    }
}

impl ExtractOptions {
    /// Strict options: the first and last abbreviation units must match.
    pub fn strict() -> Self {
        ExtractOptions {
            require_first_last_match: true,
            ..Self::default()
        }
    }
}

/// One extracted abbreviation. Immutable once constructed; callers may
/// re-sort or filter collections of these but should not edit records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbbreviationMatch {
    /// The abbreviation as written in the text
    pub abbreviation: String,
    /// The reconstructed definition phrase, original spacing preserved
    pub full_name: String,
    /// Standalone occurrences of the abbreviation elsewhere in the text
    pub usage_count: usize,
    /// Fraction of abbreviation units matched to tokens
    pub match_ratio: f64,
}

/// One candidate as seen by the collect stage, before any filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateReport {
    pub abbreviation: String,
    /// Reconstructed phrase, or empty when nothing matched
    pub full_name: String,
    pub usage_count: usize,
    pub match_ratio: f64,
    pub words_matched_ratio: f64,
}

/// Full output of one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Validated matches, sorted by usage count then sort key
    pub matches: Vec<AbbreviationMatch>,
    /// Every candidate the scanner produced, unfiltered
    pub candidates: Vec<CandidateReport>,
    /// Non-fatal conditions hit along the way
    pub warnings: Vec<ExtractWarning>,
}

lazy_static! {
    static ref LEADING_NON_WORD_RE: Regex = Regex::new(r"^[^\w]+").unwrap();
}

/// Extract abbreviations with default options.
pub fn extract(text: &str) -> Vec<AbbreviationMatch> {
    extract_with_options(text, &ExtractOptions::default())
}

/// Extract abbreviations with explicit options.
pub fn extract_with_options(text: &str, options: &ExtractOptions) -> Vec<AbbreviationMatch> {
    extract_with_report(text, options).matches
}

/// Extract abbreviations, returning the full report: matches, the
/// unfiltered candidate list, and any warnings.
pub fn extract_with_report(text: &str, options: &ExtractOptions) -> ExtractionReport {
    if options.normalize {
        run(&normalize(text), options)
    } else {
        run(text, options)
    }
}

/// Collect every candidate with its ratios and usage count, applying no
/// validity filtering. Useful for inspecting why a candidate was rejected.
pub fn collect(text: &str) -> Vec<CandidateReport> {
    extract_with_report(text, &ExtractOptions::default()).candidates
}

/// Sort key for an abbreviation: the concatenation of its comparable
/// units, falling back to the abbreviation itself with leading non-word
/// characters stripped. Keeps `$\alpha$R` next to `AR` rather than first.
pub fn sort_key(abbr: &str) -> String {
    let key: String = abbr_units(abbr).iter().map(|s| s.unit.as_str()).collect();
    if !key.is_empty() {
        return key;
    }
    let lowered = abbr.to_lowercase();
    LEADING_NON_WORD_RE.replace(&lowered, "").into_owned()
}

fn run(text: &str, options: &ExtractOptions) -> ExtractionReport {
    let candidates = scan(text);
    let mut warnings = Vec::new();

    // Usage counts, one lookup per distinct abbreviation.
    let mut usage: FxHashMap<&str, usize> = FxHashMap::default();
    for candidate in &candidates {
        if usage.contains_key(candidate.abbr) {
            continue;
        }
        let count = match count_usage(text, candidate.abbr) {
            Ok(count) => count,
            Err(err) => {
                warnings.push(ExtractWarning::regex_error(candidate.abbr, err));
                0
            }
        };
        usage.insert(candidate.abbr, count);
    }

    let mut reports = Vec::new();
    let mut accepted: IndexMap<String, AbbreviationMatch> = IndexMap::new();

    for candidate in &candidates {
        let usage_count = usage.get(candidate.abbr).copied().unwrap_or(0);

        let tokens = tokenize(candidate.phrase);
        if tokens.is_empty() {
            warnings.push(ExtractWarning::no_words_ahead(candidate.abbr));
            continue;
        }

        let outcome = match_abbreviation(&tokens, candidate.abbr);
        if outcome.indices.is_empty() {
            warnings.push(ExtractWarning::malformed_abbreviation(candidate.abbr));
            continue;
        }

        let matched = outcome.matched_indices();
        let full_name = reconstruct(&tokens, &matched, options.reconstruction);

        reports.push(CandidateReport {
            abbreviation: candidate.abbr.to_string(),
            full_name: full_name.clone().unwrap_or_default(),
            usage_count,
            match_ratio: outcome.match_ratio,
            words_matched_ratio: outcome.words_matched_ratio,
        });

        if outcome.match_ratio < options.threshold {
            continue;
        }
        if options.require_first_last_match
            && (outcome.indices.first().map_or(true, Option::is_none)
                || outcome.indices.last().map_or(true, Option::is_none))
        {
            continue;
        }
        if usage_count < options.min_usage {
            continue;
        }
        let Some(full_name) = full_name else {
            continue;
        };

        // A later definition for the same abbreviation overwrites the
        // earlier one, keeping the first-seen position.
        accepted.insert(
            candidate.abbr.to_string(),
            AbbreviationMatch {
                abbreviation: candidate.abbr.to_string(),
                full_name,
                usage_count,
                match_ratio: outcome.match_ratio,
            },
        );
    }

    let mut matches: Vec<AbbreviationMatch> = accepted.into_values().collect();
    matches.sort_by(|a, b| {
        b.usage_count
            .cmp(&a.usage_count)
            .then_with(|| sort_key(&a.abbreviation).cmp(&sort_key(&b.abbreviation)))
    });

    ExtractionReport {
        matches,
        candidates: reports,
        warnings,
    }
}

/// Slice the token list per policy and rejoin it. Tokens carry their own
/// separators, so concatenation reproduces the original spacing.
fn reconstruct(
    tokens: &[&str],
    matched: &[usize],
    policy: ReconstructionPolicy,
) -> Option<String> {
    let min_idx = *matched.iter().min()?;
    let slice = match policy {
        ReconstructionPolicy::ToEndOfLine => &tokens[min_idx..],
        ReconstructionPolicy::MinToMax => {
            let max_idx = *matched.iter().max()?;
            &tokens[min_idx..=max_idx]
        }
    };
    let name = slice.concat().trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
