//! Ablax - LaTeX-aware abbreviation extractor
//!
//! Finds `Definition Phrase (ABBR)` patterns in free text, LaTeX markup
//! included, checks that the abbreviation is plausibly derived from the
//! preceding phrase by letter and command matching, and reconstructs the
//! phrase with its original spacing and hyphenation.
//!
//! The pipeline: [`normalize`] standardizes math delimiters, comments, and
//! spacing; the scanner finds `phrase (ABBR)` candidates on a single line;
//! both sides are reduced to comparable units (letters, recognized command
//! names, digit runs); a greedy backward matcher aligns the abbreviation
//! against the phrase tail; candidates above the match-ratio threshold are
//! rebuilt into [`AbbreviationMatch`] records.
//!
//! ```
//! use ablax::extract;
//!
//! let matches = extract("accelerated failure time (AFT) models.");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].abbreviation, "AFT");
//! assert_eq!(matches[0].full_name, "accelerated failure time");
//! ```
//!
//! Extraction is pure and synchronous: no IO, no shared state, and no
//! errors raised for malformed input text. Bad candidates simply produce
//! no match; [`extract_with_report`] exposes the rejected candidates and
//! any warnings alongside the accepted matches.

pub mod core;
pub mod data;
pub mod format;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::extract::{
    collect, extract, extract_with_options, extract_with_report, sort_key, AbbreviationMatch,
    CandidateReport, ExtractOptions, ExtractionReport, ReconstructionPolicy,
};
pub use crate::core::normalize::normalize;
pub use crate::format::{format_matches, OutputFormat};
pub use crate::utils::error::{ExtractError, ExtractResult, ExtractWarning, WarningKind};
