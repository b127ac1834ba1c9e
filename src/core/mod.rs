//! Abbreviation extraction core
//!
//! This module implements the extraction pipeline: text normalization,
//! candidate scanning, separator-preserving tokenization, comparable-unit
//! reduction, greedy backward matching, and validation with phrase
//! reconstruction.

pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod scan;
pub mod token;
pub mod units;

pub use extract::{
    collect, extract, extract_with_options, extract_with_report, sort_key, AbbreviationMatch,
    CandidateReport, ExtractOptions, ExtractionReport, ReconstructionPolicy,
};
pub use matcher::{match_abbreviation, MatchOutcome};
pub use normalize::normalize;
pub use scan::{count_usage, scan, Candidate};
pub use token::tokenize;
pub use units::{abbr_units, word_unit, AbbrSegment};
