//! Output formatting for extracted abbreviation lists.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::core::extract::AbbreviationMatch;

/// Output style for a list of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `ABBR: full name` entries joined with `"; \n"`.
    #[default]
    Plain,
    /// A two-column LaTeX `tabular` environment.
    Tabular,
    /// `\nomenclature{..}{..}` lines plus the `nomencl` preamble.
    Nomenclature,
}

/// Render matches in the requested format. Abbreviations and full names
/// are assumed to be valid LaTeX snippets; no escaping is applied.
pub fn format_matches(matches: &[AbbreviationMatch], format: OutputFormat) -> String {
    if matches.is_empty() {
        return "No abbreviations found.".to_string();
    }

    match format {
        OutputFormat::Plain => matches
            .iter()
            .map(|m| format!("{}: {}", m.abbreviation, m.full_name))
            .collect::<Vec<_>>()
            .join("; \n"),
        OutputFormat::Tabular => {
            let mut out = String::from("\\begin{tabular}{ll}\n");
            out.push_str("\\hline\n");
            out.push_str("\\textbf{Abbreviation} & \\textbf{Full Name} \\\\\n");
            out.push_str("\\hline\n");
            for m in matches {
                let _ = writeln!(out, "{} & {} \\\\", m.abbreviation, m.full_name);
            }
            out.push_str("\\hline\n");
            out.push_str("\\end{tabular}\n");
            out
        }
        OutputFormat::Nomenclature => {
            let mut out = String::from("\\usepackage{nomencl}\n");
            out.push_str("\\makenomenclature\n");
            for m in matches {
                let _ = writeln!(out, "\\nomenclature{{{}}}{{{}}}", m.abbreviation, m.full_name);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<AbbreviationMatch> {
        vec![
            AbbreviationMatch {
                abbreviation: "AFT".to_string(),
                full_name: "accelerated failure time".to_string(),
                usage_count: 2,
                match_ratio: 1.0,
            },
            AbbreviationMatch {
                abbreviation: "RSP".to_string(),
                full_name: "randomized survival probabilities".to_string(),
                usage_count: 0,
                match_ratio: 1.0,
            },
        ]
    }

    #[test]
    fn test_plain_format() {
        let out = format_matches(&sample(), OutputFormat::Plain);
        assert_eq!(
            out,
            "AFT: accelerated failure time; \nRSP: randomized survival probabilities"
        );
    }

    #[test]
    fn test_tabular_format() {
        let out = format_matches(&sample(), OutputFormat::Tabular);
        assert!(out.starts_with("\\begin{tabular}{ll}\n"));
        assert!(out.contains("AFT & accelerated failure time \\\\"));
        assert!(out.contains("RSP & randomized survival probabilities \\\\"));
        assert!(out.ends_with("\\end{tabular}\n"));
    }

    #[test]
    fn test_nomenclature_format() {
        let out = format_matches(&sample(), OutputFormat::Nomenclature);
        assert!(out.starts_with("\\usepackage{nomencl}\n\\makenomenclature\n"));
        assert!(out.contains("\\nomenclature{AFT}{accelerated failure time}"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_matches(&[], OutputFormat::Tabular), "No abbreviations found.");
    }
}
