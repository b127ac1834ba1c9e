//! WASM bindings for ablax
//!
//! This module provides JavaScript-accessible functions for abbreviation
//! extraction, so a web front end can call the same core that the CLI uses.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Extraction options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct WasmExtractOptions {
    /// Minimum fraction of abbreviation units that must match
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Slice only from the first to the last matched token instead of to
    /// the end of the phrase
    #[serde(default)]
    pub min_to_max: bool,
    /// Require the first and last abbreviation units to have matched
    #[serde(default)]
    pub require_first_last_match: bool,
    /// Minimum standalone usage count elsewhere in the text
    #[serde(default)]
    pub min_usage: usize,
    /// Normalize the text before scanning
    #[serde(default = "default_true")]
    pub normalize: bool,
}

#[cfg(feature = "wasm")]
impl Default for WasmExtractOptions {
    fn default() -> Self {
        WasmExtractOptions {
            threshold: default_threshold(),
            min_to_max: false,
            require_first_last_match: false,
            min_usage: 0,
            normalize: true,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_threshold() -> f64 {
    0.7
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
impl WasmExtractOptions {
    fn to_options(&self) -> crate::ExtractOptions {
        crate::ExtractOptions {
            threshold: self.threshold,
            reconstruction: if self.min_to_max {
                crate::ReconstructionPolicy::MinToMax
            } else {
                crate::ReconstructionPolicy::ToEndOfLine
            },
            require_first_last_match: self.require_first_last_match,
            min_usage: self.min_usage,
            normalize: self.normalize,
        }
    }
}

/// Extraction result with metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct WasmExtractResult {
    /// Accepted matches
    pub matches: Vec<crate::AbbreviationMatch>,
    /// Whether extraction ran without warnings
    pub success: bool,
    /// Warnings during extraction
    pub warnings: Vec<String>,
}

/// Safely serialize a value to JsValue, returning NULL on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Normalize LaTeX text.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeLatex")]
pub fn normalize_latex_wasm(input: &str) -> String {
    crate::normalize(input)
}

/// Extract abbreviations with default options, returning a list of
/// `{abbreviation, full_name, usage_count, match_ratio}` records.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractAbbreviations")]
pub fn extract_abbreviations_wasm(input: &str) -> JsValue {
    to_js_value(&crate::extract(input))
}

/// Extract abbreviations with options.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractAbbreviationsWithOptions")]
pub fn extract_abbreviations_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: WasmExtractOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let report = crate::extract_with_report(input, &opts.to_options());
    let result = WasmExtractResult {
        success: report.warnings.is_empty(),
        warnings: report.warnings.iter().map(|w| w.to_string()).collect(),
        matches: report.matches,
    };
    to_js_value(&result)
}

/// Extract and format in one call. `format` is one of `plain`, `tabular`,
/// `nomenclature`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractAndFormat")]
pub fn extract_and_format_wasm(input: &str, format: &str, options: JsValue) -> String {
    let opts: WasmExtractOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let matches = crate::extract_with_options(input, &opts.to_options());
    let style = match format {
        "tabular" => crate::OutputFormat::Tabular,
        "nomenclature" => crate::OutputFormat::Nomenclature,
        _ => crate::OutputFormat::Plain,
    };
    crate::format_matches(&matches, style)
}
