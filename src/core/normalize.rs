//! Text normalization ahead of candidate scanning.
//!
//! The candidate scanner expects math delimiters, braces, and parentheses
//! in a predictable shape. `normalize` applies a fixed sequence of string
//! transforms to get there; each pass assumes the output shape of the
//! passes before it, so the order is load-bearing. The whole sequence is
//! idempotent.

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::UPPER_GREEK_CMDS;

lazy_static! {
    /// `\( ... \)` inline math, shortest match, single line.
    static ref INLINE_MATH_RE: Regex = Regex::new(r"\\\(\s*(.*?)\s*\\\)").unwrap();
    /// An opening brace together with any whitespace around it.
    static ref BRACE_OPEN_RE: Regex = Regex::new(r"\s*\{\s*").unwrap();
    /// A closing brace together with any whitespace around it.
    static ref BRACE_CLOSE_RE: Regex = Regex::new(r"\s*\}\s*").unwrap();
    /// An opening parenthesis and any whitespace before it.
    static ref PAREN_OPEN_RE: Regex = Regex::new(r"\s*\(").unwrap();
    /// Uppercase Greek commands that may have a token glued onto them.
    static ref UPPER_GREEK_RE: Regex =
        Regex::new(&format!(r"\\(?:{})", UPPER_GREEK_CMDS.join("|"))).unwrap();
    /// A lowercase command name.
    static ref LOWER_COMMAND_RE: Regex = Regex::new(r"\\[a-z]+").unwrap();
    /// Two or more consecutive blank-ish lines.
    static ref BLANK_LINES_RE: Regex = Regex::new(r"(?:\n\s*){2,}").unwrap();
    /// Any whitespace run.
    static ref WHITESPACE_RUN_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize LaTeX text for extraction.
///
/// Passes, in order:
/// 1. strip whitespace just inside `$...$` delimiters (`\$` stays literal);
/// 2. convert `\( ... \)` to `$...$`, trimming inner whitespace;
/// 3. strip line comments (unescaped `%` to end of line);
/// 4. slice to the document body when `\begin{document}` is present;
/// 5. surround `{` and `}` with single spaces;
/// 6. put a space before every `(`;
/// 7. pad uppercase Greek commands with a trailing space;
/// 8. split a lowercase command from a capitalized word glued onto it;
/// 9. collapse blank lines, then collapse all whitespace runs to one space.
pub fn normalize(text: &str) -> String {
    let mut out = normalize_dollar_spacing(text);
    out = INLINE_MATH_RE
        .replace_all(&out, |caps: &regex::Captures| format!("${}$", caps[1].trim()))
        .into_owned();
    out = strip_comments(&out);
    out = slice_document_body(out);
    out = BRACE_OPEN_RE.replace_all(&out, " { ").into_owned();
    out = BRACE_CLOSE_RE.replace_all(&out, " } ").into_owned();
    out = PAREN_OPEN_RE.replace_all(&out, " (").into_owned();
    out = pad_upper_greek(&out);
    out = pad_command_capital_boundary(&out);
    out = BLANK_LINES_RE.replace_all(&out, "\n").into_owned();
    WHITESPACE_RUN_RE.replace_all(&out, " ").into_owned()
}

/// Remove whitespace immediately after an opening `$` and immediately
/// before a closing `$`.
///
/// A single left-to-right scan with an "inside math" toggle; `\$` (and any
/// other escaped character) passes through without toggling. A regex cannot
/// express the escape handling, so this stays a manual scan.
fn normalize_dollar_spacing(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_math = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(c);
            if let Some(next) = chars.next() {
                out.push(next);
            }
            continue;
        }
        if c == '$' {
            if !in_math {
                out.push(c);
                in_math = true;
                while matches!(chars.peek(), Some(w) if w.is_whitespace()) {
                    chars.next();
                }
            } else {
                in_math = false;
                while out.ends_with(|w: char| w.is_whitespace()) {
                    out.pop();
                }
                out.push(c);
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Strip LaTeX line comments: an unescaped `%` and everything to the end
/// of that line. `\%` is preserved.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let bytes = line.as_bytes();
        let cut = bytes
            .iter()
            .enumerate()
            .position(|(i, &b)| b == b'%' && (i == 0 || bytes[i - 1] != b'\\'));
        match cut {
            Some(i) => {
                out.push_str(&line[..i]);
                if line.ends_with('\n') {
                    out.push('\n');
                }
            }
            None => out.push_str(line),
        }
    }
    out
}

/// Discard the preamble when `\begin{document}` is present, and a trailing
/// `\end{document}` when it sits near the end of the text.
fn slice_document_body(mut text: String) -> String {
    const BEGIN_DOC: &str = "\\begin{document}";
    const END_DOC: &str = "\\end{document}";

    if let Some(idx) = text.find(BEGIN_DOC) {
        text.drain(..idx + BEGIN_DOC.len());
    }
    if let Some(idx) = text.rfind(END_DOC) {
        if text.len() - idx < 30 {
            text.truncate(idx);
        }
    }
    text
}

/// Insert a space after `\Gamma`-style commands that are not already
/// followed by whitespace (also at end of text).
fn pad_upper_greek(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in UPPER_GREEK_RE.find_iter(text) {
        out.push_str(&text[last..m.end()]);
        if !matches!(text[m.end()..].chars().next(), Some(c) if c.is_whitespace()) {
            out.push(' ');
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Insert a space between a lowercase command and a capitalized word glued
/// onto it, e.g. `\textbf Time` left unspaced as `\textbfTime` elsewhere.
/// The boundary heuristic requires an uppercase letter followed by a
/// non-lowercase character.
fn pad_command_capital_boundary(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in LOWER_COMMAND_RE.find_iter(text) {
        out.push_str(&text[last..m.end()]);
        let mut rest = text[m.end()..].chars();
        let first = rest.next();
        let second = rest.next();
        if matches!(first, Some(c) if c.is_ascii_uppercase())
            && matches!(second, Some(c) if !c.is_ascii_lowercase())
        {
            out.push(' ');
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
