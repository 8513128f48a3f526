//! Regex-based sentence boundary detection.
//!
//! Uses a pattern-and-repair approach: number patterns that contain a period
//! but do not end a sentence (decimals, suspension points) are replaced with
//! placeholders, the text is split on `.`, `!`, and `?`, and the placeholders
//! are restored in the resulting sentences.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Placeholder tokens for protected patterns.
/// These use sequences unlikely to appear in natural text.
mod placeholder {
    pub const SUSPENSION: &str = "\u{FEFF}SUS\u{FEFF}"; // Suspension points ...
    pub const FLOAT_DOT: &str = "\u{FEFF}FD\u{FEFF}"; // Floating point decimal
    pub const LEADING_DOT: &str = "\u{FEFF}LD\u{FEFF}"; // Leading decimal (.625)
}

static SUSPENSION_POINTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3}").unwrap());

static FLOAT_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<int>[0-9]+)\.(?P<frac>[0-9]+)").unwrap());

static LEADING_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<pre>^|\s)\.(?P<nums>[0-9]+)").unwrap());

/// Splits text into sentences.
///
/// Sentence boundaries are the standard sentence-final punctuation marks
/// `.`, `!`, and `?`. The terminator stays attached to its sentence, and
/// every returned sentence is trimmed and non-empty. Abbreviations are not
/// special-cased, but decimal numbers (`3.14`, `.625`) and suspension
/// points (`...`) do not split a sentence.
///
/// Edge cases:
/// - Empty or whitespace-only input returns an empty vector.
/// - Text without terminal punctuation is returned as a single sentence.
/// - Consecutive delimiters never produce empty-string sentences.
///
/// # Example
/// ```
/// use textsim::segmentation::split_sentences;
///
/// let sentences = split_sentences("The value was 3.14. Then it changed.");
/// assert_eq!(sentences.len(), 2);
/// assert!(sentences[0].contains("3.14"));
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    // Step 1: protect dot patterns that are not sentence boundaries
    let mut protected = SUSPENSION_POINTS
        .replace_all(text, placeholder::SUSPENSION)
        .into_owned();

    protected = FLOAT_POINT
        .replace_all(&protected, |caps: &Captures| {
            format!("{}{}{}", &caps["int"], placeholder::FLOAT_DOT, &caps["frac"])
        })
        .into_owned();

    protected = LEADING_DECIMAL
        .replace_all(&protected, |caps: &Captures| {
            format!("{}{}{}", &caps["pre"], placeholder::LEADING_DOT, &caps["nums"])
        })
        .into_owned();

    // Step 2: split on sentence enders, keeping the terminator attached;
    // Step 3: repair the placeholders and drop fragments with no content
    protected
        .split_inclusive(['.', '!', '?'])
        .map(repair_sentence)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

/// Restores placeholders and trims a sentence fragment.
fn repair_sentence(fragment: &str) -> String {
    fragment
        .trim()
        .replace(placeholder::SUSPENSION, "...")
        .replace(placeholder::FLOAT_DOT, ".")
        .replace(placeholder::LEADING_DOT, ".")
}
