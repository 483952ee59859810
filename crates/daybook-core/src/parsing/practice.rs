use super::is_practice_marker;
use regex::Regex;
use std::sync::LazyLock;

/// Lines after the practice marker searched for numbered items.
const PRACTICE_WINDOW: usize = 20;

static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*.+$").unwrap());

/// A stray "E" the text layer appends to practice lines (the answer-box
/// glyph), either after whitespace or glued to the final punctuation.
static TRAILING_ARTIFACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:([.?!])|\s)\s*E\s*$").unwrap());

/// Extract the numbered items of the writing-practice subsection.
pub fn parse_practice(lines: &[&str]) -> Vec<String> {
    let Some(marker) = lines.iter().position(|l| is_practice_marker(l)) else {
        return Vec::new();
    };
    let end = (marker + 1 + PRACTICE_WINDOW).min(lines.len());

    lines[marker + 1..end]
        .iter()
        .map(|l| l.trim())
        .filter(|l| ITEM_RE.is_match(l))
        .map(strip_artifact)
        .collect()
}

pub fn strip_artifact(item: &str) -> String {
    TRAILING_ARTIFACT_RE
        .replace(item, "$1")
        .trim_end()
        .to_string()
}
