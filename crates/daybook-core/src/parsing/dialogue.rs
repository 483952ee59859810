use super::pattern::is_hangul;
use super::pattern_block;
use crate::model::{DialogueLine, Speaker};

/// Punctuation that can appear inside the English sentence of a line.
const SOURCE_PUNCT: &str = ",'’.?!-";

fn is_source_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || SOURCE_PUNCT.contains(c)
}

/// Extract the speaker-tagged dialogue of the core-pattern subsection.
///
/// Returns an empty list when the section has no core-pattern marker.
pub fn parse_dialogue(lines: &[&str]) -> Vec<DialogueLine> {
    let Some(block) = pattern_block(lines) else {
        return Vec::new();
    };

    lines[block]
        .iter()
        .filter_map(|line| parse_dialogue_line(line))
        .collect()
}

/// Parse one "A: English. 한국어" line.
///
/// `None` for lines without a speaker prefix, lines shorter than three
/// characters, and lines whose English run is empty.
pub fn parse_dialogue_line(line: &str) -> Option<DialogueLine> {
    let line = line.trim();
    if line.chars().count() < 3 {
        return None;
    }

    let (speaker, rest) = Speaker::strip_prefix(line)?;
    let content = rest.trim_start();
    let split = source_run_end(content);

    let source = content[..split].trim();
    if source.is_empty() {
        return None;
    }

    Some(DialogueLine {
        speaker,
        source: source.to_string(),
        translation: content[split..].trim().to_string(),
    })
}

/// Byte offset where the English run of `content` ends.
///
/// A number glued to the following Hangul ("7시에") belongs to the
/// translation, not to the English run.
fn source_run_end(content: &str) -> usize {
    let end = content
        .find(|c: char| !is_source_char(c))
        .unwrap_or(content.len());

    let run = &content[..end];
    let tail_start = run
        .char_indices()
        .rfind(|&(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let tail = &run[tail_start..];
    let glued_to_hangul = content[end..].starts_with(is_hangul);

    if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) && glued_to_hangul {
        tail_start
    } else {
        end
    }
}
