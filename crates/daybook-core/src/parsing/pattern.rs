//! Pattern explanations interleaved with example sentences.
//!
//! The book prints a grammar point ("Can I ~? : ~해도 돼요?") under some of the
//! dialogue lines, mixed with example sentences that look almost the same.
//! Nothing in the extracted text marks which is which, so a line is taken as
//! a pattern when it mixes Hangul and Latin text, carries one of the pattern
//! symbols, and does not have the shape of an example sentence.

use super::{clean_pattern, is_speaker_line, pattern_block};

const PATTERN_SYMBOLS: [char; 5] = [':', '~', '(', '+', '.'];
const TERMINAL_PUNCT: [char; 3] = ['.', '?', '!'];
/// Characters that never occur in the English half of an example sentence.
const NON_SENTENCE_CHARS: [char; 5] = [':', '+', '~', '(', ')'];
/// Punctuation tolerated in a pure-Hangul continuation line.
const CONTINUATION_PUNCT: &str = " .?!,~:()-/";

pub(crate) fn is_hangul(c: char) -> bool {
    ('\u{ac00}'..='\u{d7a3}').contains(&c)
}

/// Extract and clean the pattern explanations of the core-pattern subsection.
///
/// For every dialogue line, the lines below it (up to the next dialogue line
/// or blank line) are searched for the first pattern candidate.
pub fn parse_patterns(lines: &[&str]) -> Vec<String> {
    let Some(block) = pattern_block(lines) else {
        return Vec::new();
    };
    let block = &lines[block];

    block
        .iter()
        .enumerate()
        .filter(|(_, line)| is_speaker_line(line.trim()))
        .filter_map(|(i, _)| pattern_after(block, i + 1))
        .map(|p| clean_pattern(&p))
        .collect()
}

fn pattern_after(block: &[&str], from: usize) -> Option<String> {
    for (j, line) in block.iter().enumerate().skip(from) {
        let line = line.trim();
        if line.is_empty() || is_speaker_line(line) {
            return None;
        }
        if !is_pattern_candidate(line) {
            continue;
        }

        let mut pattern = line.to_string();
        if let Some(next) = block.get(j + 1).map(|l| l.trim()) {
            if is_continuation(next) {
                pattern.push(' ');
                pattern.push_str(next);
            }
        }
        return Some(pattern);
    }
    None
}

/// Mixed Hangul/Latin line with a pattern symbol that is not an example
/// sentence.
pub fn is_pattern_candidate(line: &str) -> bool {
    let has_hangul = line.chars().any(is_hangul);
    let has_latin = line.chars().any(|c| c.is_ascii_alphabetic());
    let has_symbol = line.chars().any(|c| PATTERN_SYMBOLS.contains(&c));

    has_hangul && has_latin && has_symbol && !is_example_sentence(line)
}

/// Example-sentence signature: a capitalized word, more English without
/// pattern symbols, terminal punctuation, whitespace, then a Hangul run.
///
/// "It's cold today. 오늘 추워요." is an example sentence;
/// "It's ~ today. : 오늘 ~해요." and "can I ~? 제가 ~해도 돼요?" are not.
pub fn is_example_sentence(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < 4 || !chars[0].is_ascii_uppercase() || !chars[1].is_ascii_lowercase() {
        return false;
    }

    for p in 3..chars.len() {
        if NON_SENTENCE_CHARS.contains(&chars[p - 1]) {
            return false;
        }
        if TERMINAL_PUNCT.contains(&chars[p]) && starts_hangul_run(&chars[p + 1..]) {
            return true;
        }
    }
    false
}

/// Whitespace followed by a Hangul syllable.
fn starts_hangul_run(rest: &[char]) -> bool {
    let ws = rest.iter().take_while(|c| c.is_whitespace()).count();
    ws > 0 && rest.get(ws).is_some_and(|&c| is_hangul(c))
}

/// Pure-Hangul line that continues the pattern above it rather than
/// starting a new example ("~해도 돼요" under "Can I ~?").
fn is_continuation(line: &str) -> bool {
    if line.is_empty() || is_speaker_line(line) || !line.chars().any(is_hangul) {
        return false;
    }
    let only_hangul = line
        .chars()
        .all(|c| is_hangul(c) || c.is_whitespace() || CONTINUATION_PUNCT.contains(c));
    only_hangul && !is_hangul_sentence(line)
}

/// Hangul words ending in terminal punctuation, e.g. "배고파요."
fn is_hangul_sentence(line: &str) -> bool {
    let trimmed = line.trim_end();
    match trimmed.strip_suffix(|c: char| TERMINAL_PUNCT.contains(&c)) {
        Some(body) => {
            !body.is_empty() && body.chars().all(|c| is_hangul(c) || c.is_whitespace())
        }
        None => false,
    }
}
