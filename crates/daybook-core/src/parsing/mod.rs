//! Recovers lesson records from the linear text stream.
//!
//! There is no markup to work with: every boundary below is a positional
//! heuristic over trimmed lines of the book's fixed layout.

pub mod cleanup;
pub mod dialogue;
pub mod pattern;
pub mod practice;
pub mod section;

use crate::model::{LessonId, LessonRecord};
use std::ops::Range;

pub use cleanup::clean_pattern;
pub use dialogue::parse_dialogue;
pub use pattern::parse_patterns;
pub use practice::parse_practice;
pub use section::{find_section, Section};

/// Parse one lesson out of the full text (split into lines).
///
/// Returns `None` when the lesson's section marker is absent; missing
/// subsections inside a found section only leave that field empty.
pub fn parse_lesson(lines: &[&str], id: LessonId) -> Option<LessonRecord> {
    let section = find_section(lines, id)?;
    let body = section.slice(lines);

    Some(LessonRecord {
        title: section.title.clone(),
        dialogue: parse_dialogue(body),
        patterns: parse_patterns(body),
        practice: parse_practice(body),
    })
}

/// Start of the "core pattern" subsection (STEP 3).
///
/// "SHEF" is how the OCR layer of the book renders "STEP" on some pages.
pub(crate) fn is_pattern_marker(line: &str) -> bool {
    (line.contains("STEP") || line.contains("SHEF"))
        && (line.contains('3') || line.contains("핵심 패턴") || line.contains("핵심패턴"))
}

/// Start of the "hands-on writing practice" subsection (STEP 4).
pub(crate) fn is_practice_marker(line: &str) -> bool {
    line.contains("STEP") && line.contains('4')
}

pub(crate) fn is_speaker_line(line: &str) -> bool {
    line.starts_with("A:") || line.starts_with("B:")
}

/// Line range strictly between the core-pattern marker and the next
/// practice marker (or the end of the section).
pub(crate) fn pattern_block(lines: &[&str]) -> Option<Range<usize>> {
    let marker = lines.iter().position(|l| is_pattern_marker(l))?;
    let start = marker + 1;
    let end = lines[start..]
        .iter()
        .position(|l| is_practice_marker(l.trim()))
        .map(|offset| start + offset)
        .unwrap_or(lines.len());
    Some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Speaker;

    #[test]
    fn test_pattern_marker_variants() {
        assert!(is_pattern_marker("STEP 3 핵심 패턴 익히기"));
        assert!(is_pattern_marker("SHEF3"));
        assert!(is_pattern_marker("STEP 핵심패턴"));
        assert!(!is_pattern_marker("STEP 2"));
        assert!(!is_pattern_marker("핵심 패턴"));
    }

    #[test]
    fn test_practice_marker() {
        assert!(is_practice_marker("STEP 4 직접 손영작하기"));
        assert!(!is_practice_marker("SHEF4"));
        assert!(!is_practice_marker("STEP 3"));
    }

    #[test]
    fn test_pattern_block_bounds() {
        let lines = ["title", "STEP 3", "A: Hi. 안녕", "STEP 4", "1. Go."];
        assert_eq!(pattern_block(&lines), Some(2..3));
    }

    #[test]
    fn test_pattern_block_runs_to_end_without_practice() {
        let lines = ["STEP 3", "A: Hi. 안녕", "B: Bye. 잘가"];
        assert_eq!(pattern_block(&lines), Some(1..3));
        assert_eq!(pattern_block(&["nothing here"]), None);
    }

    #[test]
    fn test_parse_lesson_full_section() {
        let lines = [
            "DAY",
            "Asking for directions",
            "007",
            "STEP 3 핵심 패턴 익히기",
            "A: Where is the station? 역이 어디예요?",
            "Where is ~? : ~는 어디에 있어요?",
            "B: It's over there. 저기 있어요.",
            "",
            "STEP 4 직접 손영작하기",
            "1. Where is the bank?",
            "2. It's next to the school. E",
        ];
        let record = parse_lesson(&lines, LessonId::new(7).unwrap()).unwrap();
        assert_eq!(record.title, "Asking for directions");
        assert_eq!(record.dialogue.len(), 2);
        assert_eq!(record.dialogue[0].speaker, Speaker::A);
        assert_eq!(record.dialogue[1].source, "It's over there.");
        assert_eq!(record.patterns, vec!["Where is ~? : ~는 어디에 있어요?"]);
        assert_eq!(
            record.practice,
            vec!["1. Where is the bank?", "2. It's next to the school."]
        );
    }

    #[test]
    fn test_parse_lesson_missing_marker() {
        let lines = ["DAY", "Title", "001", "STEP 3"];
        assert!(parse_lesson(&lines, LessonId::new(2).unwrap()).is_none());
    }

    #[test]
    fn test_parse_lesson_without_subsections() {
        let lines = ["DAY", "Only a title", "009", "some text"];
        let record = parse_lesson(&lines, LessonId::new(9).unwrap()).unwrap();
        assert_eq!(record.title, "Only a title");
        assert!(record.dialogue.is_empty());
        assert!(record.patterns.is_empty());
        assert!(record.practice.is_empty());
    }
}
