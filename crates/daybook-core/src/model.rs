use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static LABELED_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bday\D*([0-9]{1,3})\b").unwrap());

/// Identifier of one lesson ("day") in the book, always within `1..=130`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LessonId(u16);

impl LessonId {
    pub const FIRST: u16 = 1;
    pub const LAST: u16 = 130;

    /// Literal token printed on the line(s) above every numeric section marker.
    pub const MARKER_TOKEN: &'static str = "DAY";

    pub fn new(n: u16) -> Option<LessonId> {
        if (Self::FIRST..=Self::LAST).contains(&n) {
            Some(LessonId(n))
        } else {
            None
        }
    }

    /// Zero-padded numeric form, e.g. "005". This is both the section marker
    /// line in the extracted text and the audio file prefix.
    pub fn padded(self) -> String {
        format!("{:03}", self.0)
    }

    /// Storage key and display label, e.g. "DAY 005".
    pub fn label(self) -> String {
        format!("{} {:03}", Self::MARKER_TOKEN, self.0)
    }

    /// All lesson ids in ascending order.
    pub fn all() -> impl Iterator<Item = LessonId> {
        (Self::FIRST..=Self::LAST).map(LessonId)
    }

    /// Resolve free-form user input to a lesson id.
    ///
    /// Accepts a bare 1-3 digit number ("5", "005", "130") or any string with
    /// a day label followed by 1-3 digits ("day130", "DAY 130", "Day-7").
    /// Anything else, or a number outside `1..=130`, yields `None`.
    pub fn normalize(input: &str) -> Option<LessonId> {
        let q = input.trim();
        if q.is_empty() {
            return None;
        }

        if q.chars().all(|c| c.is_ascii_digit()) {
            if let Some(id) = q.parse::<u32>().ok().and_then(Self::from_u32) {
                return Some(id);
            }
        }

        LABELED_ID_RE
            .captures(q)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .and_then(Self::from_u32)
    }

    fn from_u32(n: u32) -> Option<LessonId> {
        u16::try_from(n).ok().and_then(Self::new)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:03}", Self::MARKER_TOKEN, self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    #[default]
    A,
    B,
}

impl Speaker {
    /// Match the "A:" / "B:" prefix of a dialogue line, returning the speaker
    /// and the text after the prefix.
    pub fn strip_prefix(line: &str) -> Option<(Speaker, &str)> {
        if let Some(rest) = line.strip_prefix("A:") {
            Some((Speaker::A, rest))
        } else {
            line.strip_prefix("B:").map(|rest| (Speaker::B, rest))
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Speaker> {
        match s.trim().trim_end_matches(':').to_uppercase().as_str() {
            "A" => Some(Speaker::A),
            "B" => Some(Speaker::B),
            _ => None,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::A => write!(f, "A"),
            Speaker::B => write!(f, "B"),
        }
    }
}

/// One utterance of the core-pattern dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: Speaker,
    /// Source-language (English) sentence.
    #[serde(rename = "en")]
    pub source: String,
    /// Korean translation.
    #[serde(rename = "ko")]
    pub translation: String,
}

impl DialogueLine {
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty() && self.translation.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub title: String,
    pub dialogue: Vec<DialogueLine>,
    /// Cleaned "pattern : translation" strings.
    pub patterns: Vec<String>,
    /// Numbered writing-practice items ("1. ...").
    pub practice: Vec<String>,
}

impl LessonRecord {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.dialogue.is_empty()
            && self.patterns.is_empty()
            && self.practice.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_padded() {
        let id = LessonId::new(5).unwrap();
        assert_eq!(id.label(), "DAY 005");
        assert_eq!(id.padded(), "005");
        assert_eq!(id.to_string(), "DAY 005");
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(LessonId::new(0).is_none());
        assert!(LessonId::new(131).is_none());
        assert_eq!(LessonId::all().count(), 130);
    }

    #[test]
    fn test_normalize_equivalent_forms() {
        let expected = LessonId::new(130);
        assert_eq!(LessonId::normalize("130"), expected);
        assert_eq!(LessonId::normalize("day130"), expected);
        assert_eq!(LessonId::normalize("DAY 130"), expected);
        assert_eq!(LessonId::normalize("  Day-130 "), expected);
    }

    #[test]
    fn test_normalize_padded_number() {
        assert_eq!(LessonId::normalize("005"), LessonId::new(5));
        assert_eq!(LessonId::normalize("5"), LessonId::new(5));
    }

    #[test]
    fn test_normalize_no_match() {
        assert_eq!(LessonId::normalize("131"), None);
        assert_eq!(LessonId::normalize("0"), None);
        assert_eq!(LessonId::normalize("abc"), None);
        assert_eq!(LessonId::normalize(""), None);
        assert_eq!(LessonId::normalize("DAY 1300"), None);
        assert_eq!(LessonId::normalize("99999999999999999999"), None);
    }

    #[test]
    fn test_speaker_prefix() {
        assert_eq!(
            Speaker::strip_prefix("A: Hello"),
            Some((Speaker::A, " Hello"))
        );
        assert_eq!(Speaker::strip_prefix("B:Hi"), Some((Speaker::B, "Hi")));
        assert_eq!(Speaker::strip_prefix("C: Hi"), None);
        assert_eq!(Speaker::strip_prefix("Anna: Hi"), None);
    }

    #[test]
    fn test_dialogue_line_json_field_names() {
        let line = DialogueLine {
            speaker: Speaker::B,
            source: "Thanks.".into(),
            translation: "고마워요.".into(),
        };
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"speaker":"B","en":"Thanks.","ko":"고마워요."}"#);
    }
}
