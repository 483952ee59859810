use crate::error::DaybookError;
use crate::model::{DialogueLine, LessonRecord, Speaker};
use crate::store::LessonStore;

/// One change to a lesson record. The caller persists the whole store after
/// applying it (last write wins; there is no locking between editors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Title(String),
    /// Append an empty line for the speaker to fill in later.
    AddLine,
    SetLine {
        index: usize,
        speaker: Speaker,
        source: String,
        translation: String,
    },
    /// Drop dialogue lines whose sentence and translation are both blank.
    PruneBlankLines,
    /// Replace patterns with the non-blank lines of the text.
    Patterns(String),
    /// Replace practice items with the non-blank lines of the text.
    Practice(String),
}

/// Apply `edit` to the lesson `query` resolves to. Returns the store key and
/// a one-line description of what changed.
pub fn apply_edit(
    store: &mut LessonStore,
    query: &str,
    edit: Edit,
) -> Result<(String, String), DaybookError> {
    let key = store
        .resolve(query)
        .ok_or_else(|| DaybookError::UnknownLesson(query.to_string()))?;
    let record = store
        .get_mut(&key)
        .ok_or_else(|| DaybookError::UnknownLesson(query.to_string()))?;
    let summary = apply(record, edit)?;
    Ok((key, summary))
}

pub fn apply(record: &mut LessonRecord, edit: Edit) -> Result<String, DaybookError> {
    match edit {
        Edit::Title(title) => {
            record.title = title.trim().to_string();
            Ok(format!("title set to '{}'", record.title))
        }
        Edit::AddLine => {
            record.dialogue.push(DialogueLine::default());
            Ok(format!("blank line {} added", record.dialogue.len()))
        }
        Edit::SetLine {
            index,
            speaker,
            source,
            translation,
        } => {
            let count = record.dialogue.len();
            let line = record.dialogue.get_mut(index).ok_or_else(|| {
                DaybookError::InvalidEdit(format!(
                    "dialogue line {} does not exist ({} line(s))",
                    index + 1,
                    count
                ))
            })?;
            *line = DialogueLine {
                speaker,
                source: source.trim().to_string(),
                translation: translation.trim().to_string(),
            };
            Ok(format!("dialogue line {} updated", index + 1))
        }
        Edit::PruneBlankLines => {
            let before = record.dialogue.len();
            record.dialogue.retain(|l| !l.is_blank());
            Ok(format!(
                "{} blank line(s) removed",
                before - record.dialogue.len()
            ))
        }
        Edit::Patterns(text) => {
            record.patterns = non_blank_lines(&text);
            Ok(format!("{} pattern(s) saved", record.patterns.len()))
        }
        Edit::Practice(text) => {
            record.practice = non_blank_lines(&text);
            Ok(format!("{} practice item(s) saved", record.practice.len()))
        }
    }
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
