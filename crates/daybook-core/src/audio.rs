use crate::model::LessonId;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the audio track of a lesson: a file in `dir` named
/// "<padded id>.<anything>.<extension>", e.g. "005. Asking the way.mp3".
///
/// Entries are checked in file-name order; a missing or unreadable
/// directory simply has no audio.
pub fn find_audio(dir: &Path, id: LessonId, extension: &str) -> Option<PathBuf> {
    let prefix = format!("{}.", id.padded());
    let suffix = format!(".{}", extension.trim_start_matches('.'));

    let mut names: Vec<String> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    names
        .into_iter()
        .find(|name| name.starts_with(&prefix) && name.ends_with(&suffix))
        .map(|name| dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_finds_padded_prefix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "004. Shopping.mp3");
        touch(dir.path(), "005. Asking the way.mp3");
        touch(dir.path(), "015. Weather.mp3");

        let id = LessonId::new(5).unwrap();
        let found = find_audio(dir.path(), id, "mp3").unwrap();
        assert_eq!(found, dir.path().join("005. Asking the way.mp3"));
    }

    #[test]
    fn test_requires_period_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "0050.mp3");
        touch(dir.path(), "005. notes.txt");
        touch(dir.path(), "005_intro.mp3");

        let id = LessonId::new(5).unwrap();
        assert_eq!(find_audio(dir.path(), id, "mp3"), None);
    }

    #[test]
    fn test_first_match_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "012.b.mp3");
        touch(dir.path(), "012.a.mp3");

        let id = LessonId::new(12).unwrap();
        let found = find_audio(dir.path(), id, ".mp3").unwrap();
        assert_eq!(found, dir.path().join("012.a.mp3"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let id = LessonId::new(1).unwrap();
        assert_eq!(find_audio(&dir.path().join("audio"), id, "mp3"), None);
    }
}
