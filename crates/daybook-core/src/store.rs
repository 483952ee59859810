use crate::error::DaybookError;
use crate::model::{LessonId, LessonRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// All lesson records keyed by their label ("DAY 005").
///
/// Serialized as a plain JSON object. Keys are kept sorted, which for
/// zero-padded labels is lesson order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonStore {
    lessons: BTreeMap<String, LessonRecord>,
}

impl LessonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: LessonId, record: LessonRecord) {
        self.lessons.insert(id.label(), record);
    }

    pub fn get(&self, key: &str) -> Option<&LessonRecord> {
        self.lessons.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut LessonRecord> {
        self.lessons.get_mut(key)
    }

    /// Resolve user input ("5", "day 5", "DAY 005") to a key present in the store.
    pub fn resolve(&self, query: &str) -> Option<String> {
        LessonId::normalize(query)
            .map(LessonId::label)
            .filter(|label| self.lessons.contains_key(label))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.lessons.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LessonRecord)> {
        self.lessons.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn dialogue_count(&self) -> usize {
        self.lessons.values().map(|r| r.dialogue.len()).sum()
    }

    pub fn pattern_count(&self) -> usize {
        self.lessons.values().map(|r| r.patterns.len()).sum()
    }

    pub fn practice_count(&self) -> usize {
        self.lessons.values().map(|r| r.practice.len()).sum()
    }

    /// Load a persisted store. A missing file or an empty mapping is an
    /// `EmptyStore` error: consumers have nothing to show.
    pub fn load(path: &Path) -> Result<LessonStore, DaybookError> {
        if !path.is_file() {
            return Err(DaybookError::EmptyStore {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(DaybookError::EmptyStore {
                path: path.to_path_buf(),
            });
        }

        let store: LessonStore = serde_json::from_str(&content)?;
        if store.is_empty() {
            return Err(DaybookError::EmptyStore {
                path: path.to_path_buf(),
            });
        }
        Ok(store)
    }

    /// Write the whole store as pretty-printed UTF-8 JSON (non-ASCII kept
    /// literal). The file is replaced atomically, so an interrupted write
    /// leaves the previous content in place.
    pub fn save(&self, path: &Path) -> Result<(), DaybookError> {
        let json = serde_json::to_string_pretty(self)?;

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Copy an existing store to `backup` byte for byte before it gets
/// overwritten. Returns `false` when there is nothing to back up.
pub fn backup(store_path: &Path, backup_path: &Path) -> Result<bool, DaybookError> {
    if !store_path.is_file() {
        return Ok(false);
    }
    fs::copy(store_path, backup_path)?;
    Ok(true)
}
