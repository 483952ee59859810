use crate::error::DaybookError;
use crate::model::LessonId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "daybook.toml";

/// Smallest worksheet page that still fits a heading, a line and a footer.
const MIN_LINES_PER_PAGE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaybookConfig {
    /// Source textbook PDF.
    pub source_pdf: PathBuf,
    /// Authoritative lesson store.
    pub store_path: PathBuf,
    /// Copy of the previous store, written before it is replaced.
    pub backup_path: PathBuf,
    /// Store written after every batch of an extraction run.
    pub checkpoint_path: PathBuf,
    /// Dump of the full extracted text, for tuning the heuristics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text_path: Option<PathBuf>,
    pub audio_dir: PathBuf,
    pub audio_extension: String,
    pub first_lesson: u16,
    pub last_lesson: u16,
    pub batch_size: usize,
    /// Pages between progress events during text extraction.
    pub progress_interval: usize,
    /// Run pdftotext in `-layout` mode.
    pub layout: bool,
    pub lines_per_page: usize,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            source_pdf: PathBuf::from("textbook.pdf"),
            store_path: PathBuf::from("lessons.json"),
            backup_path: PathBuf::from("lessons.backup.json"),
            checkpoint_path: PathBuf::from("lessons.partial.json"),
            raw_text_path: None,
            audio_dir: PathBuf::from("audio"),
            audio_extension: "mp3".to_string(),
            first_lesson: LessonId::FIRST,
            last_lesson: LessonId::LAST,
            batch_size: 10,
            progress_interval: 50,
            layout: false,
            lines_per_page: 48,
        }
    }
}

impl DaybookConfig {
    /// Load configuration: an explicit file must exist; otherwise
    /// `daybook.toml` is used when present, else the defaults.
    pub fn load(path: Option<&Path>) -> Result<DaybookConfig, DaybookError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<DaybookConfig, DaybookError> {
        let content = fs::read_to_string(path).map_err(|e| DaybookError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: DaybookConfig = toml::from_str(&content).map_err(|e| DaybookError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate().map_err(|reason| DaybookError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if LessonId::new(self.first_lesson).is_none() || LessonId::new(self.last_lesson).is_none() {
            return Err(format!(
                "lesson range {}..={} must lie within {}..={}",
                self.first_lesson,
                self.last_lesson,
                LessonId::FIRST,
                LessonId::LAST
            ));
        }
        if self.first_lesson > self.last_lesson {
            return Err(format!(
                "first_lesson ({}) is greater than last_lesson ({})",
                self.first_lesson, self.last_lesson
            ));
        }
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".to_string());
        }
        if self.lines_per_page < MIN_LINES_PER_PAGE {
            return Err(format!(
                "lines_per_page must be at least {MIN_LINES_PER_PAGE}"
            ));
        }
        Ok(())
    }

    /// Lesson ids covered by an extraction run, ascending.
    pub fn lesson_ids(&self) -> Vec<LessonId> {
        (self.first_lesson..=self.last_lesson)
            .filter_map(LessonId::new)
            .collect()
    }

    pub fn to_toml(&self) -> Result<String, DaybookError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
