use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DaybookError {
    #[error("source document not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("lesson store is missing or empty: {}", path.display())]
    EmptyStore { path: PathBuf },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("'{0}' does not name a lesson in the store. Use a number 1-130 or a label like 'DAY 005'")]
    UnknownLesson(String),

    #[error("invalid edit: {0}")]
    InvalidEdit(String),

    #[error("invalid configuration in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}
