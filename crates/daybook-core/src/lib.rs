pub mod assemble;
pub mod audio;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod store;
pub mod worksheet;

use assemble::ExtractionReport;
use config::DaybookConfig;
use error::DaybookError;
use extraction::PdfExtractor;
use store::LessonStore;
use tracing::info;

/// Result of a full extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub store: LessonStore,
    pub report: ExtractionReport,
    /// Whether a previous store existed and was copied to the backup path.
    pub backed_up: bool,
}

/// Main API entry point: extract every configured lesson from the source
/// PDF and persist the result.
///
/// The accumulated store is written to the checkpoint path after each batch,
/// so an interrupted run loses at most one batch. A missing source document
/// aborts before anything is written; lessons that cannot be found only show
/// up in the report.
pub fn run_extraction(
    config: &DaybookConfig,
    extractor: &dyn PdfExtractor,
) -> Result<ExtractionOutcome, DaybookError> {
    if !config.source_pdf.is_file() {
        return Err(DaybookError::MissingSource {
            path: config.source_pdf.clone(),
        });
    }

    info!(
        source = %config.source_pdf.display(),
        backend = extractor.backend_name(),
        "extracting text"
    );
    let pdf_bytes = std::fs::read(&config.source_pdf)?;
    let pages = extractor.extract_pages(&pdf_bytes)?;
    let text = extraction::join_pages(&pages, config.progress_interval);

    if let Some(raw_path) = &config.raw_text_path {
        std::fs::write(raw_path, &text)?;
        info!(path = %raw_path.display(), "raw text saved");
    }

    let ids = config.lesson_ids();
    let (store, report) = assemble::assemble(&text, &ids, config.batch_size, |store, batch| {
        store.save(&config.checkpoint_path)?;
        if let Some(last) = batch.last() {
            info!(
                through = %last,
                path = %config.checkpoint_path.display(),
                "checkpoint saved"
            );
        }
        Ok(())
    })?;

    let backed_up = store::backup(&config.store_path, &config.backup_path)?;
    if backed_up {
        info!(path = %config.backup_path.display(), "previous store backed up");
    }
    store.save(&config.store_path)?;
    info!(path = %config.store_path.display(), lessons = store.len(), "store written");

    Ok(ExtractionOutcome {
        store,
        report,
        backed_up,
    })
}
