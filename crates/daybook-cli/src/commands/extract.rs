use daybook_core::config::DaybookConfig;
use daybook_core::error::DaybookError;
use daybook_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    mut config: DaybookConfig,
    pdf: Option<PathBuf>,
    layout: bool,
    output_format: &str,
) -> Result<(), DaybookError> {
    if let Some(pdf) = pdf {
        config.source_pdf = pdf;
    }
    config.layout |= layout;

    if !config.source_pdf.is_file() {
        return Err(DaybookError::MissingSource {
            path: config.source_pdf,
        });
    }
    if !PdftotextExtractor::is_available() {
        return Err(DaybookError::PdftotextNotFound);
    }

    let extractor = PdftotextExtractor::with_layout(config.layout);
    let outcome = daybook_core::run_extraction(&config, &extractor)?;

    match output_format {
        "json" => output::json::print(&outcome.report)?,
        _ => {
            output::table::print_report(&outcome.report);
            if outcome.backed_up {
                eprintln!("Previous store saved to {}", config.backup_path.display());
            }
            eprintln!(
                "{} lesson(s) written to {}",
                outcome.store.len(),
                config.store_path.display()
            );
        }
    }

    Ok(())
}
