pub mod pdftotext;

use crate::error::DaybookError;
use tracing::info;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// True when the page carries no extractable text at all.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, DaybookError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate pages into one linear text stream.
///
/// Each page with text contributes its lines followed by a blank separator
/// line; pages without text contribute nothing. A progress event is logged
/// every `progress_interval` pages.
pub fn join_pages(pages: &[PageContent], progress_interval: usize) -> String {
    let total = pages.len();
    let mut text = String::new();

    for (i, page) in pages.iter().enumerate() {
        if !page.is_blank() {
            for line in &page.lines {
                text.push_str(line);
                text.push('\n');
            }
            text.push('\n');
        }

        let done = i + 1;
        if progress_interval > 0 && done % progress_interval == 0 {
            info!(done, total, "pages processed");
        }
    }

    info!(pages = total, chars = text.chars().count(), "text extraction complete");
    text
}
