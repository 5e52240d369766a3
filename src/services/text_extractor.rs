use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;

use crate::{
    errors::{AppError, AppResult},
    models::domain::ExtractedText,
};

/// Source of the plain text a quiz is generated from.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path, max_chars: usize) -> AppResult<ExtractedText>;
}

/// Reads PDFs with `lopdf`, one page at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path, max_chars: usize) -> AppResult<ExtractedText> {
        log::info!("Extracting text from PDF: {}", path.display());

        // lopdf panics on some malformed documents
        let result = panic::catch_unwind(AssertUnwindSafe(|| extract_with_lopdf(path, max_chars)));

        match result {
            Ok(Ok(text)) => {
                log::info!(
                    "Extracted {} characters from {} page(s)",
                    text.char_count(),
                    text.pages_read()
                );
                Ok(text)
            }
            Ok(Err(e)) => {
                log::error!("{}", e);
                Err(e)
            }
            Err(_) => {
                let err = AppError::Extraction("PDF parser panicked (malformed document)".to_string());
                log::error!("{}", err);
                Err(err)
            }
        }
    }
}

fn extract_with_lopdf(path: &Path, max_chars: usize) -> AppResult<ExtractedText> {
    let document = Document::load(path)?;

    // get_pages is keyed by page number, so iteration is in page order
    let pages = document.get_pages().into_keys().map(|page_number| {
        document.extract_text(&[page_number]).map_err(|e| {
            log::warn!("Skipping page {}: {}", page_number, e);
            e
        })
    });

    Ok(accumulate_pages(pages, max_chars))
}

/// Appends each page's text plus a newline until the running length reaches
/// `max_chars`. The check runs after a page is appended, so the result can
/// exceed the budget by up to one page. Pages that fail or yield only
/// whitespace add nothing.
pub fn accumulate_pages<I, E>(pages: I, max_chars: usize) -> ExtractedText
where
    I: IntoIterator<Item = Result<String, E>>,
{
    let mut text = String::new();
    let mut char_count = 0;
    let mut pages_read = 0;
    let mut truncated = false;

    let mut pages = pages.into_iter().peekable();
    while let Some(page) = pages.next() {
        pages_read += 1;

        if let Ok(page_text) = page {
            if !page_text.trim().is_empty() {
                char_count += page_text.chars().count() + 1;
                text.push_str(&page_text);
                text.push('\n');
            }
        }

        if char_count >= max_chars {
            if pages.peek().is_some() {
                log::warn!("Reached max text length of {} characters", max_chars);
                truncated = true;
            }
            break;
        }

        log::debug!("Processed page {}", pages_read);
    }

    ExtractedText::new(text, pages_read, truncated)
}
