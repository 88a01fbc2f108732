use crate::error::{AnalyzerError, Result};
use std::path::Path;
use std::sync::Arc;

/// Splits a PDF into per-page text, first page first.
///
/// A page with no recoverable text (scanned images, vector-only pages) yields
/// an empty string. Any failure aborts the whole document.
pub trait PageReader: Send + Sync {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

/// Page reader backed by `pdf-extract`, one plain-text pass per page.
pub struct PdfExtractReader;

impl PageReader for PdfExtractReader {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let doc = pdf_extract::Document::load_mem(bytes)
            .map_err(|e| AnalyzerError::UnreadableDocument(e.to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());
        for page_num in page_numbers {
            let mut text = String::new();
            {
                let mut output = pdf_extract::PlainTextOutput::new(&mut text);
                pdf_extract::output_doc_page(&doc, &mut output, page_num)?;
            }
            pages.push(text);
        }

        Ok(pages)
    }
}

#[derive(Clone)]
pub struct TextExtractor {
    reader: Arc<dyn PageReader>,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::with_reader(Arc::new(PdfExtractReader))
    }

    pub fn with_reader(reader: Arc<dyn PageReader>) -> Self {
        Self { reader }
    }

    /// Concatenates the text of every page in order. No separator is inserted
    /// between pages.
    pub fn extract(&self, bytes: &[u8]) -> Result<String> {
        let pages = self.reader.read_pages(bytes)?;

        let mut text = String::new();
        for page in &pages {
            text.push_str(page);
        }

        log::info!(
            "Extracted {} characters from {} pages",
            text.chars().count(),
            pages.len()
        );
        Ok(text)
    }

    pub fn extract_file(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| {
            AnalyzerError::UnreadableDocument(format!("{}: {}", path.display(), e))
        })?;
        self.extract(&bytes)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
