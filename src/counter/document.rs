use log::debug;

use crate::decoder::DocumentDecoder;
use crate::error::Result;
use crate::reconstruct::reconstruct;

use super::Tokenizer;

/// Drives page-text reconstruction across all pages of one decoded document
/// and sums the per-page word counts.
///
/// Known limitation: pages are reconstructed independently, so a word split
/// across a page boundary is counted as two words. No cross-page text
/// merging is attempted.
pub struct DocumentWordCounter<T: Tokenizer> {
    tokenizer: T,
}

impl<T: Tokenizer> DocumentWordCounter<T> {
    #[must_use]
    pub const fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Total word count of the document; 0 for a zero-page document.
    ///
    /// # Errors
    /// Propagates the decoder's document-level error unchanged. No partial
    /// count is reported for a document whose decoding fails.
    pub fn count_words<D: DocumentDecoder>(&self, document: &D) -> Result<usize> {
        let mut total = 0;
        for index in 0..document.page_count() {
            let fragments = document.page_fragments(index)?;
            let page_text = reconstruct(&fragments);
            let page_words = self.tokenizer.count_words(&page_text);
            debug!("page {}: {page_words} word(s)", index + 1);
            total += page_words;
        }
        Ok(total)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
