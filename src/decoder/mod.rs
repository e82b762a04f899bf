mod pdf;

pub use pdf::PdfDocument;

use crate::error::Result;

/// One positioned run of text as emitted by the PDF content decoder.
///
/// Fragments arrive in content-stream order, which is generally
/// left-to-right, top-to-bottom, but not guaranteed monotonic. The baseline
/// Y-coordinate and font resource name are the only positioning signals the
/// downstream reconstruction heuristic consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub baseline_y: f64,
    pub font_id: String,
}

impl TextFragment {
    #[must_use]
    pub fn new(text: impl Into<String>, baseline_y: f64, font_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            baseline_y,
            font_id: font_id.into(),
        }
    }
}

/// Boundary to the low-level PDF decoder: a decoded document exposes its
/// page count and, per page, the ordered fragment list.
pub trait DocumentDecoder {
    fn page_count(&self) -> usize;

    /// Fragments of the page at `index` (0-based, document order).
    ///
    /// # Errors
    /// Returns an error if the page content cannot be decoded.
    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>>;
}
