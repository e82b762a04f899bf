use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, trace, warn};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Encoding, Object, ObjectId};

use crate::error::{Result, WordCountGuardError};

use super::{DocumentDecoder, TextFragment};

/// Per-page map from font resource name to its resolved character encoding.
type EncodingMap<'a> = BTreeMap<Vec<u8>, Encoding<'a>>;

/// A decoded PDF document backed by `lopdf`.
///
/// Emits one [`TextFragment`] per show-text operation, tracking the text
/// line matrix and the selected font resource across the content stream.
/// Vertical position is kept in text space (the line matrix translation);
/// the heuristic downstream only needs baseline equality, so the CTM is
/// deliberately not applied.
#[derive(Debug)]
pub struct PdfDocument {
    name: String,
    doc: Document,
    page_ids: Vec<ObjectId>,
}

impl PdfDocument {
    /// Load a document from disk.
    ///
    /// # Errors
    /// Returns [`WordCountGuardError::DocumentDecode`] if the file is not a
    /// readable PDF.
    pub fn open(path: &Path) -> Result<Self> {
        let name = display_name(path);
        let doc = Document::load(path)
            .map_err(|source| WordCountGuardError::DocumentDecode {
                name: name.clone(),
                source,
            })?;
        Ok(Self::from_document(name, doc))
    }

    /// Load a document from an in-memory buffer.
    ///
    /// # Errors
    /// Returns [`WordCountGuardError::DocumentDecode`] if the buffer is not
    /// a valid PDF.
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        let name = name.into();
        let doc = Document::load_mem(data)
            .map_err(|source| WordCountGuardError::DocumentDecode {
                name: name.clone(),
                source,
            })?;
        Ok(Self::from_document(name, doc))
    }

    fn from_document(name: String, doc: Document) -> Self {
        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        debug!("loaded '{name}' with {} page(s)", page_ids.len());
        Self {
            name,
            doc,
            page_ids,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn page_encodings(
        &self,
        page_id: ObjectId,
    ) -> std::result::Result<EncodingMap<'_>, lopdf::Error> {
        let fonts = self.doc.get_page_fonts(page_id)?;
        fonts
            .into_iter()
            .map(|(font_key, font)| {
                font.get_font_encoding(&self.doc)
                    .map(|encoding| (font_key, encoding))
            })
            .collect()
    }

    fn fragments_for_page(
        &self,
        page_id: ObjectId,
    ) -> std::result::Result<Vec<TextFragment>, lopdf::Error> {
        let data = self.doc.get_page_content(page_id)?;
        let content = Content::decode(&data)?;
        let encodings = self.page_encodings(page_id)?;

        let mut state = TextState::default();
        let mut fragments = Vec::new();
        for operation in &content.operations {
            state.apply(operation, &encodings, &mut fragments)?;
        }
        debug!(
            "page {:?}: {} operation(s), {} fragment(s)",
            page_id,
            content.operations.len(),
            fragments.len()
        );
        Ok(fragments)
    }
}

impl DocumentDecoder for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>> {
        let page_id = self.page_ids.get(index).copied().ok_or_else(|| {
            WordCountGuardError::DocumentDecode {
                name: self.name.clone(),
                source: lopdf::Error::PageNumberNotFound(index as u32),
            }
        })?;
        self.fragments_for_page(page_id)
            .map_err(|source| WordCountGuardError::DocumentDecode {
                name: self.name.clone(),
                source,
            })
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_num(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

/// Text state tracked across one page's content stream.
///
/// `baseline_y` follows the text line matrix translation: absolute for `Tm`,
/// relative for `Td`/`TD`, and leading-advanced for `T*`, `'` and `"`.
/// `font_key` is the raw resource name selected by the last `Tf`; the
/// matching [`Encoding`] is resolved from the page's map at emit time.
#[derive(Debug, Default)]
struct TextState {
    font_key: Vec<u8>,
    baseline_y: f64,
    leading: f64,
}

impl TextState {
    fn apply(
        &mut self,
        operation: &Operation,
        encodings: &EncodingMap,
        fragments: &mut Vec<TextFragment>,
    ) -> std::result::Result<(), lopdf::Error> {
        let operands = &operation.operands;
        match operation.operator.as_ref() {
            "BT" | "ET" => {
                self.baseline_y = 0.0;
            }
            "Tf" => {
                if let Some(font_key) = operands.first().and_then(|o| o.as_name().ok()) {
                    self.font_key = font_key.to_vec();
                    trace!("font selected: {}", String::from_utf8_lossy(font_key));
                }
            }
            "TL" => {
                if let Some(leading) = operands.first().and_then(as_num) {
                    self.leading = leading;
                }
            }
            "Tm" => {
                if let Some(ty) = operands.get(5).and_then(as_num) {
                    self.baseline_y = ty;
                }
            }
            "Td" => {
                if let Some(ty) = operands.get(1).and_then(as_num) {
                    self.baseline_y += ty;
                }
            }
            "TD" => {
                if let Some(ty) = operands.get(1).and_then(as_num) {
                    self.leading = -ty;
                    self.baseline_y += ty;
                }
            }
            "T*" => {
                self.baseline_y -= self.leading;
            }
            "Tj" => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    self.emit(bytes, encodings, fragments)?;
                }
            }
            "'" => {
                self.baseline_y -= self.leading;
                if let Some(Object::String(bytes, _)) = operands.first() {
                    self.emit(bytes, encodings, fragments)?;
                }
            }
            "\"" => {
                self.baseline_y -= self.leading;
                if let Some(Object::String(bytes, _)) = operands.get(2) {
                    self.emit(bytes, encodings, fragments)?;
                }
            }
            "TJ" => {
                // One fragment per TJ: the array's strings belong to one
                // show-text run, the interleaved numbers are kerning.
                if let Some(Object::Array(elements)) = operands.first() {
                    let mut bytes = Vec::new();
                    for element in elements {
                        if let Object::String(part, _) = element {
                            bytes.extend_from_slice(part);
                        }
                    }
                    self.emit(&bytes, encodings, fragments)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn emit(
        &self,
        bytes: &[u8],
        encodings: &EncodingMap,
        fragments: &mut Vec<TextFragment>,
    ) -> std::result::Result<(), lopdf::Error> {
        let Some(encoding) = encodings.get(&self.font_key) else {
            warn!(
                "show-text run without a resolvable font encoding, skipped ({} byte(s))",
                bytes.len()
            );
            return Ok(());
        };
        let text = Document::decode_text(encoding, bytes)?;
        trace!("fragment at y={}: {text:?}", self.baseline_y);
        fragments.push(TextFragment {
            text,
            baseline_y: self.baseline_y,
            font_id: String::from_utf8_lossy(&self.font_key).into_owned(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "pdf_tests.rs"]
mod tests;
