mod document;
mod words;

pub use document::DocumentWordCounter;
pub use words::{Tokenizer, WhitespaceTokenizer};
