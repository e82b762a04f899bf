/// Boundary to word tokenization: anything that can count words in a plain
/// text string.
pub trait Tokenizer {
    fn count_words(&self, text: &str) -> usize;
}

/// Splits on Unicode whitespace and counts tokens containing at least one
/// alphanumeric character, so punctuation runs left over from spacing
/// artifacts are not counted as words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn count_words(&self, text: &str) -> usize {
        text.split_whitespace()
            .filter(|token| token.chars().any(char::is_alphanumeric))
            .count()
    }
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;
