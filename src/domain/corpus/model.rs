/// One unit of input text, numbered in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    pub language: String,
    pub text: String,
    pub sequence: usize,
}

impl SentenceRecord {
    pub fn new(language: impl Into<String>, text: impl Into<String>, sequence: usize) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
            sequence,
        }
    }
}
