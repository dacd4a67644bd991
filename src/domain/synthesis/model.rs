use super::error::SynthesisError;
use crate::domain::corpus::SentenceRecord;

/// Outcome of synthesizing one sentence
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    pub sequence: usize,
    pub text: String,
    pub audio_len: usize,
    pub error: Option<SynthesisError>,
}

impl SynthesisResult {
    pub fn success(record: &SentenceRecord, audio_len: usize) -> Self {
        Self {
            sequence: record.sequence,
            text: record.text.clone(),
            audio_len,
            error: None,
        }
    }

    pub fn failure(record: &SentenceRecord, error: SynthesisError) -> Self {
        Self {
            sequence: record.sequence,
            text: record.text.clone(),
            audio_len: 0,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
