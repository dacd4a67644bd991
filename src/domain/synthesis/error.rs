use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthesisError {
    #[error("network error: {0}")]
    Network(String),
    #[error("response decode error: {0}")]
    ResponseDecode(String),
    #[error("audio url parse error: {0}")]
    AudioUrlParse(String),
    #[error("file system error: {0}")]
    FileSystem(String),
    #[error("synthesis task failed: {0}")]
    TaskFailed(String),
}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::Network(msg) => AppError::Network(msg),
            SynthesisError::ResponseDecode(msg) => AppError::ResponseDecode(msg),
            SynthesisError::AudioUrlParse(msg) => AppError::AudioUrlParse(msg),
            SynthesisError::FileSystem(msg) => AppError::FileSystem(msg),
            SynthesisError::TaskFailed(msg) => AppError::Internal(msg),
        }
    }
}
