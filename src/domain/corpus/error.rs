use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("input file does not exist: {0}")]
    NotFound(String),
    #[error("unknown file type: {0}")]
    UnrecognizedFormat(String),
    #[error("unknown element: {0}")]
    SchemaViolation(String),
    #[error("malformed corpus: {0}")]
    Malformed(String),
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CorpusError> for AppError {
    fn from(err: CorpusError) -> Self {
        match err {
            CorpusError::NotFound(path) => AppError::InputNotFound(path),
            CorpusError::UnrecognizedFormat(path) => AppError::InputFormatUnrecognized(path),
            CorpusError::SchemaViolation(element) => {
                AppError::CorpusSchemaViolation(format!("unknown element <{}>", element))
            }
            CorpusError::Malformed(msg) => AppError::CorpusSchemaViolation(msg),
            CorpusError::Io(e) => AppError::FileSystem(e.to_string()),
        }
    }
}
