/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input file does not exist: {0}")]
    InputNotFound(String),

    #[error("Unknown file type: {0}")]
    InputFormatUnrecognized(String),

    #[error("Corpus schema violation: {0}")]
    CorpusSchemaViolation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    ResponseDecode(String),

    #[error("Failed to parse audio url: {0}")]
    AudioUrlParse(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Network(_) | Self::ResponseDecode(_) | Self::AudioUrlParse(_) => 2,
            Self::InputNotFound(_)
            | Self::InputFormatUnrecognized(_)
            | Self::CorpusSchemaViolation(_)
            | Self::FileSystem(_)
            | Self::Config(_)
            | Self::Internal(_) => 1,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
