use crate::domain::synthesis::{SynthesisError, SynthesisResponse};
use async_trait::async_trait;
use reqwest::Url;

/// Repository for the remote synthesis endpoint.
/// Abstracts the HTTP transport so the synthesis flow can run against fakes.
///
/// Implementations are responsible for:
/// - Building the request URL (language and percent-encoded text)
/// - Treating non-success statuses as network errors
/// - Decoding the JSON response body
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Request synthesis of `text` in `language`
    ///
    /// Returns the decoded response, which points at the generated audio
    ///
    /// # Errors
    /// `Network` if the request fails or the endpoint answers with an error
    /// status, `ResponseDecode` if the body is not the expected JSON
    async fn synthesize(&self, text: &str, language: &str) -> Result<SynthesisResponse, SynthesisError>;

    /// Download the raw audio bytes at `audio_url`. The content type is not checked.
    async fn fetch_audio(&self, audio_url: &Url) -> Result<Vec<u8>, SynthesisError>;
}
