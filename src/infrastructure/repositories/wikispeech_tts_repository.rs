use super::tts_repository::TtsRepository;
use crate::domain::synthesis::{SynthesisError, SynthesisResponse};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// HTTP implementation of the synthesis repository
pub struct WikispeechTtsRepository {
    base_url: String,
    http_client: reqwest::Client,
}

impl WikispeechTtsRepository {
    /// `timeout` applies to each request as a whole; `None` waits indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }

    pub fn synthesis_url(&self, text: &str, language: &str) -> String {
        format!(
            "{}/?lang={}&input={}",
            self.base_url,
            urlencoding::encode(language),
            urlencoding::encode(text)
        )
    }
}

fn network_error(context: &str, err: reqwest::Error) -> SynthesisError {
    if err.is_timeout() {
        SynthesisError::Network(format!("{}: request timed out: {}", context, err))
    } else {
        SynthesisError::Network(format!("{}: {}", context, err))
    }
}

#[async_trait]
impl TtsRepository for WikispeechTtsRepository {
    async fn synthesize(&self, text: &str, language: &str) -> Result<SynthesisResponse, SynthesisError> {
        let url = self.synthesis_url(text, language);
        tracing::debug!(
            language = language,
            text_length = text.len(),
            "Calling synthesis endpoint"
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error("failed to get URL", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| network_error("failed to read response", e))?;

        if !status.is_success() {
            return Err(SynthesisError::Network(format!(
                "synthesis endpoint returned {}: {}",
                status, body
            )));
        }

        serde_json::from_str::<SynthesisResponse>(&body).map_err(|e| {
            SynthesisError::ResponseDecode(format!("failed to unmarshal json {} : {}", body, e))
        })
    }

    async fn fetch_audio(&self, audio_url: &Url) -> Result<Vec<u8>, SynthesisError> {
        let response = self
            .http_client
            .get(audio_url.clone())
            .send()
            .await
            .map_err(|e| network_error("failed to get audio", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SynthesisError::Network(format!(
                "audio endpoint returned {}: {}",
                status, error_text
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| network_error("failed to read audio", e))?;

        Ok(audio.to_vec())
    }
}
