use super::error::SynthesisError;
use super::model::SynthesisResult;
use crate::domain::corpus::SentenceRecord;
use crate::infrastructure::repositories::TtsRepository;
use crate::infrastructure::storage::AudioStore;
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;

pub struct SynthesisService {
    tts_repo: Arc<dyn TtsRepository>,
    audio_store: Option<Arc<AudioStore>>,
}

impl SynthesisService {
    /// `audio_store` is `None` when audio should not be kept on disk
    pub fn new(tts_repo: Arc<dyn TtsRepository>, audio_store: Option<Arc<AudioStore>>) -> Self {
        Self {
            tts_repo,
            audio_store,
        }
    }
}

#[async_trait]
pub trait SynthesisServiceApi: Send + Sync {
    /// Synthesize one sentence and fetch its audio
    ///
    /// This operation:
    /// - Requests synthesis for the sentence text and language
    /// - Downloads the audio the endpoint points at
    /// - Optionally stores the audio bytes
    ///
    /// Never fails as a call: any error is carried inside the returned result.
    async fn synthesize(&self, record: SentenceRecord) -> SynthesisResult;
}

#[async_trait]
impl SynthesisServiceApi for SynthesisService {
    async fn synthesize(&self, record: SentenceRecord) -> SynthesisResult {
        match self.synthesize_audio(&record).await {
            Ok(audio_len) => {
                tracing::debug!(sequence = record.sequence, audio_len, "Sentence synthesized");
                SynthesisResult::success(&record, audio_len)
            }
            Err(e) => {
                tracing::warn!(
                    sequence = record.sequence,
                    error = %e,
                    "Sentence synthesis failed"
                );
                SynthesisResult::failure(&record, e)
            }
        }
    }
}

impl SynthesisService {
    async fn synthesize_audio(&self, record: &SentenceRecord) -> Result<usize, SynthesisError> {
        // 1. Ask the endpoint to synthesize the sentence
        let response = self
            .tts_repo
            .synthesize(&record.text, &record.language)
            .await?;

        // 2. Resolve where the audio lives
        let audio_url = Url::parse(&response.audio).map_err(|e| {
            SynthesisError::AudioUrlParse(format!("{:?}: {}", response.audio, e))
        })?;

        // 3. Fetch the audio
        let audio = self.tts_repo.fetch_audio(&audio_url).await?;

        // 4. Keep it if requested
        if let Some(store) = &self.audio_store {
            let file_name = audio_file_name(&audio_url)?;
            store.save(&file_name, &audio).await?;
        }

        Ok(audio.len())
    }
}

/// Final path segment of the audio URL, used as the local file name
pub fn audio_file_name(url: &Url) -> Result<String, SynthesisError> {
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| SynthesisError::AudioUrlParse(format!("no file name in {}", url)))
}
