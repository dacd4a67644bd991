use crate::domain::dispatch::HaltReason;
use crate::domain::synthesis::{SynthesisError, SynthesisResult};
use std::time::Duration;

/// Metrics for one synthesized sentence
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceStats {
    pub sequence: usize,
    pub text: String,
    pub audio_len: usize,
    pub char_count: usize,
    /// Code points per audio byte; `None` when no audio came back
    pub char_audio_ratio: Option<f64>,
    pub error: Option<SynthesisError>,
}

impl From<SynthesisResult> for SentenceStats {
    fn from(result: SynthesisResult) -> Self {
        let char_count = super::char_count(&result.text);
        Self {
            sequence: result.sequence,
            char_audio_ratio: super::char_audio_ratio(char_count, result.audio_len),
            char_count,
            audio_len: result.audio_len,
            text: result.text,
            error: result.error,
        }
    }
}

/// Metrics for one dispatched batch
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// 1-based batch counter
    pub index: usize,
    /// Concurrency level in effect, equal to the number of sentences in the batch
    pub concurrency: usize,
    /// Sorted by sequence number
    pub sentences: Vec<SentenceStats>,
    pub duration: Duration,
}

impl BatchReport {
    pub fn new(
        index: usize,
        concurrency: usize,
        results: Vec<SynthesisResult>,
        duration: Duration,
    ) -> Self {
        let mut sentences: Vec<SentenceStats> = results.into_iter().map(SentenceStats::from).collect();
        sentences.sort_by_key(|s| s.sequence);

        Self {
            index,
            concurrency,
            sentences,
            duration,
        }
    }

    /// Wall-clock batch duration divided by the concurrency level: an
    /// approximate per-call latency under that load.
    pub fn per_call_latency(&self) -> Duration {
        match u32::try_from(self.concurrency) {
            Ok(n) if n > 0 => self.duration / n,
            _ => self.duration,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &SentenceStats> {
        self.sentences.iter().filter(|s| s.error.is_some())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn audio_bytes(&self) -> usize {
        self.sentences.iter().map(|s| s.audio_len).sum()
    }
}

/// Totals for a whole run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub sentences: usize,
    pub batches: usize,
    pub final_concurrency: usize,
    pub audio_bytes: usize,
    pub halt: HaltReason,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn is_aborted(&self) -> bool {
        matches!(self.halt, HaltReason::Aborted { .. })
    }
}
