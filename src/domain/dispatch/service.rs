use super::concurrency::ConcurrencyLevel;
use super::model::{DispatchSettings, HaltReason};
use crate::domain::corpus::{SentenceReceiver, SentenceRecord};
use crate::domain::stats::{BatchReport, RunSummary, StatsReporter};
use crate::domain::synthesis::{SynthesisError, SynthesisResult, SynthesisServiceApi};
use crate::error::AppResult;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;

/// Drives a run: batches incoming sentences by the current concurrency level,
/// synthesizes each batch concurrently and waits for the whole batch before
/// reading on.
pub struct BatchDispatcher {
    client: Arc<dyn SynthesisServiceApi>,
    settings: DispatchSettings,
}

impl BatchDispatcher {
    pub fn new(client: Arc<dyn SynthesisServiceApi>, settings: DispatchSettings) -> Self {
        Self { client, settings }
    }

    /// Consume `records` until the input ends, the sentence limit is hit or a
    /// batch contains a failure.
    ///
    /// A batch is dispatched only once it holds exactly as many records as
    /// the concurrency level in effect; records left in an unfilled batch when
    /// the run halts are not sent. A corpus error received from the reader is
    /// returned as is.
    pub async fn run(
        &self,
        mut records: SentenceReceiver,
        reporter: &mut dyn StatsReporter,
    ) -> AppResult<RunSummary> {
        let started = Instant::now();
        let mut level = ConcurrencyLevel::new(
            self.settings.max_concurrency,
            self.settings.ramp_up_interval,
        );
        let mut accepted = 0usize;
        let mut batches = 0usize;
        let mut audio_bytes = 0usize;
        let mut batch: Vec<SentenceRecord> = Vec::with_capacity(level.cap());

        let halt = loop {
            let record = match records.recv().await {
                Some(record) => record?,
                None => break HaltReason::Exhausted,
            };
            accepted += 1;
            batch.push(record);

            if batch.len() == level.current() {
                batches += 1;
                let report = self
                    .process_batch(batches, level.current(), std::mem::take(&mut batch), reporter)
                    .await;
                audio_bytes += report.audio_bytes();

                if report.has_failures() {
                    tracing::warn!(
                        sentences = accepted,
                        concurrency = level.current(),
                        "Batch failed, stopping run"
                    );
                    break aborted(&report);
                }
            }

            if level.record_accepted(accepted) {
                tracing::info!(
                    accepted,
                    concurrency = level.current(),
                    "Concurrency increased"
                );
            }

            if self.settings.max_sentences > 0 && accepted >= self.settings.max_sentences {
                tracing::info!(accepted, "Reached max no of sentences");
                break HaltReason::LimitReached;
            }
        };

        drop(records);

        if !batch.is_empty() {
            tracing::info!(
                unsent = batch.len(),
                concurrency = level.current(),
                "Batch not filled when run halted, not dispatched"
            );
        }

        let summary = RunSummary {
            sentences: accepted,
            batches,
            final_concurrency: level.current(),
            audio_bytes,
            halt,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            sentences = summary.sentences,
            batches = summary.batches,
            concurrency = summary.final_concurrency,
            halt = %summary.halt,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Run finished"
        );
        reporter.report_summary(&summary);

        Ok(summary)
    }

    async fn process_batch(
        &self,
        index: usize,
        concurrency: usize,
        batch: Vec<SentenceRecord>,
        reporter: &mut dyn StatsReporter,
    ) -> BatchReport {
        tracing::debug!(batch = index, concurrency, "Dispatching batch");

        let started = Instant::now();
        let results = self.dispatch_batch(batch).await;
        let report = BatchReport::new(index, concurrency, results, started.elapsed());

        reporter.report_batch(&report);
        report
    }

    /// Start one task per record and wait for all of them.
    ///
    /// Results keep their record association through the handle order; a task
    /// that panics still yields a failed result for its record.
    async fn dispatch_batch(&self, batch: Vec<SentenceRecord>) -> Vec<SynthesisResult> {
        let handles: Vec<_> = batch
            .iter()
            .cloned()
            .map(|record| {
                let client = Arc::clone(&self.client);
                tokio::spawn(async move { client.synthesize(record).await })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(batch.iter())
            .map(|(joined, record)| match joined {
                Ok(result) => result,
                Err(e) => SynthesisResult::failure(record, SynthesisError::TaskFailed(e.to_string())),
            })
            .collect()
    }
}

fn aborted(report: &BatchReport) -> HaltReason {
    HaltReason::Aborted {
        failed: report.failures().map(|s| s.sequence).collect(),
    }
}
