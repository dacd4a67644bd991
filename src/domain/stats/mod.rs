pub mod model;

pub use model::{BatchReport, RunSummary, SentenceStats};

/// Consumer of dispatcher output
pub trait StatsReporter: Send {
    fn report_batch(&mut self, report: &BatchReport);

    fn report_summary(&mut self, summary: &RunSummary);
}

/// Number of Unicode code points in `text`
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn char_audio_ratio(char_count: usize, audio_len: usize) -> Option<f64> {
    if audio_len == 0 {
        None
    } else {
        Some(char_count as f64 / audio_len as f64)
    }
}
