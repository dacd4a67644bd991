use crate::domain::dispatch::HaltReason;
use crate::domain::stats::{BatchReport, RunSummary, StatsReporter};
use crate::infrastructure::config::Config;
use std::io::{self, Write};
use std::path::Path;

/// Plain-text report of every batch, in a grep-friendly line format
pub struct ConsoleReporter<W> {
    out: W,
    audio_dir: Option<String>,
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// `audio_dir` is mentioned in the summary when audio is being saved
    pub fn new(out: W, audio_dir: Option<String>) -> Self {
        Self { out, audio_dir }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_settings(&mut self, config: &Config, input: &Path) {
        if let Err(e) = write_settings(&mut self.out, config, input) {
            tracing::warn!(error = %e, "Failed to write settings");
        }
    }

    fn write_batch(&mut self, report: &BatchReport) -> io::Result<()> {
        for s in &report.sentences {
            writeln!(self.out, "SENT: {}\t{}\nAUDIO LEN: {}", s.sequence, s.text, s.audio_len)?;
            let ratio = s
                .char_audio_ratio
                .map(|r| format!("{:.6}", r))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                self.out,
                "LEN DATA:\t#{}\t{}\t{}\t{}",
                s.sequence, s.char_count, s.audio_len, ratio
            )?;
            if let Some(error) = &s.error {
                writeln!(self.out, "Failed call : {}", error)?;
            }
        }
        writeln!(self.out, "SYNTH DUR: {:.6}s", report.per_call_latency().as_secs_f64())?;
        writeln!(self.out, "------------")?;
        self.out.flush()
    }

    fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        match &summary.halt {
            HaltReason::LimitReached => {
                writeln!(self.out, "Reached max no of sentences: {}", summary.sentences)?;
            }
            HaltReason::Aborted { .. } => {
                writeln!(self.out, "Run stopped: {}", summary.halt)?;
                writeln!(self.out, "Number of sentences: {}", summary.sentences)?;
                writeln!(self.out, "Concurrent sentences: {}", summary.final_concurrency)?;
            }
            HaltReason::Exhausted => {}
        }
        writeln!(
            self.out,
            "SENTENCES: {}\tBATCHES: {}\tAUDIO BYTES: {}",
            summary.sentences, summary.batches, summary.audio_bytes
        )?;
        writeln!(self.out, "MAIN LOOP TOOK {:?}", summary.elapsed)?;
        if let Some(dir) = &self.audio_dir {
            writeln!(self.out, "AUDIO FILES SAVED TO FOLDER: {}", dir)?;
        }
        self.out.flush()
    }
}

fn write_settings(out: &mut impl Write, config: &Config, input: &Path) -> io::Result<()> {
    let max_sentences = if config.max_sentences == 0 {
        "no limit".to_string()
    } else {
        config.max_sentences.to_string()
    };
    let save_audio = if config.save_audio {
        format!(" in folder: {}", config.audio_dir.display())
    } else {
        ": no".to_string()
    };

    writeln!(out, "Settings:")?;
    writeln!(out, " - input file: {}", input.display())?;
    writeln!(out, " - synthesis url: {}", config.synthesis_url)?;
    writeln!(out, " - language tag: {}", config.language)?;
    writeln!(out, " - max number of sentences: {}", max_sentences)?;
    writeln!(
        out,
        " - max concurrency: {} (+1 every {} sentences)",
        config.max_concurrency, config.ramp_up_interval
    )?;
    writeln!(out, " - save audio{}", save_audio)?;
    writeln!(out)
}

impl<W: Write + Send> StatsReporter for ConsoleReporter<W> {
    fn report_batch(&mut self, report: &BatchReport) {
        if let Err(e) = self.write_batch(report) {
            tracing::warn!(batch = report.index, error = %e, "Failed to write batch report");
        }
    }

    fn report_summary(&mut self, summary: &RunSummary) {
        if let Err(e) = self.write_summary(summary) {
            tracing::warn!(error = %e, "Failed to write run summary");
        }
    }
}
