use crate::infrastructure::config::{normalize_base_url, Config};
use clap::Parser;
use std::path::PathBuf;

/// Load test for a speech synthesis server.
///
/// Streams sentences from a text file (one sentence per line) or from an
/// annotated XML corpus (.xml, .xml.bz2 or .xml.gz), sends them to the server
/// with a slowly increasing number of concurrent calls and reports audio
/// lengths and call durations.
#[derive(Debug, Parser)]
#[command(name = "tts-stress", version)]
pub struct Cli {
    /// Text file or corpus file to read sentences from
    pub input: PathBuf,

    /// Max number of sentences to synthesize (0 = no limit)
    #[arg(short = 'n', long)]
    pub max_sentences: Option<usize>,

    /// Save audio files to disk
    #[arg(short = 'a', long)]
    pub save_audio: bool,

    /// Synthesis server url
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Language tag sent with every sentence
    #[arg(short = 'l', long)]
    pub lang: Option<String>,

    /// Folder for saved audio files
    #[arg(long)]
    pub audio_dir: Option<PathBuf>,

    /// Upper bound for the number of concurrent calls
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// Number of sentences between concurrency increases
    #[arg(long = "ramp-up-every")]
    pub ramp_up_interval: Option<usize>,

    /// Per-request timeout in seconds (0 = none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Flags given on the command line take precedence over `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.url {
            config.synthesis_url = normalize_base_url(url);
        }
        if let Some(lang) = &self.lang {
            config.language = lang.clone();
        }
        if let Some(n) = self.max_sentences {
            config.max_sentences = n;
        }
        if self.save_audio {
            config.save_audio = true;
        }
        if let Some(dir) = &self.audio_dir {
            config.audio_dir = dir.clone();
        }
        if let Some(cap) = self.max_concurrency {
            config.max_concurrency = cap;
        }
        if let Some(interval) = self.ramp_up_interval {
            config.ramp_up_interval = interval;
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout_secs = secs;
        }
        config
    }
}
