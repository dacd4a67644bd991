use crate::domain::dispatch::DispatchSettings;
use crate::error::{AppError, AppResult};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub synthesis_url: String,
    pub language: String,
    /// 0 means no limit
    pub max_sentences: usize,
    pub save_audio: bool,
    pub audio_dir: PathBuf,
    pub max_concurrency: usize,
    pub ramp_up_interval: usize,
    /// 0 disables the request timeout
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            synthesis_url: "http://localhost:10000".to_string(),
            language: "sv".to_string(),
            max_sentences: 0,
            save_audio: false,
            audio_dir: PathBuf::from("audio"),
            max_concurrency: 10,
            ramp_up_interval: 100,
            request_timeout_secs: 0,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();
        let config = Config {
            synthesis_url: normalize_base_url(
                &env::var("SYNTH_URL").unwrap_or(defaults.synthesis_url),
            ),
            language: env::var("SYNTH_LANG").unwrap_or(defaults.language),
            max_sentences: parse_var("MAX_SENTENCES", defaults.max_sentences)?,
            save_audio: env::var("SAVE_AUDIO")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(defaults.save_audio),
            audio_dir: env::var("AUDIO_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.audio_dir),
            max_concurrency: parse_var("MAX_CONCURRENCY", defaults.max_concurrency)?,
            ramp_up_interval: parse_var("RAMP_UP_INTERVAL", defaults.ramp_up_interval)?,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?,
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(defaults.log_format),
        };

        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.max_concurrency == 0 {
            return Err(AppError::Config("max concurrency must be at least 1".to_string()));
        }
        if self.ramp_up_interval == 0 {
            return Err(AppError::Config("ramp-up interval must be at least 1".to_string()));
        }
        if self.language.trim().is_empty() {
            return Err(AppError::Config("language tag must not be empty".to_string()));
        }
        if self.synthesis_url.is_empty() {
            return Err(AppError::Config("synthesis url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            max_concurrency: self.max_concurrency,
            ramp_up_interval: self.ramp_up_interval,
            max_sentences: self.max_sentences,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

/// Drop trailing slashes so request paths can be appended as `/?...`
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_var<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, value, e))),
        Err(_) => Ok(default),
    }
}
