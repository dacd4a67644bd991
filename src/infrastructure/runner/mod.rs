use crate::domain::dispatch::BatchDispatcher;
use crate::domain::stats::RunSummary;
use crate::domain::synthesis::SynthesisService;
use crate::error::{AppError, AppResult};
use crate::infrastructure::config::Config;
use crate::infrastructure::console::ConsoleReporter;
use crate::infrastructure::corpus::CorpusReader;
use crate::infrastructure::repositories::WikispeechTtsRepository;
use crate::infrastructure::storage::AudioStore;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Sentences buffered between the corpus reader and the dispatcher
const READ_AHEAD: usize = 64;

/// Exit code of a run stopped by a failed synthesis call
pub const EXIT_ABORTED: u8 = 2;

/// Run a whole load test over `input`, writing the report to `out`
pub async fn run_load_test<W: Write + Send>(
    input: &Path,
    config: &Config,
    out: W,
) -> AppResult<RunSummary> {
    config.validate()?;

    // Open the corpus first so a bad input fails before anything else happens
    let corpus = CorpusReader::open(input, &config.language)?;

    let mut reporter = ConsoleReporter::new(
        out,
        config
            .save_audio
            .then(|| config.audio_dir.display().to_string()),
    );
    reporter.print_settings(config, input);

    let audio_store = if config.save_audio {
        Some(Arc::new(AudioStore::create(&config.audio_dir)?))
    } else {
        None
    };

    // === DEPENDENCY INJECTION SETUP ===
    let tts_repo = Arc::new(WikispeechTtsRepository::new(
        config.synthesis_url.clone(),
        config.request_timeout(),
    )?);
    let synthesis_service = Arc::new(SynthesisService::new(tts_repo, audio_store));
    let dispatcher = BatchDispatcher::new(synthesis_service, config.dispatch_settings());

    tracing::info!(
        url = %config.synthesis_url,
        language = %config.language,
        max_concurrency = config.max_concurrency,
        ramp_up_interval = config.ramp_up_interval,
        "Starting load test"
    );

    let (records, reader) = corpus.spawn(READ_AHEAD);
    let summary = dispatcher.run(records, &mut reporter).await?;

    if let Err(e) = reader.await {
        return Err(AppError::Internal(format!("Corpus reader panicked: {}", e)));
    }

    Ok(summary)
}

/// Process exit code for the outcome of [`run_load_test`]
pub fn exit_code(result: &AppResult<RunSummary>) -> u8 {
    match result {
        Ok(summary) if summary.is_aborted() => EXIT_ABORTED,
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}
