use crate::e2e::helpers;

use helpers::fixtures::{sentences_xml, CorpusFixtures};
use helpers::{CollectingReporter, MockTtsServer, BAD_URL, FAIL_STATUS};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::sync::Arc;
use tts_stress::domain::dispatch::{BatchDispatcher, DispatchSettings, HaltReason};
use tts_stress::domain::stats::RunSummary;
use tts_stress::domain::synthesis::{SynthesisError, SynthesisService};
use tts_stress::error::{AppError, AppResult};
use tts_stress::infrastructure::console::ConsoleReporter;
use tts_stress::infrastructure::corpus::CorpusReader;
use tts_stress::infrastructure::repositories::WikispeechTtsRepository;
use tts_stress::infrastructure::storage::AudioStore;

async fn run_corpus(
    server: &MockTtsServer,
    corpus: &Path,
    settings: DispatchSettings,
    audio_store: Option<Arc<AudioStore>>,
    reporter: &mut CollectingReporter,
) -> AppResult<RunSummary> {
    let reader = CorpusReader::open(corpus, "sv")?;
    let repo = Arc::new(WikispeechTtsRepository::new(server.base_url.clone(), None)?);
    let service = Arc::new(SynthesisService::new(repo, audio_store));
    let dispatcher = BatchDispatcher::new(service, settings);

    let (records, handle) = reader.spawn(8);
    let summary = dispatcher.run(records, reporter).await;
    handle.await.unwrap();
    summary
}

fn settings(max_concurrency: usize, ramp_up_interval: usize, max_sentences: usize) -> DispatchSettings {
    DispatchSettings {
        max_concurrency,
        ramp_up_interval,
        max_sentences,
    }
}

#[tokio::test]
async fn it_should_synthesize_whole_text_corpus_with_ramp_up() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.numbered_text_corpus(20);
    let mut reporter = CollectingReporter::default();

    let summary = run_corpus(&server, &corpus, settings(3, 2, 0), None, &mut reporter)
        .await
        .unwrap();

    assert_eq!(summary.halt, HaltReason::Exhausted);
    assert_eq!(summary.sentences, 20);
    assert_eq!(summary.final_concurrency, 3);
    assert_eq!(summary.audio_bytes, 1900);
    // [1] [2] [3,4] then batches of three; 20 never fills a batch
    assert_eq!(reporter.batch_sizes(), vec![1, 1, 2, 3, 3, 3, 3, 3]);
    assert!(reporter.batches_match_level());
    assert_eq!(reporter.sequences(), (1..=19).collect::<Vec<_>>());
    assert_eq!(server.calls(), 19);
    assert!(server.peak_concurrency() <= 3);
}

#[tokio::test]
async fn it_should_save_audio_named_after_url() {
    let server = MockTtsServer::start(64).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.text_corpus(&["Ett.", "", "Två.", "Tre."]);
    let audio_dir = fixtures.path("audio");
    let store = Arc::new(AudioStore::create(&audio_dir).unwrap());
    let mut reporter = CollectingReporter::default();

    run_corpus(&server, &corpus, settings(10, 100, 0), Some(store), &mut reporter)
        .await
        .unwrap();

    let mut saved: Vec<String> = std::fs::read_dir(&audio_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    saved.sort();
    assert_eq!(saved, vec!["utt_1.opus", "utt_2.opus", "utt_3.opus"]);
    assert_eq!(std::fs::read(audio_dir.join("utt_2.opus")).unwrap().len(), 64);
}

#[tokio::test]
async fn it_should_stop_after_batch_with_failed_sentence() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.text_corpus(&[
        "Ett.",
        "Två.",
        "Tre.",
        FAIL_STATUS,
        "Fem.",
        "Sex.",
        "Sju.",
        "Åtta.",
    ]);
    let mut reporter = CollectingReporter::default();

    let summary = run_corpus(&server, &corpus, settings(2, 2, 0), None, &mut reporter)
        .await
        .unwrap();

    // [1] [2] [3,4] -> sentence 4 fails, nothing after it is dispatched
    assert_eq!(reporter.batch_sizes(), vec![1, 1, 2]);
    assert_eq!(summary.halt, HaltReason::Aborted { failed: vec![4] });
    assert_eq!(server.calls(), 4);

    let last = reporter.batches.last().unwrap();
    assert_eq!(last.sentences[0].audio_len, 100);
    assert_eq!(last.sentences[1].text, FAIL_STATUS);
    assert!(matches!(last.sentences[1].error, Some(SynthesisError::Network(_))));
}

#[tokio::test]
async fn it_should_report_unparsable_audio_url() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.text_corpus(&["Ett.", BAD_URL, "Tre."]);
    let mut reporter = CollectingReporter::default();

    let summary = run_corpus(&server, &corpus, settings(10, 100, 0), None, &mut reporter)
        .await
        .unwrap();

    assert_eq!(summary.halt, HaltReason::Aborted { failed: vec![2] });
    let failed = &reporter.batches[1].sentences[0];
    assert!(matches!(failed.error, Some(SynthesisError::AudioUrlParse(_))));
}

#[tokio::test]
async fn it_should_stop_at_max_sentences() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.numbered_text_corpus(50);
    let mut reporter = CollectingReporter::default();

    let summary = run_corpus(&server, &corpus, settings(10, 100, 7), None, &mut reporter)
        .await
        .unwrap();

    assert_eq!(summary.halt, HaltReason::LimitReached);
    assert_eq!(summary.sentences, 7);
    assert_eq!(server.calls(), 7);
}

#[tokio::test]
async fn it_should_synthesize_compressed_xml_corpus() {
    let server = MockTtsServer::start(50).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.bzip2_xml_corpus(&sentences_xml(&[
        &["Det", "var", "en", "gång", "."],
        &["Slut", "!"],
    ]));
    let mut reporter = CollectingReporter::default();

    let summary = run_corpus(&server, &corpus, settings(10, 100, 0), None, &mut reporter)
        .await
        .unwrap();

    assert_eq!(summary.sentences, 2);
    let inputs: Vec<String> = server.inputs().into_iter().map(|(_, input)| input).collect();
    assert_eq!(inputs, vec!["Det var en gång .", "Slut !"]);
}

#[tokio::test]
async fn it_should_fail_on_unknown_corpus_element() {
    let server = MockTtsServer::start(50).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.xml_corpus(
        "<corpus><text>\
         <sentence><w>Ett</w></sentence>\
         <sentence><w>Två</w></sentence>\
         <div><sentence><w>Tre</w></sentence></div>\
         </text></corpus>",
    );
    let mut reporter = CollectingReporter::default();

    let result = run_corpus(&server, &corpus, settings(10, 100, 0), None, &mut reporter).await;

    assert!(matches!(result, Err(AppError::CorpusSchemaViolation(_))));
    assert_eq!(server.calls(), 2);
    assert!(reporter.summary.is_none());
}

#[tokio::test]
async fn it_should_print_grep_friendly_report() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.text_corpus(&["Hej världen!"]);

    let reader = CorpusReader::open(&corpus, "sv").unwrap();
    let repo = Arc::new(WikispeechTtsRepository::new(server.base_url.clone(), None).unwrap());
    let service = Arc::new(SynthesisService::new(repo, None));
    let dispatcher = BatchDispatcher::new(service, DispatchSettings::default());
    let mut reporter = ConsoleReporter::new(Vec::new(), None);

    let (records, handle) = reader.spawn(4);
    dispatcher.run(records, &mut reporter).await.unwrap();
    handle.await.unwrap();

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(output.contains("SENT: 1\tHej världen!\nAUDIO LEN: 100\n"));
    assert!(output.contains("LEN DATA:\t#1\t12\t100\t0.120000\n"));
    assert!(output.contains("MAIN LOOP TOOK"));
}
