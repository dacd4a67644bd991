use crate::e2e::helpers;

use helpers::fixtures::CorpusFixtures;
use helpers::{MockTtsServer, FAIL_STATUS};
use pretty_assertions::assert_eq;
use tts_stress::domain::dispatch::HaltReason;
use tts_stress::error::AppError;
use tts_stress::infrastructure::config::Config;
use tts_stress::infrastructure::runner::{exit_code, run_load_test, EXIT_ABORTED};

fn config_for(server: &MockTtsServer) -> Config {
    Config {
        synthesis_url: server.base_url.clone(),
        ..Config::default()
    }
}

#[tokio::test]
async fn it_should_exit_with_zero_after_complete_run() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.text_corpus(&["Ett.", "Två.", "Tre."]);

    let result = run_load_test(&corpus, &config_for(&server), Vec::new()).await;

    let summary = result.as_ref().unwrap();
    assert_eq!(summary.halt, HaltReason::Exhausted);
    assert_eq!(summary.sentences, 3);
    assert_eq!(exit_code(&result), 0);
}

#[tokio::test]
async fn it_should_exit_with_one_for_missing_input() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();

    let result = run_load_test(&fixtures.path("missing.txt"), &config_for(&server), Vec::new()).await;

    assert!(matches!(result, Err(AppError::InputNotFound(_))));
    assert_eq!(exit_code(&result), 1);
    assert_eq!(server.calls(), 0);
}

#[tokio::test]
async fn it_should_exit_with_one_for_unknown_corpus_element() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.xml_corpus(
        "<corpus><sentence><w>Ett</w></sentence><table><w>Två</w></table></corpus>",
    );

    let result = run_load_test(&corpus, &config_for(&server), Vec::new()).await;

    assert!(matches!(result, Err(AppError::CorpusSchemaViolation(_))));
    assert_eq!(exit_code(&result), 1);
}

#[tokio::test]
async fn it_should_exit_with_one_when_audio_dir_is_a_file() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.text_corpus(&["Ett."]);
    let occupied = fixtures.path("audio");
    std::fs::write(&occupied, b"not a directory").unwrap();
    let config = Config {
        save_audio: true,
        audio_dir: occupied,
        ..config_for(&server)
    };

    let result = run_load_test(&corpus, &config, Vec::new()).await;

    assert!(matches!(result, Err(AppError::FileSystem(_))));
    assert_eq!(exit_code(&result), 1);
    assert_eq!(server.calls(), 0);
}

#[tokio::test]
async fn it_should_exit_with_two_after_failed_synthesis() {
    let server = MockTtsServer::start(100).await;
    let fixtures = CorpusFixtures::new();
    let corpus = fixtures.text_corpus(&["Ett.", FAIL_STATUS, "Tre."]);

    let result = run_load_test(&corpus, &config_for(&server), Vec::new()).await;

    let summary = result.as_ref().unwrap();
    assert_eq!(summary.halt, HaltReason::Aborted { failed: vec![2] });
    assert_eq!(exit_code(&result), EXIT_ABORTED);
    assert_eq!(server.calls(), 2);
}
