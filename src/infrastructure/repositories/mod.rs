pub mod tts_repository;
pub mod wikispeech_tts_repository;

pub use tts_repository::TtsRepository;
pub use wikispeech_tts_repository::WikispeechTtsRepository;
