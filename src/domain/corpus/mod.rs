pub mod error;
pub mod model;

pub use error::CorpusError;
pub use model::SentenceRecord;

use tokio::sync::mpsc;

/// Element names of the annotated corpus schema (corpus/text/sentence/w).
pub const KNOWN_ELEMENTS: [&str; 5] = ["corpus", "text", "sentence", "ne", "w"];

pub fn is_known_element(name: &str) -> bool {
    KNOWN_ELEMENTS.contains(&name)
}

/// Lazy, ordered source of sentence records. Iteration stops after the first error.
pub type SentenceStream = Box<dyn Iterator<Item = Result<SentenceRecord, CorpusError>> + Send>;

/// Records flowing from the corpus reader to the dispatcher
pub type SentenceReceiver = mpsc::Receiver<Result<SentenceRecord, CorpusError>>;
