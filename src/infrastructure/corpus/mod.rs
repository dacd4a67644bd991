pub mod text_reader;
pub mod xml_reader;

pub use text_reader::TextCorpus;
pub use xml_reader::XmlCorpus;

use crate::domain::corpus::{CorpusError, SentenceReceiver, SentenceStream};
use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Input formats, selected by filename suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Text,
    Xml,
    XmlBzip2,
    XmlGzip,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let name = path.to_string_lossy();
        if name.ends_with(".xml.bz2") {
            Ok(CorpusFormat::XmlBzip2)
        } else if name.ends_with(".xml.gz") {
            Ok(CorpusFormat::XmlGzip)
        } else if name.ends_with(".xml") {
            Ok(CorpusFormat::Xml)
        } else if name.ends_with(".txt") {
            Ok(CorpusFormat::Text)
        } else {
            Err(CorpusError::UnrecognizedFormat(name.into_owned()))
        }
    }
}

/// Opens a corpus file and streams its sentences.
pub struct CorpusReader {
    path: PathBuf,
    format: CorpusFormat,
    stream: SentenceStream,
}

impl CorpusReader {
    /// Check the input exists, pick the format from its suffix and attach the
    /// matching (optionally decompressing) reader.
    pub fn open(path: impl AsRef<Path>, language: &str) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::NotFound(path.display().to_string()));
        }
        let format = CorpusFormat::from_path(path)?;
        let file = File::open(path)?;

        let stream: SentenceStream = match format {
            CorpusFormat::Text => Box::new(TextCorpus::new(BufReader::new(file), language)),
            CorpusFormat::Xml => Box::new(XmlCorpus::new(BufReader::new(file), language)),
            CorpusFormat::XmlBzip2 => Box::new(XmlCorpus::new(
                BufReader::new(MultiBzDecoder::new(file)),
                language,
            )),
            CorpusFormat::XmlGzip => Box::new(XmlCorpus::new(
                BufReader::new(MultiGzDecoder::new(file)),
                language,
            )),
        };

        tracing::info!(path = %path.display(), format = ?format, "Corpus opened");

        Ok(Self {
            path: path.to_path_buf(),
            format,
            stream,
        })
    }

    pub fn format(&self) -> CorpusFormat {
        self.format
    }

    pub fn into_stream(self) -> SentenceStream {
        self.stream
    }

    /// Run the reader on a blocking thread, feeding a bounded channel.
    ///
    /// The producer stops after forwarding the first error, or as soon as the
    /// receiving side is dropped.
    pub fn spawn(self, capacity: usize) -> (SentenceReceiver, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let path = self.path;
        let stream = self.stream;

        let handle = tokio::task::spawn_blocking(move || {
            let mut emitted = 0usize;
            for item in stream {
                let failed = item.is_err();
                if tx.blocking_send(item).is_err() {
                    tracing::debug!(emitted, "Dispatcher stopped consuming, closing corpus reader");
                    return;
                }
                if failed {
                    return;
                }
                emitted += 1;
            }
            tracing::info!(path = %path.display(), emitted, "Corpus exhausted");
        });

        (rx, handle)
    }
}
