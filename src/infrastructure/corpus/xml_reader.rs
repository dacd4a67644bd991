use crate::domain::corpus::{is_known_element, CorpusError, SentenceRecord};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;

/// Streaming reader for annotated XML corpora (corpus/text/sentence/w).
///
/// The document is tokenized incrementally; only the words of the sentence
/// currently being read are held in memory. Each `sentence` end tag produces
/// one record whose text is the inner text of its `w` elements joined with
/// single spaces. Any element outside the known schema stops the stream with
/// a `SchemaViolation`.
pub struct XmlCorpus<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    language: String,
    words: Vec<String>,
    current_word: Option<String>,
    sequence: usize,
    done: bool,
}

impl<R: BufRead> XmlCorpus<R> {
    pub fn new(source: R, language: impl Into<String>) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.trim_text(true);

        Self {
            reader,
            buf: Vec::new(),
            language: language.into(),
            words: Vec::new(),
            current_word: None,
            sequence: 0,
            done: false,
        }
    }

    fn next_sentence(&mut self) -> Result<Option<SentenceRecord>, CorpusError> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(e) => {
                    return Err(CorpusError::Malformed(format!(
                        "at byte {}: {}",
                        self.reader.buffer_position(),
                        e
                    )))
                }
            };

            match event {
                Event::Start(e) => {
                    let name = element_name(e.local_name().as_ref())?;
                    if !is_known_element(&name) {
                        return Err(CorpusError::SchemaViolation(name));
                    }
                    if name == "w" {
                        self.current_word = Some(String::new());
                    }
                }
                Event::Empty(e) => {
                    let name = element_name(e.local_name().as_ref())?;
                    if !is_known_element(&name) {
                        return Err(CorpusError::SchemaViolation(name));
                    }
                }
                Event::Text(t) => {
                    if let Some(word) = self.current_word.as_mut() {
                        let text = t
                            .unescape()
                            .map_err(|e| CorpusError::Malformed(e.to_string()))?;
                        word.push_str(&text);
                    }
                }
                Event::CData(c) => {
                    if let Some(word) = self.current_word.as_mut() {
                        word.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"w" => {
                        if let Some(word) = self.current_word.take() {
                            let word = word.trim();
                            if !word.is_empty() {
                                self.words.push(word.to_string());
                            }
                        }
                    }
                    b"sentence" => {
                        let text = self.words.join(" ");
                        self.words.clear();
                        self.sequence += 1;
                        return Ok(Some(SentenceRecord::new(
                            self.language.clone(),
                            text,
                            self.sequence,
                        )));
                    }
                    _ => {}
                },
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }
}

fn element_name(raw: &[u8]) -> Result<String, CorpusError> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| CorpusError::Malformed(format!("element name is not UTF-8: {}", e)))
}

impl<R: BufRead> Iterator for XmlCorpus<R> {
    type Item = Result<SentenceRecord, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_sentence() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
