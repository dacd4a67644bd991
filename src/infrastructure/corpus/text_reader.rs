use crate::domain::corpus::{CorpusError, SentenceRecord};
use std::io::{BufRead, Lines};

/// Plain text corpus: one sentence per line, blank lines skipped
pub struct TextCorpus<R> {
    lines: Lines<R>,
    language: String,
    sequence: usize,
    done: bool,
}

impl<R: BufRead> TextCorpus<R> {
    pub fn new(source: R, language: impl Into<String>) -> Self {
        Self {
            lines: source.lines(),
            language: language.into(),
            sequence: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for TextCorpus<R> {
    type Item = Result<SentenceRecord, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    let text = line.trim();
                    if text.is_empty() {
                        continue;
                    }
                    self.sequence += 1;
                    return Some(Ok(SentenceRecord::new(
                        self.language.clone(),
                        text,
                        self.sequence,
                    )));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(CorpusError::Io(e)));
                }
            }
        }

        self.done = true;
        None
    }
}
