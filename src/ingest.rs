//! Reading a byte source into a [`LineStore`]
//!
//! A space ends the current word and a newline ends the current line; every
//! other byte is stored verbatim. Runs of spaces collapse, so no empty word is
//! ever created. A line with no words is kept as an empty line, but a newline
//! at the very end of input does not open another one.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use crate::error::{KwicError, Result};
use crate::text::{AddressableText, LineStore, LineStoreBuilder};

/// Incremental tokenizer feeding a [`LineStoreBuilder`]
#[derive(Debug)]
pub struct Ingestor {
    builder: LineStoreBuilder,
    line: usize,
    word: usize,
    ch: usize,
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

impl Ingestor {
    pub fn new() -> Self {
        Self {
            builder: LineStoreBuilder::new(),
            line: 1,
            word: 1,
            ch: 1,
        }
    }

    pub fn push_byte(&mut self, byte: u8) {
        match byte {
            b' ' => {
                if self.ch > 1 {
                    self.word += 1;
                    self.ch = 1;
                }
            }
            b'\n' => {
                if self.builder.line_count() < self.line {
                    self.builder.push_empty_line(self.line);
                }
                self.line += 1;
                self.word = 1;
                self.ch = 1;
            }
            _ => {
                self.builder.append_char(self.line, self.word, self.ch, byte);
                self.ch += 1;
            }
        }
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push_byte(byte);
        }
    }

    pub fn finish(self) -> LineStore {
        self.builder.finish()
    }
}

/// Tokenize an in-memory buffer
pub fn parse_bytes(bytes: &[u8]) -> LineStore {
    let mut ingestor = Ingestor::new();
    ingestor.push_bytes(bytes);
    ingestor.finish()
}

/// Read a whole document from `reader`
pub fn read_document<R: Read>(reader: R) -> Result<LineStore> {
    let mut reader = BufReader::new(reader);
    let mut ingestor = Ingestor::new();
    let mut total = 0usize;
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(KwicError::Read(e)),
        };
        if buf.is_empty() {
            break;
        }
        let len = buf.len();
        ingestor.push_bytes(buf);
        reader.consume(len);
        total += len;
        tracing::trace!(bytes = len, "Ingested chunk");
    }
    let store = ingestor.finish();
    tracing::debug!(bytes = total, lines = store.line_count(), "Read document");
    Ok(store)
}

/// Open `path` and read it as a document; the file is closed on return
pub fn read_file(path: &Path) -> Result<LineStore> {
    let file = File::open(path).map_err(|source| KwicError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_document(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_parse_words_and_lines() {
        let store = parse_bytes(b"the cat sat\na cat ran\n");
        assert_eq!(store, LineStore::from_lines(["the cat sat", "a cat ran"]));
    }

    #[test]
    fn test_missing_trailing_newline() {
        let store = parse_bytes(b"one\ntwo");
        assert_eq!(store.line_count(), 2);
        assert_eq!(store.word_bytes(2, 1), b"two");
    }

    #[test]
    fn test_space_runs_collapse() {
        let store = parse_bytes(b"  a   b  \n");
        assert_eq!(store, LineStore::from_lines(["a b"]));
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let store = parse_bytes(b"a\n\n   \nb\n");
        assert_eq!(store.line_count(), 4);
        assert_eq!(store.word_count(2), 0);
        assert_eq!(store.word_count(3), 0);
        assert_eq!(store.word_bytes(4, 1), b"b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_bytes(b"").line_count(), 0);
        // A lone newline is one empty line
        assert_eq!(parse_bytes(b"\n").line_count(), 1);
    }

    #[test]
    fn test_other_bytes_kept_verbatim() {
        let store = parse_bytes(b"a\tb\r\n\xff");
        assert_eq!(store.word_bytes(1, 1), b"a\tb\r");
        assert_eq!(store.word_bytes(2, 1), [0xff]);
    }

    #[test]
    fn test_read_document_matches_parse_bytes() {
        let input = b"x y z\n\nlast line";
        let store = read_document(&input[..]).unwrap();
        assert_eq!(store, parse_bytes(input));
    }

    #[test]
    fn test_read_error_propagates() {
        let err = read_document(FailingReader).unwrap_err();
        assert!(matches!(err, KwicError::Read(_)));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = read_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, KwicError::Open { .. }));
    }
}
