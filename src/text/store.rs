//! Leaf text storage and its append-only builder.
//!
//! `LineStoreBuilder` is the only way to produce content. It accepts exactly
//! the next position after the current content and is consumed by
//! [`LineStoreBuilder::finish`], after which the store is read-only.

use super::{line_slot, violation, AddressableText, StructureError};

type Word = Vec<u8>;
type Line = Vec<Word>;

/// Immutable document of lines of words of bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Line>,
}

impl LineStore {
    /// Create an empty store (zero lines)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from lines of space-separated words.
    ///
    /// Runs of spaces collapse; a line without words becomes an empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut builder = LineStoreBuilder::new();
        for (idx, text) in lines.into_iter().enumerate() {
            let line = idx + 1;
            let words = text
                .as_ref()
                .split(|&b| b == b' ')
                .filter(|word| !word.is_empty());
            let mut wrote = false;
            for (widx, word) in words.enumerate() {
                for (cidx, &byte) in word.iter().enumerate() {
                    builder.append_char(line, widx + 1, cidx + 1, byte);
                }
                wrote = true;
            }
            if !wrote {
                builder.push_empty_line(line);
            }
        }
        builder.finish()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line(&self, line: usize) -> &Line {
        &self.lines[line_slot(line, self.lines.len())]
    }

    fn word(&self, line: usize, word: usize) -> &Word {
        let words = self.line(line);
        if word == 0 || word > words.len() {
            violation(StructureError::WordOutOfRange {
                line,
                word,
                words: words.len(),
            });
        }
        &words[word - 1]
    }
}

impl AddressableText for LineStore {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn word_count(&self, line: usize) -> usize {
        self.line(line).len()
    }

    fn char_count(&self, line: usize, word: usize) -> usize {
        self.word(line, word).len()
    }

    fn char_at(&self, line: usize, word: usize, ch: usize) -> u8 {
        let bytes = self.word(line, word);
        if ch == 0 || ch > bytes.len() {
            violation(StructureError::CharOutOfRange {
                line,
                word,
                ch,
                chars: bytes.len(),
            });
        }
        bytes[ch - 1]
    }
}

// =============================================================================
// LineStoreBuilder - strictly sequential construction
// =============================================================================

/// Append-only writer for a [`LineStore`].
///
/// Every append must address the position immediately after current content:
/// the next char of the last word, the first char of a new word on the last
/// line, or the first char of the first word of a new line.
#[derive(Debug, Default)]
pub struct LineStoreBuilder {
    lines: Vec<Line>,
}

impl LineStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Append one byte, panicking on an out-of-sequence address
    #[track_caller]
    pub fn append_char(&mut self, line: usize, word: usize, ch: usize, value: u8) {
        if let Err(err) = self.try_append_char(line, word, ch, value) {
            violation(err);
        }
    }

    /// Append one byte, reporting which sequencing rule an address breaks
    pub fn try_append_char(
        &mut self,
        line: usize,
        word: usize,
        ch: usize,
        value: u8,
    ) -> Result<(), StructureError> {
        let lines = self.lines.len();
        if line == 0 || line < lines || line > lines + 1 {
            return Err(StructureError::LineOutOfSequence { line, lines });
        }

        let words = if line == lines {
            self.lines[line - 1].len()
        } else {
            0
        };
        if word == 0 || word < words || word > words + 1 {
            return Err(StructureError::WordOutOfSequence { line, word, words });
        }

        let chars = if line == lines && word == words {
            self.lines[line - 1][word - 1].len()
        } else {
            0
        };
        if ch != chars + 1 {
            return Err(StructureError::CharOutOfSequence {
                line,
                word,
                ch,
                chars,
            });
        }

        if line == lines + 1 {
            self.lines.push(Line::new());
        }
        let target = &mut self.lines[line - 1];
        if word == words + 1 {
            target.push(Word::new());
        }
        target[word - 1].push(value);
        Ok(())
    }

    /// Open `line` with no words, panicking unless it is just past the last line
    #[track_caller]
    pub fn push_empty_line(&mut self, line: usize) {
        if let Err(err) = self.try_push_empty_line(line) {
            violation(err);
        }
    }

    pub fn try_push_empty_line(&mut self, line: usize) -> Result<(), StructureError> {
        let lines = self.lines.len();
        if line != lines + 1 {
            return Err(StructureError::LineOutOfSequence { line, lines });
        }
        self.lines.push(Line::new());
        Ok(())
    }

    /// Freeze the content
    pub fn finish(self) -> LineStore {
        LineStore { lines: self.lines }
    }
}
