//! Circular shift view.
//!
//! One output line per word instance of the wrapped text, in document order.
//! Output line `(line, start_word)` reads the source line starting at
//! `start_word` and wrapping back to word 1. No bytes are copied; only word
//! addresses are translated.

use super::{line_slot, violation, AddressableText, StructureError};

/// A rotated line: source line plus the word that leads it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub line: usize,
    pub start_word: usize,
}

impl Rotation {
    /// Translate a word index of the rotation into the source line's word index.
    ///
    /// `word` is within `1..=words`, so a single wrap is enough.
    #[inline]
    pub fn source_word(self, word: usize, words: usize) -> usize {
        let shifted = word + self.start_word - 1;
        if shifted > words {
            shifted - words
        } else {
            shifted
        }
    }
}

/// Every circular shift of every line of `T`
#[derive(Debug)]
pub struct ShiftView<'a, T: ?Sized> {
    source: &'a T,
    rotations: Vec<Rotation>,
}

impl<'a, T: AddressableText + ?Sized> ShiftView<'a, T> {
    pub fn new(source: &'a T) -> Self {
        let mut rotations = Vec::with_capacity(source.total_words());
        for line in 1..=source.line_count() {
            for start_word in 1..=source.word_count(line) {
                rotations.push(Rotation { line, start_word });
            }
        }
        tracing::debug!(
            lines = source.line_count(),
            rotations = rotations.len(),
            "Built circular shifts"
        );
        Self { source, rotations }
    }

    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Rotation behind output line `line`
    pub fn rotation(&self, line: usize) -> Rotation {
        self.rotations[line_slot(line, self.rotations.len())]
    }

    fn resolve(&self, line: usize, word: usize) -> (usize, usize) {
        let rotation = self.rotation(line);
        let words = self.source.word_count(rotation.line);
        if word == 0 || word > words {
            violation(StructureError::WordOutOfRange { line, word, words });
        }
        (rotation.line, rotation.source_word(word, words))
    }
}

impl<T: AddressableText + ?Sized> AddressableText for ShiftView<'_, T> {
    fn line_count(&self) -> usize {
        self.rotations.len()
    }

    fn word_count(&self, line: usize) -> usize {
        self.source.word_count(self.rotation(line).line)
    }

    fn char_count(&self, line: usize, word: usize) -> usize {
        let (line, word) = self.resolve(line, word);
        self.source.char_count(line, word)
    }

    fn char_at(&self, line: usize, word: usize, ch: usize) -> u8 {
        let (line, word) = self.resolve(line, word);
        self.source.char_at(line, word, ch)
    }
}
