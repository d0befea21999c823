//! Addressable text: the read contract shared by the line store and every view.
//!
//! All addressing is 1-based: `(line, word, char)`. A caller that passes an
//! index outside the bounds implied by the current counts has a bug; reads
//! panic with a tagged [`StructureError`] message rather than returning `None`.
//!
//! ```text
//! LineStore ──▶ ShiftView ──▶ SortedView ──▶ emit
//!   (bytes)     (rotations)   (permutation)
//! ```

pub mod shift;
pub mod sorted;
pub mod store;

use thiserror::Error;

pub use shift::{Rotation, ShiftView};
pub use sorted::{partition_sort, SortedView};
pub use store::{LineStore, LineStoreBuilder};

/// Read-only, 1-based access to a document of lines of words of bytes.
///
/// Implementations must be consistent with themselves: `char_at` is defined
/// for every `(line, word, char)` within `line_count`, `word_count` and
/// `char_count`.
pub trait AddressableText {
    /// Number of lines
    fn line_count(&self) -> usize;

    /// Number of words on `line`
    fn word_count(&self, line: usize) -> usize;

    /// Number of bytes in `word` of `line`
    fn char_count(&self, line: usize, word: usize) -> usize;

    /// Byte at `ch` of `word` of `line`
    fn char_at(&self, line: usize, word: usize, ch: usize) -> u8;

    /// Copy one word out as bytes
    fn word_bytes(&self, line: usize, word: usize) -> Vec<u8> {
        (1..=self.char_count(line, word))
            .map(|ch| self.char_at(line, word, ch))
            .collect()
    }

    /// Total number of words across all lines
    fn total_words(&self) -> usize {
        (1..=self.line_count()).map(|line| self.word_count(line)).sum()
    }
}

impl<T: AddressableText + ?Sized> AddressableText for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn word_count(&self, line: usize) -> usize {
        (**self).word_count(line)
    }

    fn char_count(&self, line: usize, word: usize) -> usize {
        (**self).char_count(line, word)
    }

    fn char_at(&self, line: usize, word: usize, ch: usize) -> u8 {
        (**self).char_at(line, word, ch)
    }
}

/// Structural contract violations.
///
/// These mean a caller is broken. The infallible entry points panic with the
/// `Display` text, whose trailing tag identifies the violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("line {line} not last or just past last {lines} (ERLSBL)")]
    LineOutOfSequence { line: usize, lines: usize },

    #[error("word {word} of line {line} not last or just past last {words} (ERLSBW)")]
    WordOutOfSequence {
        line: usize,
        word: usize,
        words: usize,
    },

    #[error("char {ch} of word {word} on line {line} not just past last {chars} (ERLSBC)")]
    CharOutOfSequence {
        line: usize,
        word: usize,
        ch: usize,
        chars: usize,
    },

    #[error("line {line} out of range 1..={lines} (ERADDR)")]
    LineOutOfRange { line: usize, lines: usize },

    #[error("word {word} of line {line} out of range 1..={words} (ERADDR)")]
    WordOutOfRange {
        line: usize,
        word: usize,
        words: usize,
    },

    #[error("char {ch} of word {word} on line {line} out of range 1..={chars} (ERADDR)")]
    CharOutOfRange {
        line: usize,
        word: usize,
        ch: usize,
        chars: usize,
    },
}

/// Abort on a contract violation.
#[cold]
#[track_caller]
pub(crate) fn violation(err: StructureError) -> ! {
    panic!("{err}")
}

/// Map a 1-based line index onto a 0-based slot, panicking when out of range.
#[track_caller]
pub(crate) fn line_slot(line: usize, lines: usize) -> usize {
    if line == 0 || line > lines {
        violation(StructureError::LineOutOfRange { line, lines });
    }
    line - 1
}
