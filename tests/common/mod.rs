//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use kwic::compare::line_less;
use kwic::emit;
use kwic::{AddressableText, LineStore};

/// Build a store from lines of space-separated words
pub fn store(lines: &[&str]) -> LineStore {
    LineStore::from_lines(lines)
}

/// Render every line of any text as strings
pub fn lines_of<T: AddressableText + ?Sized>(text: &T) -> Vec<String> {
    emit::to_lines(text)
}

/// Words of one line as strings
pub fn words_of<T: AddressableText + ?Sized>(text: &T, line: usize) -> Vec<String> {
    (1..=text.word_count(line))
        .map(|word| String::from_utf8_lossy(&text.word_bytes(line, word)).into_owned())
        .collect()
}

/// Sorted copy of a word list, for multiset comparison
pub fn sorted_words(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

/// Assert no adjacent pair of lines is out of order
pub fn assert_alphabetized<T: AddressableText + ?Sized>(text: &T) {
    for line in 2..=text.line_count() {
        assert!(
            !line_less(text, line, line - 1),
            "line {} ({:?}) ranks below line {} ({:?})",
            line,
            words_of(text, line),
            line - 1,
            words_of(text, line - 1)
        );
    }
}

/// Assert `perm` holds each of 1..=len exactly once
pub fn assert_bijection(perm: &[usize]) {
    let mut seen = perm.to_vec();
    seen.sort_unstable();
    assert_eq!(seen, (1..=perm.len()).collect::<Vec<_>>());
}

/// A small document with mixed case, repeats, punctuation and a blank line
pub fn sample_document() -> LineStore {
    store(&[
        "The quick brown fox",
        "jumps over the lazy dog",
        "",
        "Pack my box with five dozen liquor jugs",
        "the THE The tHe",
        "item-1 item-2 item_3",
        "a",
    ])
}
