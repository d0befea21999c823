//! Shared helpers for benchmarks

use kwic::LineStore;

/// A document of `lines` lines cycling through a few pangrams
#[allow(dead_code)]
pub fn make_document(lines: usize) -> LineStore {
    const PANGRAMS: [&str; 4] = [
        "The quick brown fox jumps over the lazy dog",
        "Pack my box with five dozen liquor jugs",
        "How vexingly quick daft zebras jump",
        "Sphinx of black quartz judge my vow",
    ];
    LineStore::from_lines((0..lines).map(|i| PANGRAMS[i % PANGRAMS.len()]))
}

/// `lines` single-word lines already in alphabetical order
#[allow(dead_code)]
pub fn make_sorted_words(lines: usize) -> LineStore {
    LineStore::from_lines((0..lines).map(|i| {
        let mut word = [b'a'; 4];
        let mut n = i;
        for slot in word.iter_mut().rev() {
            *slot = b'a' + (n % 26) as u8;
            n /= 26;
        }
        word
    }))
}
