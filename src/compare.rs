//! Alphabetic ordering of words and lines
//!
//! Letters rank case-insensitively first, with uppercase immediately before
//! its lowercase: `A < a < B < b < ... < Z < z`. Every other byte (space,
//! digits, punctuation, bytes >= 0x80) ranks 0, so they all compare equal to
//! one another and below any letter. `a1` and `a-` rank the same.
//!
//! Comparison is lexicographic on ranks, with a strict prefix ranking first,
//! both for the bytes of a word and for the words of a line. Lines of equal
//! rank are neither less nor greater than each other; nothing breaks ties by
//! position.

use crate::text::AddressableText;

/// Ordinal of a byte in the alphabetic order
#[inline]
pub const fn char_rank(byte: u8) -> u8 {
    match byte {
        b'A'..=b'Z' => (byte - b'A') * 2 + 1,
        b'a'..=b'z' => (byte - b'a') * 2 + 2,
        _ => 0,
    }
}

/// Whether `word1` of `line1` ranks strictly below `word2` of `line2`
pub fn word_less<T: AddressableText + ?Sized>(
    text: &T,
    line1: usize,
    word1: usize,
    line2: usize,
    word2: usize,
) -> bool {
    let chars1 = text.char_count(line1, word1);
    let chars2 = text.char_count(line2, word2);
    for ch in 1..=chars1.min(chars2) {
        let rank1 = char_rank(text.char_at(line1, word1, ch));
        let rank2 = char_rank(text.char_at(line2, word2, ch));
        if rank1 != rank2 {
            return rank1 < rank2;
        }
    }
    chars1 < chars2
}

/// Whether `line1` ranks strictly below `line2`
pub fn line_less<T: AddressableText + ?Sized>(text: &T, line1: usize, line2: usize) -> bool {
    let words1 = text.word_count(line1);
    let words2 = text.word_count(line2);
    for word in 1..=words1.min(words2) {
        if word_less(text, line1, word, line2, word) {
            return true;
        }
        if word_less(text, line2, word, line1, word) {
            return false;
        }
    }
    words1 < words2
}

/// Whether two words have identical ranks throughout
pub fn words_equal<T: AddressableText + ?Sized>(
    text: &T,
    line1: usize,
    word1: usize,
    line2: usize,
    word2: usize,
) -> bool {
    !word_less(text, line1, word1, line2, word2) && !word_less(text, line2, word2, line1, word1)
}

/// Whether two lines rank equal word for word
pub fn lines_equal<T: AddressableText + ?Sized>(text: &T, line1: usize, line2: usize) -> bool {
    !line_less(text, line1, line2) && !line_less(text, line2, line1)
}
