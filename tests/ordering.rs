//! Alphabetic ranking and the sorted view

mod common;

use common::{assert_alphabetized, assert_bijection, lines_of, sample_document, store, words_of};
use kwic::compare::{char_rank, line_less, lines_equal, word_less};
use kwic::{AddressableText, ShiftView, SortedView};

// ========================================================================
// Character ranks
// ========================================================================

#[test]
fn test_rank_order_of_letters() {
    assert!(char_rank(b'A') < char_rank(b'a'));
    assert!(char_rank(b'a') < char_rank(b'B'));
    assert!(char_rank(b'B') < char_rank(b'b'));
    for (upper, lower) in (b'A'..=b'Z').zip(b'a'..=b'z') {
        assert_eq!(char_rank(upper) + 1, char_rank(lower));
    }
}

#[test]
fn test_non_letters_rank_zero() {
    assert_eq!(char_rank(b' '), 0);
    assert_eq!(char_rank(b'5'), char_rank(b' '));
    for byte in (0u8..=255).filter(|b| !b.is_ascii_alphabetic()) {
        assert_eq!(char_rank(byte), 0, "byte {byte:#04x}");
    }
}

// ========================================================================
// Order laws over every pair/triple of a sample
// ========================================================================

#[test]
fn test_line_less_is_irreflexive_and_antisymmetric() {
    let doc = sample_document();
    let shifted = ShiftView::new(&doc);
    let n = shifted.line_count();
    for a in 1..=n {
        assert!(!line_less(&shifted, a, a));
        for b in 1..=n {
            assert!(!(line_less(&shifted, a, b) && line_less(&shifted, b, a)));
        }
    }
}

#[test]
fn test_line_less_is_transitive() {
    let doc = sample_document();
    let shifted = ShiftView::new(&doc);
    let n = shifted.line_count();
    for a in 1..=n {
        for b in 1..=n {
            if !line_less(&shifted, a, b) {
                continue;
            }
            for c in 1..=n {
                if line_less(&shifted, b, c) {
                    assert!(line_less(&shifted, a, c), "{a} < {b} < {c}");
                }
            }
        }
    }
}

#[test]
fn test_case_is_ranked_per_character() {
    let doc = store(&["abc ABC abd Abd"]);
    assert!(word_less(&doc, 1, 2, 1, 1)); // ABC < abc
    assert!(word_less(&doc, 1, 1, 1, 3)); // abc < abd
    // The first character decides before any later letter does
    assert!(word_less(&doc, 1, 4, 1, 1)); // Abd < abc
}

// ========================================================================
// SortedView
// ========================================================================

#[test]
fn test_sorted_permutation_is_bijection() {
    for lines in [
        vec![],
        vec!["one"],
        vec!["b", "a"],
        vec!["same", "same", "same"],
        vec!["z y x", "w v", "u"],
    ] {
        let doc = store(&lines);
        let sorted = SortedView::new(&doc);
        assert_eq!(sorted.permutation().len(), doc.line_count());
        assert_bijection(sorted.permutation());
    }
}

#[test]
fn test_sorted_shifts_are_alphabetized() {
    let doc = sample_document();
    let shifted = ShiftView::new(&doc);
    let sorted = SortedView::new(&shifted);
    assert_eq!(sorted.line_count(), shifted.line_count());
    assert_bijection(sorted.permutation());
    assert_alphabetized(&sorted);
}

#[test]
fn test_example_index() {
    let doc = store(&["the cat sat", "a cat ran"]);
    let shifted = ShiftView::new(&doc);
    let sorted = SortedView::new(&shifted);
    assert_eq!(
        lines_of(&sorted),
        [
            "a cat ran",
            "cat ran a",
            "cat sat the",
            "ran a cat",
            "sat the cat",
            "the cat sat",
        ]
    );
}

#[test]
fn test_uppercase_sorts_before_lowercase_of_same_letter() {
    let doc = store(&["b", "B", "a", "A"]);
    let sorted = SortedView::new(&doc);
    assert_eq!(lines_of(&sorted), ["A", "a", "B", "b"]);
}

#[test]
fn test_equal_lines_grouped_together() {
    let doc = store(&["the", "a", "The", "the", "THE", "a"]);
    let sorted = SortedView::new(&doc);
    assert_alphabetized(&sorted);
    // Both "a" lines lead; "THE" < "The" < the/the
    assert_eq!(words_of(&sorted, 1), ["a"]);
    assert_eq!(words_of(&sorted, 2), ["a"]);
    assert_eq!(words_of(&sorted, 3), ["THE"]);
    assert_eq!(words_of(&sorted, 4), ["The"]);
    assert!(lines_equal(&sorted, 5, 6));
}

#[test]
fn test_sorting_sorted_output_stays_sorted() {
    let doc = sample_document();
    let shifted = ShiftView::new(&doc);
    let sorted = SortedView::new(&shifted);
    let resorted = SortedView::new(&sorted);
    assert_bijection(resorted.permutation());
    assert_alphabetized(&resorted);
    assert_eq!(lines_of(&resorted).len(), lines_of(&sorted).len());
}

#[test]
fn test_large_reverse_sorted_input() {
    // Degenerate pivot case: must still finish and be ordered
    let words: Vec<String> = (0..400)
        .rev()
        .map(|i| {
            let hi = (b'a' + (i / 26) as u8) as char;
            let lo = (b'a' + (i % 26) as u8) as char;
            format!("{hi}{lo}")
        })
        .collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let doc = store(&refs);
    let sorted = SortedView::new(&doc);
    assert_bijection(sorted.permutation());
    assert_alphabetized(&sorted);
    assert_eq!(sorted.permutation()[0], 400);
}
