//! Alphabetized view.
//!
//! Holds one owned permutation of the wrapped text's line indices and
//! re-addresses every line lookup through it. Line content never moves.

use super::{line_slot, AddressableText};
use crate::compare::line_less;

/// `T` with its lines reordered by [`line_less`]
#[derive(Debug)]
pub struct SortedView<'a, T: ?Sized> {
    source: &'a T,
    perm: Vec<usize>,
}

impl<'a, T: AddressableText + ?Sized> SortedView<'a, T> {
    pub fn new(source: &'a T) -> Self {
        let mut perm: Vec<usize> = (1..=source.line_count()).collect();
        partition_sort(source, &mut perm);
        tracing::debug!(lines = perm.len(), "Alphabetized lines");
        Self { source, perm }
    }

    /// Underlying line index for each output line, in output order
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    fn resolve(&self, line: usize) -> usize {
        self.perm[line_slot(line, self.perm.len())]
    }
}

impl<T: AddressableText + ?Sized> AddressableText for SortedView<'_, T> {
    fn line_count(&self) -> usize {
        self.source.line_count()
    }

    fn word_count(&self, line: usize) -> usize {
        self.source.word_count(self.resolve(line))
    }

    fn char_count(&self, line: usize, word: usize) -> usize {
        self.source.char_count(self.resolve(line), word)
    }

    fn char_at(&self, line: usize, word: usize, ch: usize) -> u8 {
        self.source.char_at(self.resolve(line), word, ch)
    }
}

/// Sort line indices of `text` in place by [`line_less`].
///
/// Single-pivot partitioning with the leftmost element of each range as the
/// pivot: every later element ranking strictly below the pivot is moved just
/// in front of it. Ranges are processed from an explicit stack rather than by
/// recursion. Ties land in arbitrary order. Already-sorted or reverse-sorted
/// input is the quadratic worst case.
pub fn partition_sort<T: AddressableText + ?Sized>(text: &T, perm: &mut [usize]) {
    let mut pending = vec![(0, perm.len())];
    while let Some((left, right)) = pending.pop() {
        if right - left <= 1 {
            continue;
        }
        // perm[left..pivot] ranks below perm[pivot]; perm[pivot + 1..i] does not
        let mut pivot = left;
        for i in pivot + 1..right {
            if line_less(text, perm[i], perm[pivot]) {
                perm.swap(pivot + 1, i);
                perm.swap(pivot, pivot + 1);
                pivot += 1;
            }
        }
        pending.push((pivot + 1, right));
        pending.push((left, pivot));
    }
}
