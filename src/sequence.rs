//! The two-capability sequence protocol and the algorithms derived from it.
//!
//! A type becomes a [`Sequence`] by answering two questions: how many items
//! it holds, and which item sits at a position. Iteration, reverse
//! iteration, random choice, membership and sorted traversal are free
//! functions written only against those capabilities, so they work for any
//! implementor.
//!
//! There is intentionally no `contains` capability: [`contains`] is a
//! sequential scan over [`iter`].

use crate::error::SequenceError;
use crate::slice::Slice;
use rand::Rng;
use std::iter::{FusedIterator, Rev};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// Length query plus positional access.
pub trait Sequence {
    type Item;

    /// Number of items held.
    fn size(&self) -> usize;

    /// Item at `position`. Negative positions count from the end, so any
    /// position in `[-size, size)` is valid.
    ///
    /// Must succeed for every position in `[0, size)`; [`SeqIter`] relies on
    /// it to honour the length it reports.
    fn get(&self, position: isize) -> Result<&Self::Item, SequenceError>;

    /// Owned copies of the items a range specification enumerates.
    ///
    /// Bounds are clamped, so an out-of-range slice is empty rather than an
    /// error.
    fn get_slice(&self, slice: &Slice) -> Result<Vec<Self::Item>, SequenceError>
    where
        Self::Item: Clone,
    {
        slice
            .indices(self.size())?
            .map(|i| self.get(i as isize).cloned())
            .collect()
    }

    /// Single entry point taking either one position or a range.
    fn select<P>(&self, position: P) -> Result<Selection<'_, Self::Item>, SequenceError>
    where
        P: Into<Position>,
        Self::Item: Clone,
    {
        match position.into() {
            Position::Index(i) => self.get(i).map(Selection::One),
            Position::Slice(s) => self.get_slice(&s).map(Selection::Many),
        }
    }
}

/// Map a possibly negative position onto `[0, size)`.
pub fn resolve_position(position: isize, size: usize) -> Result<usize, SequenceError> {
    let resolved = if position < 0 {
        size.checked_sub(position.unsigned_abs())
    } else {
        Some(position as usize)
    };
    resolved
        .filter(|&i| i < size)
        .ok_or(SequenceError::IndexOutOfRange { position, size })
}

/// Argument to [`Sequence::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Index(isize),
    Slice(Slice),
}

impl From<isize> for Position {
    fn from(i: isize) -> Self {
        Position::Index(i)
    }
}

impl From<Slice> for Position {
    fn from(s: Slice) -> Self {
        Position::Slice(s)
    }
}

impl From<Range<isize>> for Position {
    fn from(r: Range<isize>) -> Self {
        Position::Slice(r.into())
    }
}

impl From<RangeFrom<isize>> for Position {
    fn from(r: RangeFrom<isize>) -> Self {
        Position::Slice(r.into())
    }
}

impl From<RangeTo<isize>> for Position {
    fn from(r: RangeTo<isize>) -> Self {
        Position::Slice(r.into())
    }
}

impl From<RangeFull> for Position {
    fn from(r: RangeFull) -> Self {
        Position::Slice(r.into())
    }
}

/// Result of [`Sequence::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a, T> {
    One(&'a T),
    Many(Vec<T>),
}

impl<T> Sequence for [T] {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, position: isize) -> Result<&T, SequenceError> {
        let index = resolve_position(position, self.len())?;
        <[T]>::get(self, index).ok_or(SequenceError::IndexOutOfRange { position, size: self.len() })
    }

    fn get_slice(&self, slice: &Slice) -> Result<Vec<T>, SequenceError>
    where
        T: Clone,
    {
        Ok(slice.indices(self.len())?.map(|i| self[i].clone()).collect())
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, position: isize) -> Result<&T, SequenceError> {
        Sequence::get(self.as_slice(), position)
    }

    fn get_slice(&self, slice: &Slice) -> Result<Vec<T>, SequenceError>
    where
        T: Clone,
    {
        Sequence::get_slice(self.as_slice(), slice)
    }
}

/// Lazy traversal driven only by `size` and `get`.
///
/// Double-ended, so `.rev()` gives the reverse order. Calling [`iter`]
/// again restarts from the front.
pub struct SeqIter<'a, S: ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<S: ?Sized> Clone for SeqIter<'_, S> {
    fn clone(&self) -> Self {
        Self { seq: self.seq, front: self.front, back: self.back }
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for SeqIter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let seq = self.seq;
        let item = seq.get(self.front as isize);
        debug_assert!(item.is_ok(), "get failed inside [0, size)");
        let item = item.ok()?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for SeqIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let seq = self.seq;
        let item = seq.get(self.back as isize - 1);
        debug_assert!(item.is_ok(), "get failed inside [0, size)");
        let item = item.ok()?;
        self.back -= 1;
        Some(item)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for SeqIter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for SeqIter<'_, S> {}

/// Forward traversal, positions `0..size`.
pub fn iter<S: Sequence + ?Sized>(seq: &S) -> SeqIter<'_, S> {
    SeqIter { seq, front: 0, back: seq.size() }
}

/// Traversal in exact reverse of [`iter`].
pub fn reversed<S: Sequence + ?Sized>(seq: &S) -> Rev<SeqIter<'_, S>> {
    iter(seq).rev()
}

/// One item chosen uniformly at random.
pub fn choice<'a, S, R>(seq: &'a S, rng: &mut R) -> Result<&'a S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    R: Rng + ?Sized,
{
    let size = seq.size();
    if size == 0 {
        return Err(SequenceError::Empty);
    }
    let position = rng.random_range(0..size);
    tracing::debug!(position, size, "random choice");
    seq.get(position as isize)
}

/// Sequential scan for an item equal to `needle`, stopping at the first hit.
///
/// `needle` only needs to be comparable with the items, not of the same type.
pub fn contains<S, Q>(seq: &S, needle: &Q) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq<Q>,
    Q: ?Sized,
{
    iter(seq).any(|item| item == needle)
}

/// All items sorted ascending by `key`. Equal keys keep their original
/// relative order.
pub fn sorted_by_key<S, K, F>(seq: &S, key: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let mut items: Vec<S::Item> = iter(seq).cloned().collect();
    items.sort_by_key(key);
    items
}
