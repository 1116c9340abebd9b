//! Range specifications: an optional `start`, `stop` and `step` resolved
//! against a concrete length.
//!
//! Negative bounds count from the end. Bounds past either end are clamped,
//! so a range can come out empty but never fails. Only a zero step is
//! rejected.

use crate::error::SequenceError;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A `(start, stop, step)` triple, each part optional.
///
/// ```
/// use french_deck::slice::Slice;
///
/// let aces = Slice::from(12..).step(13);
/// assert_eq!(aces.indices(52).unwrap().collect::<Vec<_>>(), vec![12, 25, 38, 51]);
///
/// let reversed = Slice::full().step(-1);
/// assert_eq!(reversed.indices(3).unwrap().collect::<Vec<_>>(), vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Every position, in order.
    pub const fn full() -> Self {
        Self::new(None, None, None)
    }

    /// Replace the step.
    pub const fn step(self, step: isize) -> Self {
        Self { step: Some(step), ..self }
    }

    /// Resolve against `len`, yielding the positions in enumeration order.
    pub fn indices(&self, len: usize) -> Result<SliceIndices, SequenceError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SequenceError::ZeroStep);
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);

        let (start, stop) = if step > 0 {
            (
                clamp_bound(self.start, len, 0, 0, len),
                clamp_bound(self.stop, len, len, 0, len),
            )
        } else {
            // -1 here means "before position 0", not "last"
            (
                clamp_bound(self.start, len, len - 1, -1, len - 1),
                clamp_bound(self.stop, len, -1, -1, len - 1),
            )
        };

        let span = if step > 0 { stop - start } else { start - stop };
        let remaining = if span > 0 { (span as usize - 1) / step.unsigned_abs() + 1 } else { 0 };

        tracing::trace!(start, stop, step, remaining, "resolved slice");
        Ok(SliceIndices { next: start, step, remaining })
    }
}

fn clamp_bound(bound: Option<isize>, len: isize, default: isize, lower: isize, upper: isize) -> isize {
    match bound {
        None => default,
        Some(i) if i < 0 => {
            let shifted = i.saturating_add(len);
            if shifted < 0 {
                lower
            } else {
                shifted
            }
        }
        Some(i) if i >= len => upper,
        Some(i) => i,
    }
}

impl From<Range<isize>> for Slice {
    fn from(r: Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), None)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

/// Positions produced by [`Slice::indices`].
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next as usize;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.step;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}
