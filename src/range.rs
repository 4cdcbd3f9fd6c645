use core::ops::{Bound, RangeBounds, RangeInclusive};

use crate::InvalidArgument;

/// The final sorted positions requested by the caller, as an inclusive index interval.
///
/// These denote positions in the sorted output, not a window into the input. Partitioning only
/// ever moves elements within the sub-slice being processed, so a sub-slice that does not
/// intersect this interval can be left alone for the rest of the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Target {
    first: usize,
    last: usize,
}

impl Target {
    /// Validates `range` against a slice of `len` elements.
    pub(crate) fn new<R>(range: R, len: usize) -> Result<Self, InvalidArgument>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            // Excluding usize::MAX leaves nothing, saturating keeps that an empty range.
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };

        let end = match range.end_bound() {
            Bound::Included(&end) => {
                end.checked_add(1)
                    .ok_or(InvalidArgument::RangeOutOfBounds {
                        start,
                        end: usize::MAX,
                        len,
                    })?
            }
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };

        if start >= end {
            return Err(InvalidArgument::EmptyRange { start, end });
        }

        if end > len {
            return Err(InvalidArgument::RangeOutOfBounds { start, end, len });
        }

        Ok(Self {
            first: start,
            last: end - 1,
        })
    }

    #[inline]
    pub(crate) fn first(&self) -> usize {
        self.first
    }

    #[inline]
    pub(crate) fn last(&self) -> usize {
        self.last
    }

    /// Returns `true` if the window `[start, start + len)` holds at least one target position.
    #[inline]
    pub(crate) fn overlaps(&self, start: usize, len: usize) -> bool {
        len != 0 && start <= self.last && self.first < start + len
    }
}

/// Translates an `offset`/`count` pair, as used by `LIMIT offset count` style queries, into the
/// inclusive range to pass to one of the partial sort functions.
///
/// A negative `offset` counts as `0`, a negative `count` selects everything up to the last
/// element, and the end of the window is clamped to the last element. Returns `None` if the
/// window selects nothing, either because `offset` is at or past `len` or because `count` is
/// zero.
///
/// ```
/// use partial_sort::limit_range;
///
/// assert_eq!(limit_range(10, 2, 3), Some(2..=4));
/// assert_eq!(limit_range(10, -5, 3), Some(0..=2));
/// assert_eq!(limit_range(10, 8, 100), Some(8..=9));
/// assert_eq!(limit_range(10, 4, -1), Some(4..=9));
/// assert_eq!(limit_range(10, 10, 1), None);
/// ```
pub fn limit_range(len: usize, offset: i64, count: i64) -> Option<RangeInclusive<usize>> {
    let start = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
    if start >= len || count == 0 {
        return None;
    }

    let last = len - 1;
    let end = match usize::try_from(count) {
        Ok(count) => start.saturating_add(count - 1).min(last),
        // Negative, or more than the address space can hold. Either way up to the end.
        Err(_) => last,
    };

    Some(start..=end)
}
