use core::cmp::Ordering;

use crate::buffer::SortBuffer;

// Above this length the pivot is the median of three medians, a better estimate for large
// sub-slices at the cost of nine instead of three comparisons.
pub(crate) const NINTHER_THRESHOLD: usize = 40;

/// Selects a pivot for the window `[start, start + len)` and returns its absolute index.
///
/// Expects `len >= crate::smallsort::INSERTION_SORT_THRESHOLD`, smaller windows never get this
/// far.
pub(crate) fn choose_pivot<B: SortBuffer>(buf: &mut B, start: usize, len: usize) -> usize {
    debug_assert!(len >= crate::smallsort::INSERTION_SORT_THRESHOLD);

    let mut first = start;
    let mut mid = start + len / 2;
    let mut last = start + len - 1;

    if len > NINTHER_THRESHOLD {
        let d = len / 8;
        first = median3(buf, first, first + d, first + 2 * d);
        mid = median3(buf, mid - d, mid, mid + d);
        last = median3(buf, last - 2 * d, last - d, last);
    }

    median3(buf, first, mid, last)
}

/// Returns the index of the median of the elements at `a`, `b` and `c`.
fn median3<B: SortBuffer>(buf: &mut B, a: usize, b: usize, c: usize) -> usize {
    if buf.compare(a, b) == Ordering::Less {
        if buf.compare(b, c) == Ordering::Less {
            b
        } else if buf.compare(a, c) == Ordering::Less {
            c
        } else {
            a
        }
    } else if buf.compare(b, c) == Ordering::Greater {
        b
    } else if buf.compare(a, c) == Ordering::Less {
        a
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::SliceBuffer;

    fn median3_of(vals: [i32; 3]) -> i32 {
        let mut v = vals;
        let mut buf = SliceBuffer::new(&mut v, |a: &i32, b: &i32| a.cmp(b));
        let idx = median3(&mut buf, 0, 1, 2);
        v[idx]
    }

    #[test]
    fn median3_all_orders() {
        for vals in [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ] {
            assert_eq!(median3_of(vals), 2, "{vals:?}");
        }

        assert_eq!(median3_of([5, 5, 1]), 5);
        assert_eq!(median3_of([1, 5, 5]), 5);
        assert_eq!(median3_of([5, 1, 5]), 5);
        assert_eq!(median3_of([7, 7, 7]), 7);
    }

    #[test]
    fn pivot_stays_in_window() {
        for len in 7..300 {
            let mut v = (0..(len as i32 + 20)).rev().collect::<Vec<_>>();
            let mut buf = SliceBuffer::new(&mut v, |a: &i32, b: &i32| a.cmp(b));
            let pivot = choose_pivot(&mut buf, 10, len);
            assert!((10..10 + len).contains(&pivot));
        }
    }

    #[test]
    fn ninther_on_ascending_picks_middle() {
        let len = 1000;
        let mut v = (0..len as i32).collect::<Vec<_>>();
        let mut buf = SliceBuffer::new(&mut v, |a: &i32, b: &i32| a.cmp(b));

        assert_eq!(choose_pivot(&mut buf, 0, len), len / 2);
        assert_eq!(choose_pivot(&mut buf, 0, 20), 10);
    }
}
