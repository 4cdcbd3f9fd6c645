use core::cmp::Ordering;

use crate::buffer::SortBuffer;

// Windows shorter than this are insertion sorted without picking a pivot.
pub(crate) const INSERTION_SORT_THRESHOLD: usize = 7;

/// Sorts the window `[start, start + len)` by shifting each element left past all greater
/// elements, one adjacent swap at a time.
///
/// Quadratic in the worst case but with the lowest overhead, and linear on sorted input. Only
/// reached for short windows and for windows a partition pass found to be in order already.
pub(crate) fn insertion_sort<B: SortBuffer>(buf: &mut B, start: usize, len: usize) {
    let end = start + len;

    for i in (start + 1)..end {
        let mut j = i;
        while j > start && buf.compare(j - 1, j) == Ordering::Greater {
            buf.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::SliceBuffer;

    #[test]
    fn sorts_only_the_window() {
        let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let mut buf = SliceBuffer::new(&mut v, |a: &i32, b: &i32| a.cmp(b));
        insertion_sort(&mut buf, 2, 5);

        assert_eq!(v, [9, 8, 3, 4, 5, 6, 7, 2, 1, 0]);
    }

    #[test]
    fn sorted_input_is_linear() {
        let mut comps = 0;
        let mut v = (0..100).collect::<Vec<i32>>();
        let mut buf = SliceBuffer::new(&mut v, |a: &i32, b: &i32| {
            comps += 1;
            a.cmp(b)
        });
        insertion_sort(&mut buf, 0, 100);
        drop(buf);

        assert_eq!(comps, 99);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_and_single() {
        let mut v = [3, 1];
        let mut buf = SliceBuffer::new(&mut v, |a: &i32, b: &i32| a.cmp(b));
        insertion_sort(&mut buf, 0, 0);
        insertion_sort(&mut buf, 1, 1);

        assert_eq!(v, [3, 1]);
    }
}
