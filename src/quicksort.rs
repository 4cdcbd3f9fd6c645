use crate::buffer::SortBuffer;
use crate::partition::partition;
use crate::pivot::choose_pivot;
use crate::range::Target;
use crate::smallsort::{insertion_sort, INSERTION_SORT_THRESHOLD};

/// Sorts `buf` far enough that every position in `target` holds its final element.
///
/// `target` must have been validated against `buf.len()`.
pub(crate) fn partial_sort<B: SortBuffer>(buf: &mut B, target: &Target) {
    let len = buf.len();
    debug_assert!(target.first() <= target.last() && target.last() < len);

    quicksort(buf, 0, len, target);
}

/// Sorts the window `[start, start + len)` far enough that every position in `target` holds
/// its final element.
///
/// The window is three-way partitioned around a pivot. A side is only visited if it overlaps
/// `target`. If both are visited the shorter one is handled by recursion and the loop continues
/// with the longer one, which keeps the recursion depth below `log2(len)` however lopsided the
/// partitions are. The `equal` zone is final as soon as the partition is done.
pub(crate) fn quicksort<B: SortBuffer>(
    buf: &mut B,
    mut start: usize,
    mut len: usize,
    target: &Target,
) {
    loop {
        if len < INSERTION_SORT_THRESHOLD {
            insertion_sort(buf, start, len);
            return;
        }

        let pivot_pos = choose_pivot(buf, start, len);
        buf.swap(start, pivot_pos);

        let parts = partition(buf, start, len);

        if !parts.swapped {
            // Nothing moved and the pivot is unique, a strong hint that the window is already
            // ordered. Insertion sort is linear for that case and correct for all others.
            insertion_sort(buf, start, len);
            return;
        }

        let greater_start = start + len - parts.greater;

        let visit_less = parts.less > 1 && target.overlaps(start, parts.less);
        let visit_greater = parts.greater > 1 && target.overlaps(greater_start, parts.greater);

        match (visit_less, visit_greater) {
            (true, true) if parts.less <= parts.greater => {
                quicksort(buf, start, parts.less, target);
                start = greater_start;
                len = parts.greater;
            }
            (true, true) => {
                quicksort(buf, greater_start, parts.greater, target);
                len = parts.less;
            }
            (true, false) => len = parts.less,
            (false, true) => {
                start = greater_start;
                len = parts.greater;
            }
            (false, false) => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use rand::prelude::*;

    use super::*;
    use crate::buffer::SliceBuffer;

    fn counted_quicksort(v: &mut [i32], first: usize, last: usize) -> usize {
        let mut comps = 0;
        let len = v.len();
        let target = Target::new(first..=last, len).unwrap();
        let mut buf = SliceBuffer::new(v, |a: &i32, b: &i32| -> Ordering {
            comps += 1;
            a.cmp(b)
        });

        partial_sort(&mut buf, &target);
        comps
    }

    #[test]
    fn all_equal_is_linear() {
        for len in [7, 41, 100, 1_000, 10_000] {
            let mut v = vec![66; len];
            let comps = counted_quicksort(&mut v, 0, len - 1);

            // Pivot selection takes at most 12 comparisons, the single partition pass len - 1.
            assert!(comps <= len + 11, "len: {len} comps: {comps}");
            assert!(v.iter().all(|x| *x == 66));
        }
    }

    #[test]
    fn few_distinct_is_linear() {
        let len = 10_000;
        let mut v = (0..len).map(|i| (i % 4) as i32).collect::<Vec<_>>();
        let comps = counted_quicksort(&mut v, 0, len - 1);

        // Every distinct key leaves one equal zone behind, four keys take four passes at most.
        assert!(comps <= 4 * (len + 12), "comps: {comps}");
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn narrow_range_does_less_work() {
        let len = 10_000;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let input = (0..len).map(|_| rng.gen::<i32>()).collect::<Vec<_>>();

        let mut full = input.clone();
        let full_comps = counted_quicksort(&mut full, 0, len - 1);

        let mut narrow = input.clone();
        let narrow_comps = counted_quicksort(&mut narrow, 5_000, 5_009);

        assert_eq!(&full[5_000..5_010], &narrow[5_000..5_010]);
        assert!(
            narrow_comps * 2 < full_comps,
            "narrow: {narrow_comps} full: {full_comps}"
        );
    }

    #[test]
    fn sorted_window_stays_untouched() {
        let mut v = (0..1_000).collect::<Vec<i32>>();
        let comps = counted_quicksort(&mut v, 0, 999);

        assert!(v.iter().copied().eq(0..1_000));
        // One pivot selection and one pass without swaps. The insertion sort afterwards only has
        // to move the pivot and the element it was swapped with back into place.
        assert!(comps < 4 * 1_000, "comps: {comps}");
    }
}
