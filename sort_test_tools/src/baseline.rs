//! Partial sorts built from the standard library, to check the test-suite against and to
//! compare with in benchmarks.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::PartialSort;

/// Selects the first position of the range, then the last one within the remainder, and sorts
/// what is between them.
pub struct StdSelectNth;

impl PartialSort for StdSelectNth {
    fn name() -> String {
        "rust_std_select_nth_unstable".into()
    }

    fn partial_sort<T>(arr: &mut [T], range: RangeInclusive<usize>)
    where
        T: Ord,
    {
        Self::partial_sort_by(arr, range, T::cmp);
    }

    fn partial_sort_by<T, F>(arr: &mut [T], range: RangeInclusive<usize>, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (first, last) = range.into_inner();

        arr.select_nth_unstable_by(first, &mut compare);
        if last > first {
            let rest = &mut arr[(first + 1)..];
            rest.select_nth_unstable_by(last - first - 1, &mut compare);
            rest[..(last - first - 1)].sort_unstable_by(&mut compare);
        }
    }
}

/// Ignores the range and sorts everything.
pub struct StdSortUnstable;

impl PartialSort for StdSortUnstable {
    fn name() -> String {
        "rust_std_sort_unstable".into()
    }

    fn partial_sort<T>(arr: &mut [T], _range: RangeInclusive<usize>)
    where
        T: Ord,
    {
        arr.sort_unstable();
    }

    fn partial_sort_by<T, F>(arr: &mut [T], _range: RangeInclusive<usize>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr.sort_unstable_by(compare);
    }
}
