use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// A partial sort under test.
///
/// `range` is always valid for `arr`, rejecting bad arguments is not something the shared
/// test-suite looks at.
pub trait PartialSort {
    fn name() -> String;

    fn partial_sort<T>(arr: &mut [T], range: RangeInclusive<usize>)
    where
        T: Ord;

    fn partial_sort_by<T, F>(arr: &mut [T], range: RangeInclusive<usize>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod baseline;
pub mod patterns;
pub mod types;

#[doc(hidden)]
pub use paste;
