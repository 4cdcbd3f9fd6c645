//! Range-limited partial sorting.
//!
//! Sorting a whole slice to look at a handful of its positions does far more work than needed.
//! The functions in this crate take the range of *sorted positions* the caller is interested in
//! and only finish the work for those: afterwards every position inside the range holds exactly
//! the element a full sort would have put there, while elements outside of the range are only
//! guaranteed to be on the correct side of it.
//!
//! ```
//! let mut v = [5, 3, 8, 1, 9, 2];
//!
//! // The third smallest element.
//! partial_sort::partial_sort(&mut v, 2..=2).unwrap();
//! assert_eq!(v[2], 3);
//! assert!(v[..2].iter().all(|x| *x <= 3));
//! assert!(v[3..].iter().all(|x| *x >= 3));
//! ```
//!
//! # Current implementation
//!
//! The algorithm is the quicksort from Bentley and McIlroy's "Engineering a Sort Function",
//! extended with a pruning rule: a sub-slice produced by partitioning is only visited if it
//! overlaps the requested range. Partitioning never moves an element out of the sub-slice it
//! is working on, so a sub-slice that does not contain any requested position can't affect the
//! result and is skipped.
//!
//! - Pivots are the median of three elements, or for sub-slices longer than 40 elements the
//!   median of three such medians (Tukey's ninther).
//! - Partitioning is three-way, elements equal to the pivot end up in the middle and are never
//!   looked at again. Inputs with many duplicates partition in linear time.
//! - Sub-slices shorter than 7 elements are insertion sorted. So are sub-slices where a
//!   partition pass did not have to move anything, since that usually means they are sorted
//!   already.
//! - Of the two sides left after partitioning, the shorter one is sorted recursively and the
//!   longer one by looping, so the recursion depth stays logarithmic.
//!
//! The sort is in-place, does not allocate, and is not stable. The worst case is quadratic on
//! adversarial inputs.

use core::cmp::Ordering;
use core::mem;
use core::ops::RangeBounds;

mod buffer;
mod error;
mod partition;
mod pivot;
mod quicksort;
mod range;
mod smallsort;

pub use error::InvalidArgument;
pub use range::limit_range;

use buffer::{ByteBuffer, SliceBuffer};
use range::Target;

/// Partially sorts the slice, so that every position in `range` holds the element it would hold
/// if the whole slice were sorted.
///
/// Elements before `range` are all less than or equal to the elements in it, elements after
/// `range` are all greater than or equal to them. Their order among themselves is unspecified.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and does work close to proportional to `v.len()` plus the cost of sorting `range` for
/// typical inputs.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `range` is empty or extends past the end of `v`. `v` is not
/// modified in that case. A range like `..` on an empty slice is empty and rejected.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2, 9, 0];
///
/// // The three smallest elements, in order.
/// partial_sort::partial_sort(&mut v, ..3).unwrap();
/// assert_eq!(v[..3], [-5, -3, 0]);
///
/// // Everything.
/// partial_sort::partial_sort(&mut v, ..).unwrap();
/// assert_eq!(v, [-5, -3, 0, 1, 2, 4, 9]);
/// ```
#[inline]
pub fn partial_sort<T, R>(v: &mut [T], range: R) -> Result<(), InvalidArgument>
where
    T: Ord,
    R: RangeBounds<usize>,
{
    partial_sort_by(v, range, T::cmp)
}

/// Partially sorts the slice with a comparator function, so that every position in `range`
/// holds the element it would hold if the whole slice were sorted by `compare`.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but `v` still holds
/// exactly the elements it held before the call. The same is true if `compare` panics. An order
/// is a total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `range` is empty or extends past the end of `v`. `v` is not
/// modified in that case.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
///
/// // The two largest elements, reverse sorting.
/// partial_sort::partial_sort_by(&mut v, 0..2, |a, b| b.cmp(a)).unwrap();
/// assert_eq!(v[..2], [5, 4]);
///
/// let mut floats = [5f64, 4.0, 1.0, 3.0, 2.0];
/// partial_sort::partial_sort_by(&mut floats, 1..=3, |a, b| a.partial_cmp(b).unwrap()).unwrap();
/// assert_eq!(floats[1..=3], [2.0, 3.0, 4.0]);
/// ```
pub fn partial_sort_by<T, F, R>(v: &mut [T], range: R, compare: F) -> Result<(), InvalidArgument>
where
    F: FnMut(&T, &T) -> Ordering,
    R: RangeBounds<usize>,
{
    let target = Target::new(range, v.len())?;

    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return Ok(());
    }

    quicksort::partial_sort(&mut SliceBuffer::new(v, compare), &target);

    Ok(())
}

/// Partially sorts the slice with a key extraction function, so that every position in `range`
/// holds the element it would hold if the whole slice were sorted by key.
///
/// The key function is called multiple times per element, if it is expensive compute the keys
/// up front.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `range` is empty or extends past the end of `v`. `v` is not
/// modified in that case.
///
/// # Examples
///
/// ```
/// let mut v = [-5i32, 4, 1, -3, 2];
///
/// partial_sort::partial_sort_by_key(&mut v, ..=1, |k| k.abs()).unwrap();
/// assert_eq!(v[..2], [1, 2]);
/// ```
#[inline]
pub fn partial_sort_by_key<T, K, F, R>(
    v: &mut [T],
    range: R,
    mut f: F,
) -> Result<(), InvalidArgument>
where
    F: FnMut(&T) -> K,
    K: Ord,
    R: RangeBounds<usize>,
{
    partial_sort_by(v, range, |a, b| f(a).cmp(&f(b)))
}

/// Partially sorts a buffer of fixed-width records, so that every record position in `range`
/// holds the record it would hold if all records were sorted by `compare`.
///
/// `bytes` is treated as `bytes.len() / width` consecutive records of `width` bytes each, and
/// `range` is given in records, not bytes. `compare` is called with two records of exactly
/// `width` bytes. Records are moved by swapping their bytes, so this works for any plain-data
/// layout the caller can compare from its byte representation.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `width` is zero, if `bytes.len()` is not a multiple of
/// `width`, or if `range` is empty or extends past the last record. `bytes` is not modified in
/// that case.
///
/// # Examples
///
/// ```
/// // (id: u8, score: u16 le) records, ordered by score.
/// let mut records = [1, 30, 0, 2, 10, 0, 3, 50, 0, 4, 20, 0];
///
/// partial_sort::partial_sort_bytes(&mut records, 3, ..1, |a, b| {
///     u16::from_le_bytes([a[1], a[2]]).cmp(&u16::from_le_bytes([b[1], b[2]]))
/// })
/// .unwrap();
/// assert_eq!(records[..3], [2, 10, 0]);
/// ```
pub fn partial_sort_bytes<F, R>(
    bytes: &mut [u8],
    width: usize,
    range: R,
    compare: F,
) -> Result<(), InvalidArgument>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
    R: RangeBounds<usize>,
{
    if width == 0 {
        return Err(InvalidArgument::ZeroWidth);
    }

    if bytes.len() % width != 0 {
        return Err(InvalidArgument::UnalignedBuffer {
            len: bytes.len(),
            width,
        });
    }

    let target = Target::new(range, bytes.len() / width)?;

    quicksort::partial_sort(&mut ByteBuffer::new(bytes, width, compare), &target);

    Ok(())
}
