use core::cmp::Ordering;

/// Indexed access to the elements being sorted.
///
/// The sort only ever compares two elements of the buffer and swaps elements in place, so this
/// is all it needs. Keeping the comparator inside the buffer lets the same algorithm run on
/// typed slices and on fixed-width byte records.
pub(crate) trait SortBuffer {
    fn len(&self) -> usize;

    fn compare(&mut self, a: usize, b: usize) -> Ordering;

    fn swap(&mut self, a: usize, b: usize);

    /// Swaps the `count` elements starting at `a` with the `count` elements starting at `b`.
    /// The two runs must not overlap.
    fn swap_runs(&mut self, a: usize, b: usize, count: usize);
}

/// A typed slice together with its comparison function.
pub(crate) struct SliceBuffer<'a, T, F> {
    v: &'a mut [T],
    compare: F,
}

impl<'a, T, F> SliceBuffer<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub(crate) fn new(v: &'a mut [T], compare: F) -> Self {
        Self { v, compare }
    }
}

impl<T, F> SortBuffer for SliceBuffer<'_, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        (self.compare)(&self.v[a], &self.v[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }

    #[inline]
    fn swap_runs(&mut self, a: usize, b: usize, count: usize) {
        swap_disjoint(self.v, a, b, count);
    }
}

/// A byte buffer interpreted as consecutive records of `width` bytes each.
pub(crate) struct ByteBuffer<'a, F> {
    bytes: &'a mut [u8],
    width: usize,
    compare: F,
}

impl<'a, F> ByteBuffer<'a, F>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    /// `bytes.len()` must be a multiple of `width` and `width` must be non-zero, the caller
    /// validates both.
    pub(crate) fn new(bytes: &'a mut [u8], width: usize, compare: F) -> Self {
        debug_assert!(width != 0 && bytes.len() % width == 0);

        Self {
            bytes,
            width,
            compare,
        }
    }

    #[cfg(test)]
    fn record(&self, i: usize) -> &[u8] {
        &self.bytes[i * self.width..(i + 1) * self.width]
    }
}

impl<F> SortBuffer for ByteBuffer<'_, F>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.bytes.len() / self.width
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        let width = self.width;
        let bytes = &*self.bytes;

        (self.compare)(
            &bytes[a * width..(a + 1) * width],
            &bytes[b * width..(b + 1) * width],
        )
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a != b {
            swap_disjoint(self.bytes, a * self.width, b * self.width, self.width);
        }
    }

    #[inline]
    fn swap_runs(&mut self, a: usize, b: usize, count: usize) {
        swap_disjoint(
            self.bytes,
            a * self.width,
            b * self.width,
            count * self.width,
        );
    }
}

/// Swaps `v[a..a + count]` with `v[b..b + count]`, the two runs must not overlap.
fn swap_disjoint<T>(v: &mut [T], a: usize, b: usize, count: usize) {
    if count == 0 {
        return;
    }

    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    debug_assert!(lo + count <= hi);

    let (left, right) = v.split_at_mut(hi);
    left[lo..lo + count].swap_with_slice(&mut right[..count]);
}
