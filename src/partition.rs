use core::cmp::Ordering;

use crate::buffer::SortBuffer;

/// Outcome of a three-way partition of a window.
///
/// After the call the window is laid out as `[less][equal][greater]`, with `less` starting at
/// the window start and `greater` ending at the window end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Partitioned {
    pub(crate) less: usize,
    pub(crate) greater: usize,
    /// `false` if the pass found every element already on the correct side of the pivot and
    /// no element equal to it, meaning nothing was moved.
    pub(crate) swapped: bool,
}

/// Three-way partitions the window `[start, start + len)` around the pivot at `start`.
///
/// Requires `len >= 2`.
///
/// During the scan the window looks like this, with the pivot counted as the first element of
/// `equal_left`:
///
/// ```text
/// [equal_left][less][ unscanned ][greater][equal_right]
///  start      a     b         c          d            end
/// ```
///
/// `b` only moves right past elements `<=` pivot and `c` only moves left past elements `>=`
/// pivot. Once they cross, `less` is `[a, b)` and `greater` is `[b, d)`, and the equal zones
/// on both ends get block swapped into the middle.
pub(crate) fn partition<B: SortBuffer>(buf: &mut B, start: usize, len: usize) -> Partitioned {
    debug_assert!(len >= 2);

    let end = start + len;

    // `c` and `d` are exclusive, so they never underflow.
    let mut a = start + 1;
    let mut b = start + 1;
    let mut c = end;
    let mut d = end;

    let mut swapped = false;

    loop {
        while b < c {
            match buf.compare(b, start) {
                Ordering::Greater => break,
                Ordering::Equal => {
                    swapped = true;
                    buf.swap(a, b);
                    a += 1;
                }
                Ordering::Less => {}
            }
            b += 1;
        }

        while b < c {
            match buf.compare(c - 1, start) {
                Ordering::Less => break,
                Ordering::Equal => {
                    swapped = true;
                    buf.swap(c - 1, d - 1);
                    d -= 1;
                }
                Ordering::Greater => {}
            }
            c -= 1;
        }

        if b >= c {
            break;
        }

        // v[b] > pivot and v[c - 1] < pivot.
        buf.swap(b, c - 1);
        swapped = true;
        b += 1;
        c -= 1;
    }

    // Only a comparator that is not a total order can leave the cursors crossed, by at most one
    // element. Count that element as less so the zones stay disjoint.
    c = c.max(b);

    let equal_left = a - start;
    let less = b - a;
    let greater = d - c;
    let equal_right = end - d;

    // Move the left equal zone behind `less`. If `less` is the shorter of the two, swapping
    // just `less` elements to the front suffices, otherwise the whole equal zone moves to the
    // tail of `less`.
    let shift = equal_left.min(less);
    buf.swap_runs(start, b - shift, shift);

    let shift = greater.min(equal_right);
    buf.swap_runs(b, end - shift, shift);

    Partitioned {
        less,
        greater,
        swapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::SliceBuffer;

    fn check_partition(input: &[i32]) -> Partitioned {
        let mut v = input.to_vec();
        let mut buf = SliceBuffer::new(&mut v, |a: &i32, b: &i32| a.cmp(b));
        let result = partition(&mut buf, 0, input.len());

        let pivot = input[0];
        let (less, rest) = v.split_at(result.less);
        let (equal, greater) = rest.split_at(rest.len() - result.greater);

        assert!(less.iter().all(|x| *x < pivot), "{input:?} -> {v:?}");
        assert!(equal.iter().all(|x| *x == pivot), "{input:?} -> {v:?}");
        assert!(greater.iter().all(|x| *x > pivot), "{input:?} -> {v:?}");

        let mut sorted_in = input.to_vec();
        let mut sorted_out = v.clone();
        sorted_in.sort();
        sorted_out.sort();
        assert_eq!(sorted_in, sorted_out);

        result
    }

    #[test]
    fn three_way_layout() {
        check_partition(&[5, 1, 9, 5, 3, 7, 5, 5, 2, 8]);
        check_partition(&[5, 5, 5, 5]);
        check_partition(&[5, 1]);
        check_partition(&[5, 9]);
        check_partition(&[5, 5]);
        check_partition(&[0, 0, 1, 0, 1, 1, 0]);
        check_partition(&[3, 9, 8, 7, 6, 0, 1, 2]);
    }

    #[test]
    fn exhaustive_ternary() {
        // Every sequence over {0, 1, 2} up to length 9, covering every size combination of the
        // four zones.
        for len in 2..=9u32 {
            for code in 0..3usize.pow(len) {
                let mut rest = code;
                let input = (0..len)
                    .map(|_| {
                        let val = (rest % 3) as i32;
                        rest /= 3;
                        val
                    })
                    .collect::<Vec<_>>();

                check_partition(&input);
            }
        }
    }

    #[test]
    fn swapped_signal() {
        // Already split around the pivot and no duplicates of it.
        assert!(!check_partition(&[4, 1, 3, 2, 5, 7, 6]).swapped);
        assert!(!check_partition(&[4, 5, 6]).swapped);

        assert!(check_partition(&[4, 5, 1]).swapped);
        assert!(check_partition(&[4, 1, 4]).swapped);
    }

    #[test]
    fn all_equal_is_linear() {
        let len = 1000;
        let mut comps = 0;
        let mut v = vec![66; len];
        let mut buf = SliceBuffer::new(&mut v, |a: &i32, b: &i32| {
            comps += 1;
            a.cmp(b)
        });

        let result = partition(&mut buf, 0, len);
        drop(buf);

        assert_eq!(result.less, 0);
        assert_eq!(result.greater, 0);
        assert_eq!(comps, len - 1);
    }
}
