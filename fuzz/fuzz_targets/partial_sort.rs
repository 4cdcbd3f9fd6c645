#![no_main]

use libfuzzer_sys::fuzz_target;

// The first four bytes pick the range, the rest are the values.
fuzz_target!(|data: &[u8]| {
    if data.len() <= 4 {
        return;
    }

    let (header, values) = data.split_at(4);
    let mut v = values.to_vec();
    let len = v.len();

    let a = u16::from_le_bytes([header[0], header[1]]) as usize % len;
    let b = u16::from_le_bytes([header[2], header[3]]) as usize % len;
    let (first, last) = (a.min(b), a.max(b));

    let mut sorted = v.clone();
    sorted.sort_unstable();

    partial_sort::partial_sort(&mut v, first..=last).unwrap();

    assert_eq!(v[first..=last], sorted[first..=last]);
    assert!(v[..first].iter().all(|x| *x <= sorted[first]));
    assert!(v[(last + 1)..].iter().all(|x| *x >= sorted[last]));

    v.sort_unstable();
    assert_eq!(v, sorted);
});
