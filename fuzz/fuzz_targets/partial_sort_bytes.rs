#![no_main]

use libfuzzer_sys::fuzz_target;

// The first byte picks the record width, the next four the range, the rest are the records.
// Records compare by their first byte only, so the remaining bytes check that records move
// as a whole.
fuzz_target!(|data: &[u8]| {
    if data.len() <= 5 {
        return;
    }

    let width = (data[0] % 16) as usize + 1;
    let header = &data[1..5];
    let payload = &data[5..];

    let mut bytes = payload[..(payload.len() - payload.len() % width)].to_vec();
    let len = bytes.len() / width;
    if len == 0 {
        return;
    }

    let a = u16::from_le_bytes([header[0], header[1]]) as usize % len;
    let b = u16::from_le_bytes([header[2], header[3]]) as usize % len;
    let (first, last) = (a.min(b), a.max(b));

    let mut sorted = bytes.chunks_exact(width).collect::<Vec<_>>();
    sorted.sort_by_key(|record| record[0]);
    let sorted_keys = sorted.iter().map(|record| record[0]).collect::<Vec<_>>();

    let mut records_before = bytes.chunks_exact(width).map(<[u8]>::to_vec).collect::<Vec<_>>();
    records_before.sort();

    partial_sort::partial_sort_bytes(&mut bytes, width, first..=last, |x, y| x[0].cmp(&y[0]))
        .unwrap();

    let keys = bytes.chunks_exact(width).map(|record| record[0]).collect::<Vec<_>>();
    assert_eq!(keys[first..=last], sorted_keys[first..=last]);
    assert!(keys[..first].iter().all(|k| *k <= sorted_keys[first]));
    assert!(keys[(last + 1)..].iter().all(|k| *k >= sorted_keys[last]));

    let mut records_after = bytes.chunks_exact(width).map(<[u8]>::to_vec).collect::<Vec<_>>();
    records_after.sort();
    assert_eq!(records_before, records_after);
});
