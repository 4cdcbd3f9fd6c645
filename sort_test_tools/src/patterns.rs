//! Provides a set of patterns useful for testing and benchmarking partial sorts.
//! Currently limited to i32 values.
//!
//! All random patterns draw from the same per-process seed, so calling `random(4)` twice yields
//! the same values. Set `OVERRIDE_SEED` to reproduce a failure reported with a given seed.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_seed();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

/// `count` independent permutations of `0..len`, each one a shuffle drawn from the shared seed.
pub fn random_permutations(len: usize, count: usize) -> Vec<Vec<i32>> {
    let mut rng = new_seed();

    (0..count)
        .map(|_| {
            let mut perm = (0..len as i32).collect::<Vec<_>>();
            perm.shuffle(&mut rng);
            perm
        })
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saws(len, saw_count, |_| true)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saws(len, saw_count, |_| false)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saws(len, saw_count, |i| directions[i] == 0)
}

pub fn saw_mixed_range(len: usize, range: std::ops::Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    // Ascending and descending randomly picked, with length in `range`.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);

    let max_chunks = len / range.start;
    let directions = random_uniform(max_chunks + 1, 0..=1);
    let chunk_lens = random_uniform(max_chunks + 1, (range.start as i32)..(range.end as i32));

    let mut start = 0;
    for (direction, chunk_len) in directions.iter().zip(chunk_lens.iter()) {
        if start >= len {
            break;
        }

        let end = (start + *chunk_len as usize).min(len);
        sort_chunk(&mut vals[start..end], *direction == 0);
        start = end;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    sort_chunk(first_half, true);
    sort_chunk(second_half, false);

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every call draw a fresh seed, for benchmarks that must not see the same input twice.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if !USE_FIXED_SEED.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: Mutex<Option<u64>> = Mutex::new(None);

    *SEED.lock().unwrap().get_or_insert_with(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).unwrap())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, but printed by the test-suite for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn saws(len: usize, saw_count: usize, ascending: impl Fn(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        // Rounding can leave extra short chunks, they keep the direction of the last saw.
        sort_chunk(chunk, ascending(i.min(saw_count.max(1))));
    }

    vals
}

fn sort_chunk(chunk: &mut [i32], ascending: bool) {
    if ascending {
        chunk.sort_unstable();
    } else {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    }
}
