//! Hash functions a Bloom filter can be built with.
//!
//! Any deterministic `&[u8] -> u64` function works. The quality of the spread
//! over the output range decides how close the filter gets to its theoretical
//! false positive rate.

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// A hash function bound into a filter at construction time.
pub type HashFn = Box<dyn Fn(&[u8]) -> u64 + Send + Sync>;

/// Bob Jenkins' one-at-a-time hash.
pub fn jenkins(key: &[u8]) -> u64 {
    let mut h: u32 = 0;
    for &b in key {
        h = h.wrapping_add(b as u32);
        h = h.wrapping_add(h << 10);
        h ^= h >> 6;
    }
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h = h.wrapping_add(h << 15);
    h as u64
}

/// 64-bit xxh3 with the default secret.
pub fn xxh3(key: &[u8]) -> u64 {
    xxh3_64(key)
}

/// Shift-add-xor hash.
pub fn sax(key: &[u8]) -> u64 {
    let mut h: u32 = 0;
    for &b in key {
        h ^= (h << 5).wrapping_add(h >> 2).wrapping_add(b as u32);
    }
    h as u64
}

/// The sdbm database hash.
pub fn sdbm(key: &[u8]) -> u64 {
    let mut h: u32 = 0;
    for &b in key {
        h = (b as u32)
            .wrapping_add(h << 6)
            .wrapping_add(h << 16)
            .wrapping_sub(h);
    }
    h as u64
}

/// The four functions `BloomFilter::new` binds, in application order.
pub fn default_hash_functions() -> Vec<HashFn> {
    let fns: [HashFn; 4] = [
        Box::new(jenkins),
        Box::new(xxh3),
        Box::new(sax),
        Box::new(sdbm),
    ];
    Vec::from(fns)
}

/// xxh3 keyed with `seed`; distinct seeds give independent functions.
pub fn seeded(seed: u64) -> HashFn {
    Box::new(move |key: &[u8]| xxh3_64_with_seed(key, seed))
}

/// `k` independent seeded functions, seeds `0..k`.
pub fn seeded_family(k: usize) -> Vec<HashFn> {
    (0..k as u64).map(seeded).collect()
}
