use std::fmt;

use tracing::debug;

use super::base::{calculate_k, calculate_m, estimate_false_positive_rate, Filter};
use crate::bits::{index_for, BitArray};
use crate::error::BloomError;
use crate::hash::{default_hash_functions, seeded_family, HashFn};

/// Bloom filter over a fixed bit array and a fixed, ordered set of hash
/// functions.
///
/// Every hash function picks one bit per key (`h(key) mod size`). `add` sets
/// those bits and `contains` checks them, so a key that was added is always
/// reported as present while a key that was not may still be reported as
/// present (a false positive).
pub struct BloomFilter {
    // number of bits in a Bloom filter
    m: usize,
    // number of completed insertions, duplicates included
    n: usize,

    storage: BitArray,
    hashers: Vec<HashFn>,
}

impl BloomFilter {
    /// Creates a filter of `capacity` bits using the four default hash
    /// functions (Jenkins, xxh3, SAX and SDBM).
    pub fn new(capacity: usize) -> Result<Self, BloomError> {
        Self::with_hash_functions(capacity, default_hash_functions())
    }

    /// Creates a filter of `capacity` bits bound to `hashers`.
    ///
    /// The functions are applied in the given order for both `add` and
    /// `contains`.
    pub fn with_hash_functions(capacity: usize, hashers: Vec<HashFn>) -> Result<Self, BloomError> {
        if hashers.is_empty() {
            return Err(BloomError::NoHashFunctions);
        }
        let storage = BitArray::zeroed(capacity)?;
        debug!(capacity, hashes = hashers.len(), "created bloom filter");
        Ok(Self {
            m: capacity,
            n: 0,
            storage,
            hashers,
        })
    }

    /// Sizes a filter for `expected_items` keys at the false positive rate
    /// `f`, using seeded xxh3 hash functions.
    ///
    /// n -- number of elements to insert
    /// f -- the false positive rate
    pub fn with_rate(expected_items: usize, f: f64) -> Result<Self, BloomError> {
        if expected_items == 0 {
            return Err(BloomError::ZeroCapacity);
        }
        if !(f > 0.0 && f < 1.0) {
            return Err(BloomError::InvalidRate { rate: f });
        }
        let m = calculate_m(f, expected_items).max(1);
        let k = calculate_k(m, expected_items);
        Self::with_hash_functions(m, seeded_family(k))
    }

    pub fn builder() -> BloomFilterBuilder {
        BloomFilterBuilder::default()
    }

    fn indices<'a>(&'a self, key: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        self.hashers.iter().map(move |h| index_for(h(key), self.m))
    }

    /// Records `key`. Always counts as an insertion, even if every bit the
    /// key maps to was already set.
    pub fn add<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) {
        let key = key.as_ref();
        for h in &self.hashers {
            self.storage.set(index_for(h(key), self.m));
        }
        self.n += 1;
    }

    /// `false` means `key` was never added. `true` means it probably was.
    pub fn contains<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        let key = key.as_ref();
        for idx in self.indices(key) {
            if !self.storage.get(idx) {
                return false;
            }
        }
        true
    }

    pub fn count(&self) -> usize {
        self.n
    }

    pub fn size(&self) -> usize {
        self.m
    }

    pub fn hash_count(&self) -> usize {
        self.hashers.len()
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.storage.count_ones()
    }

    /// count * hash_count / size
    pub fn load_factor(&self) -> f64 {
        self.n as f64 * self.hashers.len() as f64 / self.m as f64
    }

    /// Expected false positive rate at the current load.
    pub fn false_positive_rate(&self) -> f64 {
        estimate_false_positive_rate(self.m, self.n, self.hashers.len())
    }
}

impl Filter for BloomFilter {
    fn add(&mut self, key: &[u8]) {
        BloomFilter::add(self, key)
    }

    fn contains(&self, key: &[u8]) -> bool {
        BloomFilter::contains(self, key)
    }

    fn count(&self) -> usize {
        self.n
    }

    fn size(&self) -> usize {
        self.m
    }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("size", &self.m)
            .field("count", &self.n)
            .field("hash_count", &self.hashers.len())
            .field("bits_set", &self.bits_set())
            .finish()
    }
}

/// Step-by-step construction of a [`BloomFilter`].
///
/// Without any explicit hash function the default four are used.
#[derive(Default)]
pub struct BloomFilterBuilder {
    capacity: usize,
    hashers: Vec<HashFn>,
}

impl BloomFilterBuilder {
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn hash_function<F>(mut self, f: F) -> Self
    where
        F: Fn(&[u8]) -> u64 + Send + Sync + 'static,
    {
        self.hashers.push(Box::new(f));
        self
    }

    pub fn hash_functions(mut self, fs: impl IntoIterator<Item = HashFn>) -> Self {
        self.hashers.extend(fs);
        self
    }

    pub fn build(self) -> Result<BloomFilter, BloomError> {
        let hashers = if self.hashers.is_empty() {
            default_hash_functions()
        } else {
            self.hashers
        };
        BloomFilter::with_hash_functions(self.capacity, hashers)
    }
}
