mod base;
mod classical_bloom_filter;

pub use self::base::{calculate_k, calculate_m, estimate_false_positive_rate, Filter};
pub use self::classical_bloom_filter::{BloomFilter, BloomFilterBuilder};
