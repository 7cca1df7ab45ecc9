use thiserror::Error;

/// Errors returned while constructing a Bloom filter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BloomError {
    #[error("bloom filter capacity must be greater than zero")]
    ZeroCapacity,

    #[error("bloom filter needs at least one hash function")]
    NoHashFunctions,

    #[error("could not allocate a bit array of {capacity} bits")]
    AllocationFailed { capacity: usize },

    #[error("invalid false positive rate: {rate} (must be between 0 and 1)")]
    InvalidRate { rate: f64 },
}
