//! A Bloom filter: probabilistic set membership with no false negatives.
//!
//! ```
//! use spellbloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000).unwrap();
//! filter.add("apple");
//! assert!(filter.contains("apple"));
//! assert_eq!(filter.count(), 1);
//! ```

pub mod bits;
pub mod bloom_filters;
pub mod error;
pub mod hash;

pub use bloom_filters::{BloomFilter, BloomFilterBuilder, Filter};
pub use error::BloomError;
pub use hash::HashFn;
