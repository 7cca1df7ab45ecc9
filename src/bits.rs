use bit_vec::BitVec;

use crate::error::BloomError;

/// Fixed-length bit array backing a Bloom filter.
///
/// The length never changes after construction and bits are only ever set,
/// never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    storage: BitVec,
}

/// Maps a hash value onto a bit position in an array of `capacity` bits.
///
/// `capacity` must be non-zero; every `BitArray` guarantees that.
#[inline]
pub fn index_for(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

impl BitArray {
    /// Allocates `capacity` clear bits.
    ///
    /// A size the allocator refuses outright is reported as
    /// `AllocationFailed`. Running out of memory while the array is being
    /// filled aborts, like any other allocation.
    pub fn zeroed(capacity: usize) -> Result<Self, BloomError> {
        if capacity == 0 {
            return Err(BloomError::ZeroCapacity);
        }

        // ask for the block storage up front so an impossible size is an
        // error; the probe is released before the array itself is built
        let mut probe: Vec<u32> = Vec::new();
        probe
            .try_reserve_exact(capacity.div_ceil(32))
            .map_err(|_| BloomError::AllocationFailed { capacity })?;
        drop(probe);

        let storage = BitVec::from_elem(capacity, false);
        Ok(Self { storage })
    }

    pub fn set(&mut self, idx: usize) {
        self.storage.set(idx, true);
    }

    pub fn get(&self, idx: usize) -> bool {
        self.storage.get(idx) == Some(true)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.storage.iter().filter(|bit| *bit).count()
    }
}
