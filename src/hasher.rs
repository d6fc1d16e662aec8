//! Standard library hashing integration.
//!
//! Lets the accumulator double as a [`core::hash::Hasher`] so FNV-1a can key
//! ordinary `HashMap`s and hash `#[derive(Hash)]` types. `finish` zero-extends
//! the 32-bit state to the `u64` the trait requires; the mixing itself is the
//! same byte-at-a-time primitive used everywhere else.

use core::hash::{BuildHasher, Hasher};

use crate::hash::Fnv1a32;

impl Hasher for Fnv1a32 {
    #[inline]
    fn finish(&self) -> u64 {
        self.state() as u64
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.add_bytes(bytes);
    }
}

/// A zero-sized [`BuildHasher`] that produces fresh [`Fnv1a32`] accumulators.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use fnv1a32::Fnv1a32Builder;
///
/// let mut map: HashMap<&str, u32, Fnv1a32Builder> = HashMap::default();
/// map.insert("gain", 0);
/// assert_eq!(map.get("gain"), Some(&0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a32Builder;

impl BuildHasher for Fnv1a32Builder {
    type Hasher = Fnv1a32;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        Fnv1a32::new()
    }
}

/// A `HashMap` keyed by FNV-1a.
#[cfg(feature = "std")]
pub type Fnv1a32Map<K, V> = std::collections::HashMap<K, V, Fnv1a32Builder>;

/// A `HashSet` keyed by FNV-1a.
#[cfg(feature = "std")]
pub type Fnv1a32Set<T> = std::collections::HashSet<T, Fnv1a32Builder>;
