//! # fnv1a32
//!
//! An incremental FNV-1a 32-bit hash accumulator for stable fingerprinting.
//!
//! This crate provides a single primitive: a running 32-bit hash that typed
//! values are folded into one at a time. The same sequence of adds produces
//! the same value on every platform, compiler version, and run, which makes
//! it suitable for cache keys, stable IDs, and fingerprints of structured
//! records. It is not a cryptographic hash.
//!
//! ## Main items
//!
//! - [`Fnv1a32`] - the accumulator; `add_*` methods fold values in
//! - [`hash_byte`], [`hash_i16`], [`hash_i32`], [`hash_i64`], [`hash_f32`],
//!   [`hash_f64`], [`hash_bool`], [`hash_str`], [`hash_bytes`] - one-shot
//!   convenience functions
//! - [`Fnv1a32Builder`] - [`core::hash::BuildHasher`] for keying standard
//!   collections with FNV-1a
//!
//! Every operation is a `const fn`, so stable IDs can be computed at compile
//! time:
//!
//! ```
//! use fnv1a32::hash_str;
//!
//! const CUTOFF_ID: u32 = hash_str("cutoff");
//! ```
//!
//! The crate is `no_std`; the default `std` feature only adds the
//! [`Fnv1a32Map`] and [`Fnv1a32Set`] type aliases.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod hash;
pub mod hasher;

pub use hash::{
    hash_bool, hash_byte, hash_bytes, hash_f32, hash_f64, hash_i16, hash_i32, hash_i64, hash_str,
    Fnv1a32, FNV_OFFSET, FNV_PRIME,
};
pub use hasher::Fnv1a32Builder;
#[cfg(feature = "std")]
pub use hasher::{Fnv1a32Map, Fnv1a32Set};
