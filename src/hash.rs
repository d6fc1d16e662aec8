//! The FNV-1a accumulator and its one-shot convenience functions.
//!
//! Everything in this module reduces to a single mixing step — XOR one byte
//! into the running state, then multiply by the FNV prime with wrapping
//! arithmetic. The typed `add_*` operations only decide how a value is split
//! into bytes; the split is always explicit (least-significant byte first),
//! so the result never depends on the host's endianness.

/// FNV-1a 32-bit offset basis: the initial accumulator state.
pub const FNV_OFFSET: u32 = 2166136261;

/// FNV-1a 32-bit prime: the per-byte multiplier.
pub const FNV_PRIME: u32 = 16777619;

// =============================================================================
// Fnv1a32 - incremental accumulator
// =============================================================================

/// An incremental FNV-1a 32-bit hash accumulator.
///
/// Feeds typed values into a single running 32-bit state, producing the same
/// output for the same sequence of adds on every platform and compiler
/// version. Composite fingerprints are built by calling multiple `add_*`
/// operations in a fixed order chosen by the caller.
///
/// # Properties
///
/// - **Deterministic**: same add sequence, same result — always
/// - **Portable**: byte decomposition is explicit little-endian-style,
///   independent of host endianness
/// - **Const-friendly**: every operation can be evaluated at compile time
/// - **Plain value**: `Copy`, no allocations, no interior mutability
///
/// This is a non-cryptographic hash: it gives no preimage or collision
/// resistance and must not be used where an adversary controls the input.
///
/// # Examples
///
/// ```
/// use fnv1a32::Fnv1a32;
///
/// let mut h = Fnv1a32::new();
/// h.add_str("sample-rate");
/// h.add_i32(44100);
/// h.add_bool(true);
/// let key = h.state();
///
/// // Same sequence, same fingerprint.
/// let mut h2 = Fnv1a32::new();
/// h2.add_str("sample-rate");
/// h2.add_i32(44100);
/// h2.add_bool(true);
/// assert_eq!(key, h2.state());
/// ```
///
/// # Thread safety
///
/// An accumulator is a plain mutable value with no internal locking. Give
/// each concurrent task its own copy rather than sharing one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fnv1a32 {
    state: u32,
}

impl Fnv1a32 {
    /// Create a fresh accumulator at the FNV-1a offset basis.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { state: FNV_OFFSET }
    }

    /// Get the current 32-bit hash state.
    ///
    /// The state is the accumulator's public representation; it can be stored
    /// and later restored with [`Fnv1a32::from`].
    #[inline]
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// The core mixing step. This is the only place hashing logic exists;
    /// every `add_*` operation reduces to calls to this.
    #[inline]
    const fn mix(&mut self, byte: u8) {
        self.state = (self.state ^ byte as u32).wrapping_mul(FNV_PRIME);
    }

    /// Mix four bytes, least-significant first.
    #[inline]
    const fn mix_u32(&mut self, v: u32) {
        self.mix(v as u8);
        self.mix((v >> 8) as u8);
        self.mix((v >> 16) as u8);
        self.mix((v >> 24) as u8);
    }

    /// Mix eight bytes, least-significant first.
    #[inline]
    const fn mix_u64(&mut self, v: u64) {
        self.mix(v as u8);
        self.mix((v >> 8) as u8);
        self.mix((v >> 16) as u8);
        self.mix((v >> 24) as u8);
        self.mix((v >> 32) as u8);
        self.mix((v >> 40) as u8);
        self.mix((v >> 48) as u8);
        self.mix((v >> 56) as u8);
    }

    /// Add a single byte.
    #[inline]
    pub const fn add_byte(&mut self, v: u8) {
        self.mix(v);
    }

    /// Add a 16-bit signed integer (two bytes, least-significant first).
    #[inline]
    pub const fn add_i16(&mut self, v: i16) {
        let v = v as u16;
        self.mix(v as u8);
        self.mix((v >> 8) as u8);
    }

    /// Add a 32-bit signed integer (four bytes, least-significant first).
    #[inline]
    pub const fn add_i32(&mut self, v: i32) {
        self.mix_u32(v as u32);
    }

    /// Add a 64-bit signed integer (eight bytes, least-significant first).
    #[inline]
    pub const fn add_i64(&mut self, v: i64) {
        self.mix_u64(v as u64);
    }

    /// Add a 32-bit float via its IEEE-754 bit pattern.
    ///
    /// Note that `0.0` and `-0.0` have distinct bit patterns and therefore
    /// hash differently, and every NaN payload hashes to its own value.
    #[inline]
    pub const fn add_f32(&mut self, v: f32) {
        self.mix_u32(v.to_bits());
    }

    /// Add a 64-bit float via its IEEE-754 bit pattern.
    #[inline]
    pub const fn add_f64(&mut self, v: f64) {
        self.mix_u64(v.to_bits());
    }

    /// Add a boolean as a single byte, `1` for `true` and `0` for `false`.
    #[inline]
    pub const fn add_bool(&mut self, v: bool) {
        self.mix(v as u8);
    }

    /// Add every byte of a slice, in order.
    ///
    /// Adding an empty slice leaves the state unchanged.
    #[inline]
    pub const fn add_bytes(&mut self, v: &[u8]) {
        let mut i = 0;
        while i < v.len() {
            self.mix(v[i]);
            i += 1;
        }
    }

    /// Add a string as its UTF-8 bytes, in order.
    ///
    /// The encoding is fixed to UTF-8 so that the same text fingerprints
    /// identically on every platform.
    #[inline]
    pub const fn add_str(&mut self, v: &str) {
        self.add_bytes(v.as_bytes());
    }

    /// Add another accumulator's state, decomposed as an unsigned 32-bit
    /// integer (four bytes, least-significant first).
    ///
    /// Equivalent to `self.add_i32(other.state() as i32)`.
    #[inline]
    pub const fn add_hash(&mut self, other: Fnv1a32) {
        self.mix_u32(other.state);
    }
}

impl Default for Fnv1a32 {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<u32> for Fnv1a32 {
    /// Restore an accumulator from a previously observed state.
    #[inline]
    fn from(state: u32) -> Self {
        Self { state }
    }
}

impl From<Fnv1a32> for u32 {
    #[inline]
    fn from(hash: Fnv1a32) -> Self {
        hash.state
    }
}

// =============================================================================
// One-shot constructors
// =============================================================================

/// Hash a single byte from scratch.
///
/// Equivalent to [`Fnv1a32::new`] followed by one [`Fnv1a32::add_byte`].
///
/// # Examples
///
/// ```
/// use fnv1a32::hash_byte;
///
/// const TAG: u32 = hash_byte(0x2a);
/// assert_eq!(TAG, hash_byte(0x2a));
/// ```
#[inline]
#[must_use]
pub const fn hash_byte(v: u8) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_byte(v);
    h.state()
}

/// Hash a 16-bit signed integer from scratch.
#[inline]
#[must_use]
pub const fn hash_i16(v: i16) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_i16(v);
    h.state()
}

/// Hash a 32-bit signed integer from scratch.
#[inline]
#[must_use]
pub const fn hash_i32(v: i32) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_i32(v);
    h.state()
}

/// Hash a 64-bit signed integer from scratch.
#[inline]
#[must_use]
pub const fn hash_i64(v: i64) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_i64(v);
    h.state()
}

/// Hash a 32-bit float from scratch, via its IEEE-754 bit pattern.
#[inline]
#[must_use]
pub const fn hash_f32(v: f32) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_f32(v);
    h.state()
}

/// Hash a 64-bit float from scratch, via its IEEE-754 bit pattern.
#[inline]
#[must_use]
pub const fn hash_f64(v: f64) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_f64(v);
    h.state()
}

/// Hash a boolean from scratch.
#[inline]
#[must_use]
pub const fn hash_bool(v: bool) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_bool(v);
    h.state()
}

/// Hash a string's UTF-8 bytes from scratch.
///
/// # Examples
///
/// ```
/// use fnv1a32::hash_str;
///
/// // Usable as a compile-time stable ID.
/// const GAIN_ID: u32 = hash_str("gain");
/// assert_eq!(GAIN_ID, hash_str("gain"));
/// ```
#[inline]
#[must_use]
pub const fn hash_str(v: &str) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_str(v);
    h.state()
}

/// Hash a byte slice from scratch.
#[inline]
#[must_use]
pub const fn hash_bytes(v: &[u8]) -> u32 {
    let mut h = Fnv1a32::new();
    h.add_bytes(v);
    h.state()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_offset_basis() {
        assert_eq!(Fnv1a32::new().state(), 2166136261);
        assert_eq!(Fnv1a32::default().state(), FNV_OFFSET);
    }

    #[test]
    fn test_hash_byte_zero() {
        // (2166136261 ^ 0) * 16777619 mod 2^32
        assert_eq!(hash_byte(0x00), 84696351);
    }

    #[test]
    fn test_hash_byte_known_vector() {
        // Published FNV-1a vector for "a"
        assert_eq!(hash_byte(97), 0xe40c292c);
    }

    #[test]
    fn test_empty_inputs_leave_state_unchanged() {
        assert_eq!(hash_str(""), 2166136261);
        assert_eq!(hash_bytes(&[]), Fnv1a32::new().state());
    }

    #[test]
    fn test_str_matches_byte_path() {
        assert_eq!(hash_str("a"), hash_byte(97));
        assert_eq!(hash_str("ab"), hash_bytes(b"ab"));
    }

    #[test]
    fn test_str_known_vectors() {
        assert_eq!(hash_str("a"), 0xe40c292c);
        assert_eq!(hash_str("foobar"), 0xbf9cf968);
        assert_eq!(hash_str("hello"), 0x4f9f2cab);
    }

    #[test]
    fn test_byte_order_matters() {
        assert_eq!(hash_bytes(&[0x01, 0x02]), 3983810698);
        assert_eq!(hash_bytes(&[0x02, 0x01]), 1551600396);
        assert_ne!(hash_bytes(&[0x01, 0x02]), hash_bytes(&[0x02, 0x01]));
    }

    #[test]
    fn test_type_width_matters() {
        // Same numeric value, different byte counts mixed.
        assert_eq!(hash_i32(1), 4218009092);
        assert_eq!(hash_i64(1), 1048580676);
        assert_ne!(hash_i32(1), hash_i64(1));
    }

    #[test]
    fn test_i16_decomposition() {
        // 0x1234 mixes 0x34 then 0x12.
        assert_eq!(hash_i16(0x1234), 2816718819);
        assert_eq!(hash_i16(0x1234), hash_bytes(&[0x34, 0x12]));
    }

    #[test]
    fn test_negative_integers() {
        // Sign-extended two's complement bytes, least-significant first.
        assert_eq!(hash_i16(-1), 3508452515);
        assert_eq!(hash_i32(-1), 3809873841);
        assert_eq!(hash_i64(-1), 1823345245);
        assert_eq!(hash_i16(-1), hash_bytes(&[0xff, 0xff]));
    }

    #[test]
    fn test_f32_zero_is_zero_bit_pattern() {
        // IEEE-754 +0.0 is all-zero bits.
        assert_eq!(hash_f32(0.0), hash_bytes(&[0, 0, 0, 0]));
        assert_eq!(hash_f32(0.0), 1268118805);
        assert_eq!(hash_f64(0.0), 2615243109);
    }

    #[test]
    fn test_float_known_vectors() {
        // 1.0f32 is 0x3f800000, mixed as 00 00 80 3f.
        assert_eq!(hash_f32(1.0), 458782360);
        assert_eq!(hash_f32(1.0), hash_bytes(&[0x00, 0x00, 0x80, 0x3f]));
        assert_eq!(hash_f64(1.0), 2355796088);
    }

    #[test]
    fn test_negative_zero_differs() {
        assert_ne!(hash_f32(0.0), hash_f32(-0.0));
        assert_ne!(hash_f64(0.0), hash_f64(-0.0));
    }

    #[test]
    fn test_bool() {
        assert_eq!(hash_bool(false), hash_byte(0));
        assert_eq!(hash_bool(true), hash_byte(1));
        assert_eq!(hash_bool(true), 67918732);
        assert_ne!(hash_bool(true), hash_bool(false));
    }

    #[test]
    fn test_one_shot_matches_incremental() {
        let mut h = Fnv1a32::new();
        h.add_i64(-42);
        assert_eq!(hash_i64(-42), h.state());

        let mut h = Fnv1a32::new();
        h.add_f64(2.5);
        assert_eq!(hash_f64(2.5), h.state());

        let mut h = Fnv1a32::new();
        h.add_str("cutoff");
        assert_eq!(hash_str("cutoff"), h.state());
    }

    #[test]
    fn test_incremental_concatenation() {
        // Adding "ab" in one call or byte by byte is the same sequence.
        let mut h = Fnv1a32::new();
        h.add_byte(b'a');
        h.add_byte(b'b');
        assert_eq!(h.state(), hash_str("ab"));
        assert_eq!(h.state(), 1294271946);
    }

    #[test]
    fn test_add_hash_matches_add_i32() {
        let mut inner = Fnv1a32::new();
        inner.add_str("nested");

        let mut a = Fnv1a32::new();
        a.add_hash(inner);
        let mut b = Fnv1a32::new();
        b.add_i32(inner.state() as i32);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_add_hash_known_vector() {
        // Folding a fresh accumulator's basis state into another fresh one.
        let mut h = Fnv1a32::new();
        h.add_hash(Fnv1a32::new());
        assert_eq!(h.state(), 2755012384);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(hash_str("stable-id"), hash_str("stable-id"));
        assert_eq!(hash_f64(0.1), hash_f64(0.1));
    }

    #[test]
    fn test_const_eval() {
        const ID: u32 = hash_str("gain");
        assert_eq!(ID, hash_str("gain"));

        const CHAINED: u32 = {
            let mut h = Fnv1a32::new();
            h.add_str("channel:");
            h.add_i16(3);
            h.state()
        };
        let mut h = Fnv1a32::new();
        h.add_str("channel:");
        h.add_i16(3);
        assert_eq!(CHAINED, h.state());
    }

    #[test]
    fn test_copy_semantics() {
        let mut a = Fnv1a32::new();
        a.add_str("shared prefix");
        let mut b = a;
        a.add_byte(1);
        b.add_byte(2);
        assert_ne!(a.state(), b.state());
    }

    #[test]
    fn test_u32_round_trip() {
        let mut h = Fnv1a32::new();
        h.add_str("resume me");
        let saved: u32 = h.into();
        let mut restored = Fnv1a32::from(saved);
        restored.add_byte(7);
        h.add_byte(7);
        assert_eq!(restored, h);
    }
}
