#[cfg(feature = "certora")]
pub mod certora;

/// Adds two signed 64-bit integers.
/// Returns the two's-complement sum, wrapping modulo 2^64 on overflow.
/// Never panics, regardless of `overflow-checks`.
#[inline]
pub const fn sum(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}
