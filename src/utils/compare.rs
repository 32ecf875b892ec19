//! Fixed-time comparison for signature bytes

/// Compare two byte strings without short-circuiting on the first mismatch
///
/// Returns `false` early only when the lengths differ; signature and digest
/// lengths are public.
pub fn constant_time_equal(a: &[u8], b: &[u8]) -> bool {
    constant_time_eq::constant_time_eq(a, b)
}
