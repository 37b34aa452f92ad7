//! Wraparound for looping offsets

/// Wrap `value` into `[0, modulus)`
///
/// Uses `((x mod m) + m) mod m` so negative inputs land in range too.
/// A non-positive or non-finite modulus returns 0.0, as does a non-finite
/// value.
pub fn wrap_offset(value: f32, modulus: f32) -> f32 {
    if !(modulus.is_finite() && modulus > 0.0) || !value.is_finite() {
        return 0.0;
    }
    ((value % modulus) + modulus) % modulus
}
