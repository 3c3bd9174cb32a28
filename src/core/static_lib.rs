//! Static component: the fixed base value everything else is derived from.

/// Compile-time base value.
pub const BASE_VALUE: i32 = 5;

/// Returns the fixed base value. Pure, never fails.
pub fn compute_base() -> i32 {
    BASE_VALUE
}
