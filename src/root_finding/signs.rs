//! Sign utilities for bracket algorithms.
//! - `same_sign` : `true` if both values are strictly positive or strictly negative

/// Returns `true` if `x` and `y` are both nonzero and share a sign.
///
/// Equivalent to `x * y > 0.0` without the underflow of the product.
/// A zero on either side counts as a sign change.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}
