//! Scalar reductions in a fixed left-to-right order.

use prox_core::Real;

/// Sum in index order. The order is fixed so repeated reductions over the
/// same values are bit-identical.
pub fn sum<T: Real>(values: &[T]) -> T {
    let mut total = T::ZERO;
    for &v in values {
        total += v;
    }
    total
}

pub fn sum_abs<T: Real>(values: &[T]) -> T {
    let mut total = T::ZERO;
    for &v in values {
        total += v.abs();
    }
    total
}
