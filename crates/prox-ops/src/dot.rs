//! Inner products and squared Euclidean norms.

use prox_core::Real;

pub fn dot<T: Real>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len());
    let mut sum = T::ZERO;
    for i in 0..a.len() {
        sum += a[i] * b[i];
    }
    sum
}

/// `‖a‖²`
pub fn norm_sqr<T: Real>(a: &[T]) -> T {
    let mut sum = T::ZERO;
    for &v in a {
        sum += v * v;
    }
    sum
}
