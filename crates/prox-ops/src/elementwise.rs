//! Elementwise maps writing into a caller-provided output slice.

use prox_core::Real;

/// `y = a * x`
pub fn scale_into<T: Real>(y: &mut [T], x: &[T], a: T) {
    assert_eq!(y.len(), x.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = a * xi;
    }
}

/// `y += a * x`
pub fn axpy<T: Real>(y: &mut [T], a: T, x: &[T]) {
    assert_eq!(y.len(), x.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += a * xi;
    }
}

/// Soft thresholding, `y = sign(x) * max(|x| − t, 0)`.
pub fn soft_threshold_into<T: Real>(y: &mut [T], x: &[T], t: T) {
    assert_eq!(y.len(), x.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = xi.signum() * (xi.abs() - t).pos();
    }
}

/// Projection onto the box `[lo, hi]`.
pub fn clamp_into<T: Real>(y: &mut [T], x: &[T], lo: T, hi: T) {
    assert_eq!(y.len(), x.len());
    assert!(lo <= hi);
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = xi.max(lo).min(hi);
    }
}

pub fn fill<T: Real>(y: &mut [T], value: T) {
    for yi in y.iter_mut() {
        *yi = value;
    }
}

/// Whether every element lies in `[lo, hi]`.
pub fn all_within<T: Real>(x: &[T], lo: T, hi: T) -> bool {
    x.iter().all(|&v| v >= lo && v <= hi)
}
