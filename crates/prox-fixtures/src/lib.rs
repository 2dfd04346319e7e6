//! Small proximable functions with closed-form operators, used to exercise
//! combinators in tests and benchmarks.
//!
//! Each fixture validates its own input lengths and step size, so tests can
//! check that combinators surface component errors untouched.

mod failing;
mod indicators;
mod norms;
mod smooth;

pub use failing::Failing;
pub use indicators::{IndBox, IndZero};
pub use norms::{NormL1, SqrNormL2};
pub use smooth::{Linear, Zero};

use prox_core::{ProxError, Real, Result};

/// Checks `y.len() == x.len()` and `γ > 0`.
pub(crate) fn check_prox_args<T: Real>(y: &[T], x: &[T], gamma: T) -> Result<()> {
    ProxError::check_len(x.len(), y.len())?;
    if !(gamma > T::ZERO) || !gamma.is_finite() {
        return Err(ProxError::InvalidStepSize(format!(
            "gamma must be positive and finite, got {gamma}"
        )));
    }
    Ok(())
}

/// Elementwise comparison with absolute tolerance; panics with the first
/// mismatching index.
pub fn approx_eq<T: Real>(a: &[T], b: &[T], tol: T) {
    assert_eq!(
        a.len(),
        b.len(),
        "length mismatch: {} vs {}",
        a.len(),
        b.len()
    );
    for (i, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        assert!(
            diff <= tol,
            "mismatch at index {}: {} vs {} (diff={})",
            i, x, y, diff
        );
    }
}
