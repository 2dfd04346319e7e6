//! Step sizes passed to proximal operators.

use crate::error::{ProxError, Result};
use crate::real::Real;

/// Step size `γ` for a proximal computation over several components.
///
/// A single value applies to every component; a per-component vector must
/// have exactly one entry per component.
#[derive(Debug, Clone, PartialEq)]
pub enum StepSize<T> {
    Uniform(T),
    PerComponent(Vec<T>),
}

impl<T: Real> StepSize<T> {
    /// Step size for component `index`.
    ///
    /// # Panics
    ///
    /// Panics if a per-component vector has no entry at `index`; call
    /// [`check_arity`](Self::check_arity) first.
    pub fn at(&self, index: usize) -> T {
        match self {
            StepSize::Uniform(gamma) => *gamma,
            StepSize::PerComponent(gammas) => gammas[index],
        }
    }

    /// Fails with `ArityMismatch` when a per-component vector does not have
    /// `expected` entries.
    pub fn check_arity(&self, expected: usize) -> Result<()> {
        match self {
            StepSize::Uniform(_) => Ok(()),
            StepSize::PerComponent(gammas) if gammas.len() == expected => Ok(()),
            StepSize::PerComponent(gammas) => Err(ProxError::ArityMismatch {
                what: "step sizes",
                expected,
                found: gammas.len(),
            }),
        }
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, StepSize::Uniform(_))
    }
}

impl<T: Real> From<T> for StepSize<T> {
    fn from(gamma: T) -> Self {
        StepSize::Uniform(gamma)
    }
}

impl<T: Real> From<Vec<T>> for StepSize<T> {
    fn from(gammas: Vec<T>) -> Self {
        StepSize::PerComponent(gammas)
    }
}

impl<T: Real> From<&[T]> for StepSize<T> {
    fn from(gammas: &[T]) -> Self {
        StepSize::PerComponent(gammas.to_vec())
    }
}

impl<T: Real, const N: usize> From<[T; N]> for StepSize<T> {
    fn from(gammas: [T; N]) -> Self {
        StepSize::PerComponent(gammas.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_applies_everywhere() {
        let step = StepSize::from(0.5f64);
        assert!(step.is_uniform());
        assert_eq!(step.at(0), 0.5);
        assert_eq!(step.at(7), 0.5);
        assert!(step.check_arity(3).is_ok());
    }

    #[test]
    fn per_component_is_indexed() {
        let step = StepSize::from([0.1f64, 0.2, 0.3]);
        assert_eq!(step.at(1), 0.2);
        assert!(step.check_arity(3).is_ok());
        assert_eq!(
            step.check_arity(2),
            Err(ProxError::ArityMismatch {
                what: "step sizes",
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    #[should_panic]
    fn per_component_panics_past_the_end() {
        let step = StepSize::PerComponent(vec![0.1f64, 0.2]);
        step.at(2);
    }
}
