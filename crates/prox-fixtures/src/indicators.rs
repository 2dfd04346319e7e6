//! Indicator functions of simple sets.

use prox_core::{ProximableFunction, Real, Result};
use prox_ops::elementwise::{all_within, clamp_into, fill};

use crate::check_prox_args;

/// Indicator of the box `{x : lo ≤ xᵢ ≤ hi}`.
#[derive(Clone, Copy, Debug)]
pub struct IndBox<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: Real> IndBox<T> {
    pub fn new(lo: T, hi: T) -> Self {
        assert!(lo <= hi, "IndBox: lo must not exceed hi");
        Self { lo, hi }
    }
}

impl<T: Real> ProximableFunction<T> for IndBox<T> {
    fn eval(&self, x: &[T]) -> Result<T> {
        if all_within(x, self.lo, self.hi) {
            Ok(T::ZERO)
        } else {
            Ok(T::INFINITY)
        }
    }

    fn prox_into(&self, y: &mut [T], x: &[T], gamma: T) -> Result<T> {
        check_prox_args(y, x, gamma)?;
        clamp_into(y, x, self.lo, self.hi);
        Ok(T::ZERO)
    }

    fn prox_naive(&self, x: &[T], _gamma: T) -> Result<(Vec<T>, T)> {
        let y = x
            .iter()
            .map(|&v| {
                if v < self.lo {
                    self.lo
                } else if v > self.hi {
                    self.hi
                } else {
                    v
                }
            })
            .collect();
        Ok((y, T::ZERO))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_set(&self) -> bool {
        true
    }

    fn is_singleton(&self) -> bool {
        self.lo == self.hi
    }

    fn is_generalized_quadratic(&self) -> bool {
        true
    }

    fn fun_name(&self) -> &'static str {
        "indicator of a box"
    }

    fn fun_dom(&self) -> &'static str {
        "ℝⁿ"
    }

    fn fun_expr(&self) -> &'static str {
        "x ↦ 0 if all(lo ≤ x ≤ hi) else +∞"
    }

    fn fun_params(&self) -> String {
        format!("lo = {}, hi = {}", self.lo, self.hi)
    }
}

/// Indicator of the origin `{0}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndZero;

impl<T: Real> ProximableFunction<T> for IndZero {
    fn eval(&self, x: &[T]) -> Result<T> {
        if x.iter().all(|&v| v == T::ZERO) {
            Ok(T::ZERO)
        } else {
            Ok(T::INFINITY)
        }
    }

    fn prox_into(&self, y: &mut [T], x: &[T], gamma: T) -> Result<T> {
        check_prox_args(y, x, gamma)?;
        fill(y, T::ZERO);
        Ok(T::ZERO)
    }

    fn prox_naive(&self, x: &[T], _gamma: T) -> Result<(Vec<T>, T)> {
        Ok((vec![T::ZERO; x.len()], T::ZERO))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_set(&self) -> bool {
        true
    }

    fn is_singleton(&self) -> bool {
        true
    }

    fn is_cone(&self) -> bool {
        true
    }

    fn is_affine(&self) -> bool {
        true
    }

    fn is_generalized_quadratic(&self) -> bool {
        true
    }

    fn fun_name(&self) -> &'static str {
        "indicator of the zero cone"
    }

    fn fun_dom(&self) -> &'static str {
        "ℝⁿ"
    }

    fn fun_expr(&self) -> &'static str {
        "x ↦ 0 if all(x = 0) else +∞"
    }
}
