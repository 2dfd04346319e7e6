//! Norm-based components.

use prox_core::{ProxError, ProximableFunction, Real, Result};
use prox_ops::dot::norm_sqr;
use prox_ops::elementwise::{scale_into, soft_threshold_into};
use prox_ops::sum::sum_abs;

use crate::check_prox_args;

/// `f(x) = λ‖x‖₁`
#[derive(Clone, Copy, Debug)]
pub struct NormL1<T> {
    pub lambda: T,
}

impl<T: Real> NormL1<T> {
    pub fn new(lambda: T) -> Self {
        assert!(lambda >= T::ZERO, "NormL1: lambda must be nonnegative");
        Self { lambda }
    }
}

impl<T: Real> ProximableFunction<T> for NormL1<T> {
    fn eval(&self, x: &[T]) -> Result<T> {
        Ok(self.lambda * sum_abs(x))
    }

    fn prox_into(&self, y: &mut [T], x: &[T], gamma: T) -> Result<T> {
        check_prox_args(y, x, gamma)?;
        soft_threshold_into(y, x, self.lambda * gamma);
        Ok(self.lambda * sum_abs(y))
    }

    fn prox_naive(&self, x: &[T], gamma: T) -> Result<(Vec<T>, T)> {
        let t = self.lambda * gamma;
        let y: Vec<T> = x
            .iter()
            .map(|&v| {
                if v > t {
                    v - t
                } else if v < -t {
                    v + t
                } else {
                    T::ZERO
                }
            })
            .collect();
        let value = self.lambda * y.iter().map(|v| v.abs()).sum::<T>();
        Ok((y, value))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn fun_name(&self) -> &'static str {
        "weighted L1 norm"
    }

    fn fun_dom(&self) -> &'static str {
        "ℝⁿ"
    }

    fn fun_expr(&self) -> &'static str {
        "x ↦ λ‖x‖₁"
    }

    fn fun_params(&self) -> String {
        format!("λ = {}", self.lambda)
    }
}

/// `f(x) = (λ/2)‖x‖²`
#[derive(Clone, Copy, Debug)]
pub struct SqrNormL2<T> {
    pub lambda: T,
}

impl<T: Real> SqrNormL2<T> {
    pub fn new(lambda: T) -> Self {
        assert!(lambda >= T::ZERO, "SqrNormL2: lambda must be nonnegative");
        Self { lambda }
    }

    fn half(&self) -> T {
        self.lambda / T::from_f64(2.0)
    }
}

impl<T: Real> ProximableFunction<T> for SqrNormL2<T> {
    fn eval(&self, x: &[T]) -> Result<T> {
        Ok(self.half() * norm_sqr(x))
    }

    fn prox_into(&self, y: &mut [T], x: &[T], gamma: T) -> Result<T> {
        check_prox_args(y, x, gamma)?;
        scale_into(y, x, T::ONE / (T::ONE + self.lambda * gamma));
        Ok(self.half() * norm_sqr(y))
    }

    fn gradient_into(&self, grad: &mut [T], x: &[T]) -> Result<T> {
        ProxError::check_len(x.len(), grad.len())?;
        scale_into(grad, x, self.lambda);
        Ok(self.half() * norm_sqr(x))
    }

    fn prox_naive(&self, x: &[T], gamma: T) -> Result<(Vec<T>, T)> {
        let y: Vec<T> = x.iter().map(|&v| v / (T::ONE + self.lambda * gamma)).collect();
        let value = self.half() * y.iter().map(|&v| v * v).sum::<T>();
        Ok((y, value))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_smooth(&self) -> bool {
        true
    }

    fn is_quadratic(&self) -> bool {
        true
    }

    fn is_generalized_quadratic(&self) -> bool {
        true
    }

    fn is_strongly_convex(&self) -> bool {
        self.lambda > T::ZERO
    }

    fn fun_name(&self) -> &'static str {
        "weighted squared Euclidean norm"
    }

    fn fun_dom(&self) -> &'static str {
        "ℝⁿ"
    }

    fn fun_expr(&self) -> &'static str {
        "x ↦ (λ/2)‖x‖²"
    }

    fn fun_params(&self) -> String {
        format!("λ = {}", self.lambda)
    }
}
