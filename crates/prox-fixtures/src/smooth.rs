//! Smooth components with affine gradients.

use prox_core::{ProxError, ProximableFunction, Real, Result};
use prox_ops::dot::dot;
use prox_ops::elementwise::{axpy, fill};

use crate::check_prox_args;

/// `f(x) = 0`
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl<T: Real> ProximableFunction<T> for Zero {
    fn eval(&self, _x: &[T]) -> Result<T> {
        Ok(T::ZERO)
    }

    fn prox_into(&self, y: &mut [T], x: &[T], gamma: T) -> Result<T> {
        check_prox_args(y, x, gamma)?;
        y.copy_from_slice(x);
        Ok(T::ZERO)
    }

    fn gradient_into(&self, grad: &mut [T], x: &[T]) -> Result<T> {
        ProxError::check_len(x.len(), grad.len())?;
        fill(grad, T::ZERO);
        Ok(T::ZERO)
    }

    fn prox_naive(&self, x: &[T], _gamma: T) -> Result<(Vec<T>, T)> {
        Ok((x.to_vec(), T::ZERO))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_affine(&self) -> bool {
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

    fn fun_name(&self) -> &'static str {
        "zero function"
    }

    fn fun_dom(&self) -> &'static str {
        "ℝⁿ"
    }

    fn fun_expr(&self) -> &'static str {
        "x ↦ 0"
    }
}

/// `f(x) = ⟨c, x⟩`
#[derive(Clone, Debug)]
pub struct Linear<T> {
    pub c: Vec<T>,
}

impl<T: Real> Linear<T> {
    pub fn new(c: Vec<T>) -> Self {
        Self { c }
    }
}

impl<T: Real> ProximableFunction<T> for Linear<T> {
    fn eval(&self, x: &[T]) -> Result<T> {
        ProxError::check_len(self.c.len(), x.len())?;
        Ok(dot(&self.c, x))
    }

    fn prox_into(&self, y: &mut [T], x: &[T], gamma: T) -> Result<T> {
        ProxError::check_len(self.c.len(), x.len())?;
        check_prox_args(y, x, gamma)?;
        y.copy_from_slice(x);
        axpy(y, -gamma, &self.c);
        Ok(dot(&self.c, y))
    }

    fn gradient_into(&self, grad: &mut [T], x: &[T]) -> Result<T> {
        ProxError::check_len(self.c.len(), x.len())?;
        ProxError::check_len(x.len(), grad.len())?;
        grad.copy_from_slice(&self.c);
        Ok(dot(&self.c, x))
    }

    fn prox_naive(&self, x: &[T], gamma: T) -> Result<(Vec<T>, T)> {
        ProxError::check_len(self.c.len(), x.len())?;
        let y: Vec<T> = x.iter().zip(&self.c).map(|(&xi, &ci)| xi - gamma * ci).collect();
        let value = y.iter().zip(&self.c).map(|(&yi, &ci)| yi * ci).sum::<T>();
        Ok((y, value))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_affine(&self) -> bool {
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

    fn fun_name(&self) -> &'static str {
        "linear function"
    }

    fn fun_dom(&self) -> &'static str {
        "ℝⁿ"
    }

    fn fun_expr(&self) -> &'static str {
        "x ↦ ⟨c, x⟩"
    }

    fn fun_params(&self) -> String {
        format!("c = {:?}", self.c)
    }
}
