//! The component-function trait.

use std::sync::Arc;

use crate::error::{ProxError, Result};
use crate::info::FunctionInfo;
use crate::property::Property;
use crate::real::Real;

/// A function that can be evaluated and whose proximal operator can be
/// computed.
///
/// Points are flat slices of `T`; multi-dimensional variables are passed
/// row-major. Implementations validate their own input lengths and report
/// failures through [`ProxError`].
///
/// # Proximal operator
///
/// For step size `γ > 0`, `prox_γf(x) = argmin_y f(y) + ‖y − x‖² / (2γ)`.
/// Both `prox_into` and `prox_naive` return `f` evaluated at the proximal
/// point alongside the point itself.
pub trait ProximableFunction<T: Real> {
    /// Evaluate `f(x)`.
    fn eval(&self, x: &[T]) -> Result<T>;

    /// Write `prox_γf(x)` into `y` and return `f(y)`.
    ///
    /// `y` and `x` must have the same length.
    fn prox_into(&self, y: &mut [T], x: &[T], gamma: T) -> Result<T>;

    /// Write `∇f(x)` into `grad` and return `f(x)`.
    ///
    /// Nonsmooth functions may leave this unimplemented.
    fn gradient_into(&self, grad: &mut [T], x: &[T]) -> Result<T> {
        let _ = (grad, x);
        Err(ProxError::Unsupported("gradient"))
    }

    /// Reference proximal operator that allocates its output.
    ///
    /// Implementations should override this with a direct, unoptimized
    /// formula so it can be checked against `prox_into`.
    fn prox_naive(&self, x: &[T], gamma: T) -> Result<(Vec<T>, T)> {
        let mut y = vec![T::ZERO; x.len()];
        let value = self.prox_into(&mut y, x, gamma)?;
        Ok((y, value))
    }

    // ── Predicates ──────────────────────────────────────────────────

    /// Whether `prox_into` is exact rather than an approximation.
    fn is_prox_accurate(&self) -> bool {
        true
    }

    fn is_convex(&self) -> bool {
        false
    }

    /// Whether `f` is the indicator of a set.
    fn is_set(&self) -> bool {
        false
    }

    fn is_singleton(&self) -> bool {
        false
    }

    fn is_cone(&self) -> bool {
        false
    }

    fn is_affine(&self) -> bool {
        false
    }

    fn is_smooth(&self) -> bool {
        false
    }

    fn is_quadratic(&self) -> bool {
        false
    }

    fn is_generalized_quadratic(&self) -> bool {
        false
    }

    fn is_strongly_convex(&self) -> bool {
        false
    }

    /// Generic form of the `is_*` predicates.
    fn has(&self, property: Property) -> bool {
        property.holds_for::<T, Self>(self)
    }

    // ── Metadata ────────────────────────────────────────────────────

    fn fun_name(&self) -> &'static str {
        FunctionInfo::NOT_APPLICABLE
    }

    fn fun_dom(&self) -> &'static str {
        FunctionInfo::NOT_APPLICABLE
    }

    fn fun_expr(&self) -> &'static str {
        FunctionInfo::NOT_APPLICABLE
    }

    fn fun_params(&self) -> String {
        FunctionInfo::NOT_APPLICABLE.to_string()
    }

    fn info(&self) -> FunctionInfo {
        FunctionInfo {
            name: self.fun_name(),
            domain: self.fun_dom(),
            expression: self.fun_expr(),
            params: self.fun_params(),
        }
    }
}

macro_rules! forward_proximable {
    ($($ptr:ty),*) => {
        $(
            impl<T: Real, F: ProximableFunction<T> + ?Sized> ProximableFunction<T> for $ptr {
                fn eval(&self, x: &[T]) -> Result<T> {
                    (**self).eval(x)
                }
                fn prox_into(&self, y: &mut [T], x: &[T], gamma: T) -> Result<T> {
                    (**self).prox_into(y, x, gamma)
                }
                fn gradient_into(&self, grad: &mut [T], x: &[T]) -> Result<T> {
                    (**self).gradient_into(grad, x)
                }
                fn prox_naive(&self, x: &[T], gamma: T) -> Result<(Vec<T>, T)> {
                    (**self).prox_naive(x, gamma)
                }
                fn is_prox_accurate(&self) -> bool {
                    (**self).is_prox_accurate()
                }
                fn is_convex(&self) -> bool {
                    (**self).is_convex()
                }
                fn is_set(&self) -> bool {
                    (**self).is_set()
                }
                fn is_singleton(&self) -> bool {
                    (**self).is_singleton()
                }
                fn is_cone(&self) -> bool {
                    (**self).is_cone()
                }
                fn is_affine(&self) -> bool {
                    (**self).is_affine()
                }
                fn is_smooth(&self) -> bool {
                    (**self).is_smooth()
                }
                fn is_quadratic(&self) -> bool {
                    (**self).is_quadratic()
                }
                fn is_generalized_quadratic(&self) -> bool {
                    (**self).is_generalized_quadratic()
                }
                fn is_strongly_convex(&self) -> bool {
                    (**self).is_strongly_convex()
                }
                fn fun_name(&self) -> &'static str {
                    (**self).fun_name()
                }
                fn fun_dom(&self) -> &'static str {
                    (**self).fun_dom()
                }
                fn fun_expr(&self) -> &'static str {
                    (**self).fun_expr()
                }
                fn fun_params(&self) -> String {
                    (**self).fun_params()
                }
            }
        )*
    };
}

forward_proximable!(&F, Box<F>, Arc<F>);
