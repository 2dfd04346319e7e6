//! Separable sums of proximable functions.
//!
//! Given components `f₁ … fₖ`, [`SeparableSum`] is the function
//! `g(x₁, …, xₖ) = f₁(x₁) + … + fₖ(xₖ)` over tuples of arrays. Evaluation,
//! proximal operators and gradients are delegated block by block and the
//! scalar results summed.
//!
//! ```ignore
//! let g = separable_sum!(NormL1::new(1.0), SqrNormL2::new(2.0));
//! let (ys, value) = g.prox(&[x1, x2], 0.5)?;
//! ```

pub mod args;
pub mod components;
pub mod execution;
pub mod separable_sum;
mod visitors;

pub use args::SeparableSumArgs;
pub use components::{Arity, ComponentVisitor, Components, DynComponent};
pub use execution::{Execution, Sequential, Threaded};
pub use prox_core::{FunctionInfo, Property, ProxError, ProximableFunction, Real, Result, StepSize};
pub use prox_threading::{ParallelismStrategy, ThreadPool};
pub use separable_sum::SeparableSum;

/// Builds a [`SeparableSum`] from a list of components, in order.
#[macro_export]
macro_rules! separable_sum {
    ($($f:expr),+ $(,)?) => {
        $crate::SeparableSum::new(($($f,)+))
    };
}
