//! The separable sum `g(x₁, …, xₖ) = f₁(x₁) + … + fₖ(xₖ)`.

use core::marker::PhantomData;
use std::sync::Arc;

use prox_core::{FunctionInfo, Property, ProxError, Real, Result, StepSize};
use prox_ops::sum::sum;
use prox_threading::ThreadPool;
use tracing::{debug, warn};

use crate::args::SeparableSumArgs;
use crate::components::Components;
use crate::execution::{Execution, Sequential, Threaded};
use crate::visitors::{Describe, Eval, Gradient, Prox, ProxNaive};

/// Sum of component functions, each acting on its own block of variables.
///
/// Points are tuples of arrays: one slice per component, in component order.
/// Every operation checks that the number of blocks equals the number of
/// components before calling any component, then delegates block `i` to
/// component `i` and sums the returned values in index order.
///
/// Component errors are returned unchanged. When a component fails, output
/// blocks of components that already ran may have been written.
///
/// `E` decides where components run. [`SeparableSum::new`] builds a
/// [`Sequential`] sum, which places no thread-safety bounds on the
/// components; [`SeparableSum::with_args`] and [`SeparableSum::with_pool`]
/// build a [`Threaded`] one, which needs `C: Sync`.
#[derive(Clone, Debug)]
pub struct SeparableSum<C, T, E = Sequential> {
    components: C,
    execution: E,
    _scalar: PhantomData<fn() -> T>,
}

impl<C, T> SeparableSum<C, T>
where
    C: Components<T>,
    T: Real,
{
    /// Sequential separable sum over `components`, a tuple, array or vector.
    pub fn new(components: C) -> Self {
        Self {
            components,
            execution: Sequential,
            _scalar: PhantomData,
        }
    }
}

impl<C, T> SeparableSum<C, T, Threaded>
where
    C: Components<T> + Sync,
    T: Real,
{
    pub fn with_args(components: C, args: SeparableSumArgs) -> Result<Self> {
        Ok(Self {
            components,
            execution: Threaded::new(args)?,
            _scalar: PhantomData,
        })
    }

    /// Parallel separable sum running on a pool shared with other callers.
    pub fn with_pool(components: C, pool: Arc<ThreadPool>) -> Result<Self> {
        Ok(Self {
            components,
            execution: Threaded::with_pool(pool)?,
            _scalar: PhantomData,
        })
    }
}

impl<C, T, E> SeparableSum<C, T, E>
where
    C: Components<T>,
    T: Real,
{
    pub fn components(&self) -> &C {
        &self.components
    }

    pub fn into_components(self) -> C {
        self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.arity()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Predicates ──────────────────────────────────────────────────

    /// Whether `property` holds for every component.
    pub fn has(&self, property: Property) -> bool {
        self.components.all(property)
    }

    pub fn is_prox_accurate(&self) -> bool {
        self.has(Property::ProxAccurate)
    }

    pub fn is_convex(&self) -> bool {
        self.has(Property::Convex)
    }

    pub fn is_set(&self) -> bool {
        self.has(Property::Set)
    }

    pub fn is_singleton(&self) -> bool {
        self.has(Property::Singleton)
    }

    pub fn is_cone(&self) -> bool {
        self.has(Property::Cone)
    }

    pub fn is_affine(&self) -> bool {
        self.has(Property::Affine)
    }

    pub fn is_smooth(&self) -> bool {
        self.has(Property::Smooth)
    }

    pub fn is_quadratic(&self) -> bool {
        self.has(Property::Quadratic)
    }

    pub fn is_generalized_quadratic(&self) -> bool {
        self.has(Property::GeneralizedQuadratic)
    }

    pub fn is_strongly_convex(&self) -> bool {
        self.has(Property::StronglyConvex)
    }

    // ── Metadata ────────────────────────────────────────────────────

    pub fn fun_name(&self) -> &'static str {
        "separable sum"
    }

    pub fn fun_dom(&self) -> &'static str {
        FunctionInfo::NOT_APPLICABLE
    }

    pub fn fun_expr(&self) -> &'static str {
        "(x₁, …, xₖ) ↦ f₁(x₁) + … + fₖ(xₖ)"
    }

    pub fn fun_params(&self) -> String {
        FunctionInfo::NOT_APPLICABLE.to_string()
    }

    pub fn info(&self) -> FunctionInfo {
        FunctionInfo {
            name: self.fun_name(),
            domain: self.fun_dom(),
            expression: self.fun_expr(),
            params: self.fun_params(),
        }
    }

    /// Descriptions of the components, in order.
    pub fn component_info(&self) -> Vec<FunctionInfo> {
        (0..self.len())
            .map(|i| self.components.visit(i, Describe))
            .collect()
    }
}

impl<C, T, E> SeparableSum<C, T, E>
where
    C: Components<T>,
    T: Real,
    E: Execution<C>,
{
    pub fn args(&self) -> SeparableSumArgs {
        self.execution.args()
    }

    // ── Operations ──────────────────────────────────────────────────

    /// `Σᵢ fᵢ(xs[i])`.
    pub fn eval<A: AsRef<[T]>>(&self, xs: &[A]) -> Result<T> {
        self.check_arity("inputs", xs.len())?;
        debug!(
            components = self.len(),
            strategy = self.args().strategy.as_str(),
            "separable sum: eval"
        );
        let xs = blocks(xs);
        let values = self.execution.map_components(&self.components, self.len(), |c, i| {
            c.visit(i, Eval { x: xs[i] })
        })?;
        Ok(sum(&values))
    }

    /// Writes `prox_{γᵢ fᵢ}(xs[i])` into `ys[i]` for every component and
    /// returns `Σᵢ fᵢ(ys[i])`.
    ///
    /// `gamma` is either one step size for all components or one per
    /// component; anything convertible to [`StepSize`] is accepted.
    pub fn prox_into<A, B, S>(&self, ys: &mut [B], xs: &[A], gamma: S) -> Result<T>
    where
        A: AsRef<[T]>,
        B: AsMut<[T]>,
        S: Into<StepSize<T>>,
    {
        let gamma = gamma.into();
        self.check_arity("inputs", xs.len())?;
        self.check_arity("outputs", ys.len())?;
        self.check_step_size(&gamma)?;
        debug!(
            components = self.len(),
            strategy = self.args().strategy.as_str(),
            uniform_step = gamma.is_uniform(),
            "separable sum: prox"
        );
        let xs = blocks(xs);
        let mut ys = blocks_mut(ys);
        let values = self.execution.map_slots(&self.components, &mut ys, |c, i, y| {
            c.visit(
                i,
                Prox {
                    y,
                    x: xs[i],
                    gamma: gamma.at(i),
                },
            )
        })?;
        Ok(sum(&values))
    }

    pub fn prox_into_uniform<A, B>(&self, ys: &mut [B], xs: &[A], gamma: T) -> Result<T>
    where
        A: AsRef<[T]>,
        B: AsMut<[T]>,
    {
        self.prox_into(ys, xs, StepSize::Uniform(gamma))
    }

    pub fn prox_into_per_component<A, B>(&self, ys: &mut [B], xs: &[A], gammas: &[T]) -> Result<T>
    where
        A: AsRef<[T]>,
        B: AsMut<[T]>,
    {
        self.prox_into(ys, xs, StepSize::PerComponent(gammas.to_vec()))
    }

    /// Writes `∇fᵢ(xs[i])` into `grads[i]` and returns `Σᵢ fᵢ(xs[i])`.
    pub fn gradient_into<A, B>(&self, grads: &mut [B], xs: &[A]) -> Result<T>
    where
        A: AsRef<[T]>,
        B: AsMut<[T]>,
    {
        self.check_arity("inputs", xs.len())?;
        self.check_arity("outputs", grads.len())?;
        debug!(
            components = self.len(),
            strategy = self.args().strategy.as_str(),
            "separable sum: gradient"
        );
        let xs = blocks(xs);
        let mut grads = blocks_mut(grads);
        let values = self.execution.map_slots(&self.components, &mut grads, |c, i, grad| {
            c.visit(i, Gradient { grad, x: xs[i] })
        })?;
        Ok(sum(&values))
    }

    /// Reference proximal operator: each component allocates its own output
    /// through its `prox_naive`. Meant for checking `prox_into`.
    pub fn prox_naive<A, S>(&self, xs: &[A], gamma: S) -> Result<(Vec<Vec<T>>, T)>
    where
        A: AsRef<[T]>,
        S: Into<StepSize<T>>,
    {
        let gamma = gamma.into();
        self.check_arity("inputs", xs.len())?;
        self.check_step_size(&gamma)?;
        debug!(components = self.len(), "separable sum: prox_naive");
        let xs = blocks(xs);
        let results = self.execution.map_components(&self.components, self.len(), |c, i| {
            c.visit(
                i,
                ProxNaive {
                    x: xs[i],
                    gamma: gamma.at(i),
                },
            )
        })?;
        let (ys, values): (Vec<Vec<T>>, Vec<T>) = results.into_iter().unzip();
        Ok((ys, sum(&values)))
    }

    /// Allocating proximal operator: output blocks are shaped like `xs` and
    /// filled through `prox_into`.
    pub fn prox<A, S>(&self, xs: &[A], gamma: S) -> Result<(Vec<Vec<T>>, T)>
    where
        A: AsRef<[T]>,
        S: Into<StepSize<T>>,
    {
        self.check_arity("inputs", xs.len())?;
        let mut ys = alloc_like(xs);
        let value = self.prox_into(&mut ys, xs, gamma)?;
        Ok((ys, value))
    }

    /// Allocating gradient, filled through `gradient_into`.
    pub fn gradient<A: AsRef<[T]>>(&self, xs: &[A]) -> Result<(Vec<Vec<T>>, T)> {
        self.check_arity("inputs", xs.len())?;
        let mut grads = alloc_like(xs);
        let value = self.gradient_into(&mut grads, xs)?;
        Ok((grads, value))
    }

    // ── Internals ───────────────────────────────────────────────────

    fn check_arity(&self, what: &'static str, found: usize) -> Result<()> {
        let expected = self.len();
        if found != expected {
            warn!(what, expected, found, "separable sum: arity mismatch");
            return Err(ProxError::ArityMismatch {
                what,
                expected,
                found,
            });
        }
        Ok(())
    }

    fn check_step_size(&self, gamma: &StepSize<T>) -> Result<()> {
        gamma.check_arity(self.len()).map_err(|e| {
            warn!(error = %e, "separable sum: step size arity mismatch");
            e
        })
    }
}

fn blocks<T, A: AsRef<[T]>>(xs: &[A]) -> Vec<&[T]> {
    xs.iter().map(|x| x.as_ref()).collect()
}

fn blocks_mut<T, B: AsMut<[T]>>(ys: &mut [B]) -> Vec<&mut [T]> {
    ys.iter_mut().map(|y| y.as_mut()).collect()
}

fn alloc_like<T: Real, A: AsRef<[T]>>(xs: &[A]) -> Vec<Vec<T>> {
    xs.iter().map(|x| vec![T::ZERO; x.as_ref().len()]).collect()
}
