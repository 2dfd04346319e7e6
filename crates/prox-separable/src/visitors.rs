//! Per-component operations dispatched through [`ComponentVisitor`].

use prox_core::{FunctionInfo, ProximableFunction, Real, Result};

use crate::components::ComponentVisitor;

pub(crate) struct Eval<'a, T> {
    pub x: &'a [T],
}

impl<T: Real> ComponentVisitor<T> for Eval<'_, T> {
    type Output = Result<T>;

    fn visit<F: ProximableFunction<T> + ?Sized>(self, f: &F) -> Result<T> {
        f.eval(self.x)
    }
}

pub(crate) struct Prox<'a, T> {
    pub y: &'a mut [T],
    pub x: &'a [T],
    pub gamma: T,
}

impl<T: Real> ComponentVisitor<T> for Prox<'_, T> {
    type Output = Result<T>;

    fn visit<F: ProximableFunction<T> + ?Sized>(self, f: &F) -> Result<T> {
        f.prox_into(self.y, self.x, self.gamma)
    }
}

pub(crate) struct Gradient<'a, T> {
    pub grad: &'a mut [T],
    pub x: &'a [T],
}

impl<T: Real> ComponentVisitor<T> for Gradient<'_, T> {
    type Output = Result<T>;

    fn visit<F: ProximableFunction<T> + ?Sized>(self, f: &F) -> Result<T> {
        f.gradient_into(self.grad, self.x)
    }
}

pub(crate) struct ProxNaive<'a, T> {
    pub x: &'a [T],
    pub gamma: T,
}

impl<T: Real> ComponentVisitor<T> for ProxNaive<'_, T> {
    type Output = Result<(Vec<T>, T)>;

    fn visit<F: ProximableFunction<T> + ?Sized>(self, f: &F) -> Result<(Vec<T>, T)> {
        f.prox_naive(self.x, self.gamma)
    }
}

pub(crate) struct Describe;

impl<T: Real> ComponentVisitor<T> for Describe {
    type Output = FunctionInfo;

    fn visit<F: ProximableFunction<T> + ?Sized>(self, f: &F) -> FunctionInfo {
        f.info()
    }
}
