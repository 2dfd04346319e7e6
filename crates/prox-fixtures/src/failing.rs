//! A component that always fails, for error-propagation tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use prox_core::{ProxError, ProximableFunction, Real, Result};

/// Returns `error` from every operation and counts how often it was called.
#[derive(Debug)]
pub struct Failing {
    pub error: ProxError,
    calls: AtomicUsize,
}

impl Failing {
    pub fn new(error: ProxError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn domain(msg: &str) -> Self {
        Self::new(ProxError::OutOfDomain(msg.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

impl<T: Real> ProximableFunction<T> for Failing {
    fn eval(&self, _x: &[T]) -> Result<T> {
        self.fail()
    }

    fn prox_into(&self, _y: &mut [T], _x: &[T], _gamma: T) -> Result<T> {
        self.fail()
    }

    fn gradient_into(&self, _grad: &mut [T], _x: &[T]) -> Result<T> {
        self.fail()
    }

    fn prox_naive(&self, _x: &[T], _gamma: T) -> Result<(Vec<T>, T)> {
        self.fail()
    }

    fn is_prox_accurate(&self) -> bool {
        false
    }
}
