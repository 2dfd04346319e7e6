//! How a separable sum runs its per-component work.
//!
//! Tasks receive the component collection as an argument rather than
//! capturing it, so only [`Threaded`] needs the collection to be `Sync`.
//! A [`Sequential`] sum can hold components with interior mutability.

use std::sync::Arc;

use prox_core::{ProxError, Result};
use prox_threading::{parallel_for_each_slot, parallel_map, ParallelismStrategy, ThreadPool};
use tracing::{debug, trace};

use crate::args::SeparableSumArgs;

/// Runs one task per component of a collection `C`.
pub trait Execution<C: ?Sized> {
    /// The configuration this executor runs with.
    fn args(&self) -> SeparableSumArgs;

    /// Runs `task(components, i)` for every `i in 0..n` and returns the
    /// results in index order, or the error of the lowest failing index.
    fn map_components<R, F>(&self, components: &C, n: usize, task: F) -> Result<Vec<R>>
    where
        R: Send,
        F: Fn(&C, usize) -> Result<R> + Send + Sync;

    /// Like `map_components`, handing task `i` exclusive access to
    /// `slots[i]`.
    fn map_slots<T, F>(&self, components: &C, slots: &mut [&mut [T]], task: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&C, usize, &mut [T]) -> Result<T> + Send + Sync;
}

/// Runs components on the calling thread in index order, stopping at the
/// first error.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl<C: ?Sized> Execution<C> for Sequential {
    fn args(&self) -> SeparableSumArgs {
        SeparableSumArgs::sequential()
    }

    fn map_components<R, F>(&self, components: &C, n: usize, task: F) -> Result<Vec<R>>
    where
        R: Send,
        F: Fn(&C, usize) -> Result<R> + Send + Sync,
    {
        (0..n)
            .map(|i| {
                trace!(index = i, "separable sum: component");
                task(components, i).map_err(|e| log_failure(i, e))
            })
            .collect()
    }

    fn map_slots<T, F>(&self, components: &C, slots: &mut [&mut [T]], task: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&C, usize, &mut [T]) -> Result<T> + Send + Sync,
    {
        slots
            .iter_mut()
            .enumerate()
            .map(|(i, slot)| {
                trace!(index = i, "separable sum: component");
                task(components, i, slot).map_err(|e| log_failure(i, e))
            })
            .collect()
    }
}

/// Runs components as a [`SeparableSumArgs`] says: in order on the calling
/// thread for `None`, one rayon task per component for `Flat`.
///
/// In parallel every component runs even when one fails; the lowest-index
/// error is returned, which is the error a sequential run would report.
#[derive(Clone, Debug, Default)]
pub struct Threaded {
    args: SeparableSumArgs,
    pool: Option<Arc<ThreadPool>>,
}

impl Threaded {
    /// Validates `args` and builds the pool `Flat` runs on. `max_threads == 0`
    /// means one thread per CPU.
    pub fn new(args: SeparableSumArgs) -> Result<Self> {
        args.validate()?;
        let pool = match args.strategy {
            ParallelismStrategy::None => None,
            ParallelismStrategy::Flat if args.max_threads == 0 => {
                Some(Arc::new(ThreadPool::for_num_cpus()?))
            }
            ParallelismStrategy::Flat => Some(Arc::new(ThreadPool::new(args.max_threads)?)),
        };
        Ok(Self { args, pool })
    }

    /// Runs `Flat` on a pool shared with other callers. Fails with
    /// `ProxError::Config` when the pool is larger than
    /// [`SeparableSumArgs::MAX_THREADS_LIMIT`].
    pub fn with_pool(pool: Arc<ThreadPool>) -> Result<Self> {
        let args = SeparableSumArgs::try_parallel(pool.num_threads())?;
        Ok(Self {
            args,
            pool: Some(pool),
        })
    }
}

impl<C: Sync + ?Sized> Execution<C> for Threaded {
    fn args(&self) -> SeparableSumArgs {
        self.args
    }

    fn map_components<R, F>(&self, components: &C, n: usize, task: F) -> Result<Vec<R>>
    where
        R: Send,
        F: Fn(&C, usize) -> Result<R> + Send + Sync,
    {
        match self.args.strategy {
            ParallelismStrategy::None => Sequential.map_components(components, n, task),
            ParallelismStrategy::Flat => {
                let run = |i: usize| {
                    trace!(index = i, "separable sum: component");
                    task(components, i).map_err(|e| log_failure(i, e))
                };
                parallel_map(self.args.strategy, n, self.pool.as_deref(), run)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn map_slots<T, F>(&self, components: &C, slots: &mut [&mut [T]], task: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&C, usize, &mut [T]) -> Result<T> + Send + Sync,
    {
        match self.args.strategy {
            ParallelismStrategy::None => Sequential.map_slots(components, slots, task),
            ParallelismStrategy::Flat => {
                let run = |i: usize, slot: &mut &mut [T]| {
                    trace!(index = i, "separable sum: component");
                    task(components, i, slot).map_err(|e| log_failure(i, e))
                };
                parallel_for_each_slot(self.args.strategy, slots, self.pool.as_deref(), run)
                    .into_iter()
                    .collect()
            }
        }
    }
}

fn log_failure(index: usize, err: ProxError) -> ProxError {
    debug!(index, error = %err, "separable sum: component failed");
    err
}
