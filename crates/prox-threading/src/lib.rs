//! Lightweight parallel utilities for running independent per-component work.

use prox_core::{ProxError, Result};
use rayon::prelude::*;
use rayon::ThreadPool as RayonPool;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelismStrategy {
    /// Run tasks on the calling thread in index order.
    #[default]
    None,
    /// One rayon task per index.
    Flat,
}

impl ParallelismStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ParallelismStrategy::None => "none",
            ParallelismStrategy::Flat => "flat",
        }
    }
}

pub struct ThreadPool {
    pool: RayonPool,
    num_threads: usize,
}

impl ThreadPool {
    pub fn new(num_threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("prox-worker-{i}"))
            .build()
            .map_err(|e| ProxError::ThreadPool(e.to_string()))?;
        tracing::debug!(num_threads, "built thread pool");
        Ok(Self { pool, num_threads })
    }

    pub fn for_num_cpus() -> Result<Self> {
        Self::new(num_cpus::get())
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn install<F: FnOnce() -> R + Send, R: Send>(&self, f: F) -> R {
        self.pool.install(f)
    }
}

impl std::fmt::Debug for ThreadPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadPool")
            .field("num_threads", &self.num_threads)
            .finish()
    }
}

/// Runs `func(task)` for every task in `0..num_tasks` and returns the results
/// in task order, whatever order the tasks ran in.
pub fn parallel_map<R, F>(
    strategy: ParallelismStrategy,
    num_tasks: usize,
    pool: Option<&ThreadPool>,
    func: F,
) -> Vec<R>
where
    R: Send,
    F: Fn(usize) -> R + Send + Sync,
{
    match (strategy, pool) {
        (ParallelismStrategy::Flat, Some(pool)) => {
            pool.install(|| (0..num_tasks).into_par_iter().map(&func).collect())
        }
        (ParallelismStrategy::Flat, None) => (0..num_tasks).into_par_iter().map(&func).collect(),
        (ParallelismStrategy::None, _) => (0..num_tasks).map(func).collect(),
    }
}

/// Pairs every output slot with its index and runs `func` on it. Each task
/// owns exactly one slot, so tasks never alias.
pub fn parallel_for_each_slot<S, R, F>(
    strategy: ParallelismStrategy,
    slots: &mut [S],
    pool: Option<&ThreadPool>,
    func: F,
) -> Vec<R>
where
    S: Send,
    R: Send,
    F: Fn(usize, &mut S) -> R + Send + Sync,
{
    match (strategy, pool) {
        (ParallelismStrategy::Flat, Some(pool)) => pool.install(|| {
            slots
                .par_iter_mut()
                .enumerate()
                .map(|(i, slot)| func(i, slot))
                .collect()
        }),
        (ParallelismStrategy::Flat, None) => slots
            .par_iter_mut()
            .enumerate()
            .map(|(i, slot)| func(i, slot))
            .collect(),
        (ParallelismStrategy::None, _) => slots
            .iter_mut()
            .enumerate()
            .map(|(i, slot)| func(i, slot))
            .collect(),
    }
}
