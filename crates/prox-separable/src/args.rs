//! Configuration for how a separable sum runs its components.

use prox_core::{ProxError, Result};
use prox_threading::ParallelismStrategy;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparableSumArgs {
    /// `None` runs components on the calling thread in index order.
    pub strategy: ParallelismStrategy,
    /// Worker threads for `Flat`; 0 means one per CPU.
    pub max_threads: usize,
}

impl SeparableSumArgs {
    pub const MAX_THREADS_LIMIT: usize = 1024;

    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn parallel(max_threads: usize) -> Self {
        Self {
            strategy: ParallelismStrategy::Flat,
            max_threads,
        }
    }

    /// [`parallel`](Self::parallel), validated.
    pub fn try_parallel(max_threads: usize) -> Result<Self> {
        let args = Self::parallel(max_threads);
        args.validate()?;
        Ok(args)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_threads > Self::MAX_THREADS_LIMIT {
            return Err(ProxError::Config(format!(
                "max_threads must be <= {}, got {}",
                Self::MAX_THREADS_LIMIT,
                self.max_threads
            )));
        }
        if self.strategy == ParallelismStrategy::None && self.max_threads != 0 {
            return Err(ProxError::Config(
                "max_threads requires strategy = \"flat\"".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sequential() {
        let args = SeparableSumArgs::default();
        assert_eq!(args.strategy, ParallelismStrategy::None);
        assert_eq!(args.max_threads, 0);
        assert!(args.validate().is_ok());
        assert_eq!(SeparableSumArgs::sequential(), args);
    }

    #[test]
    fn rejects_threads_without_parallelism() {
        let args = SeparableSumArgs {
            strategy: ParallelismStrategy::None,
            max_threads: 4,
        };
        assert!(matches!(args.validate(), Err(ProxError::Config(_))));
    }

    #[test]
    fn rejects_absurd_thread_counts() {
        let args = SeparableSumArgs::parallel(SeparableSumArgs::MAX_THREADS_LIMIT + 1);
        assert!(matches!(args.validate(), Err(ProxError::Config(_))));
        assert!(SeparableSumArgs::parallel(8).validate().is_ok());
    }

    #[test]
    fn try_parallel_checks_the_thread_count() {
        assert_eq!(
            SeparableSumArgs::try_parallel(SeparableSumArgs::MAX_THREADS_LIMIT),
            Ok(SeparableSumArgs::parallel(SeparableSumArgs::MAX_THREADS_LIMIT))
        );
        assert!(matches!(
            SeparableSumArgs::try_parallel(SeparableSumArgs::MAX_THREADS_LIMIT + 1),
            Err(ProxError::Config(_))
        ));
    }
}
