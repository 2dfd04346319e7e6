//! Error type shared by components and combinators.

/// Errors raised while evaluating, proxing or differentiating a function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProxError {
    #[error("arity mismatch in {what}: expected {expected} components, found {found}")]
    ArityMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("dimension mismatch: expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid step size: {0}")]
    InvalidStepSize(String),

    #[error("point outside domain: {0}")]
    OutOfDomain(String),

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, ProxError>;

impl ProxError {
    /// Returns `DimensionMismatch` unless `found == expected`.
    pub fn check_len(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(ProxError::DimensionMismatch { expected, found })
        }
    }
}
