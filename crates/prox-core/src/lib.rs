//! Shared abstractions for proximable functions.
//!
//! Everything that sits between a component function and the combinators
//! built on top of it lives here: the scalar trait, the error type, the
//! component trait itself, step sizes and descriptive metadata.

pub mod error;
pub mod function;
pub mod info;
pub mod property;
pub mod real;
pub mod step;

pub use error::{ProxError, Result};
pub use function::ProximableFunction;
pub use info::FunctionInfo;
pub use property::Property;
pub use real::Real;
pub use step::StepSize;
