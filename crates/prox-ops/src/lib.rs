//! Slice kernels shared by proximable functions and combinators.

pub mod dot;
pub mod elementwise;
pub mod sum;
