//! Human-readable description of a function, for display and debugging.

use core::fmt;

/// Name, domain, expression and parameters of a function.
///
/// Combinators over heterogeneous components report `"n/a"` wherever no
/// single value describes all of them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionInfo {
    pub name: &'static str,
    pub domain: &'static str,
    pub expression: &'static str,
    pub params: String,
}

impl FunctionInfo {
    pub const NOT_APPLICABLE: &'static str = "n/a";
}

impl fmt::Display for FunctionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "description : {}", self.name)?;
        writeln!(f, "domain      : {}", self.domain)?;
        writeln!(f, "expression  : {}", self.expression)?;
        write!(f, "parameters  : {}", self.params)
    }
}
