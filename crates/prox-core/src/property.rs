//! Structural predicates a proximable function can advertise.

use core::fmt;

use crate::function::ProximableFunction;
use crate::real::Real;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Property {
    ProxAccurate,
    Convex,
    Set,
    Singleton,
    Cone,
    Affine,
    Smooth,
    Quadratic,
    GeneralizedQuadratic,
    StronglyConvex,
}

impl Property {
    pub const ALL: [Property; 10] = [
        Property::ProxAccurate,
        Property::Convex,
        Property::Set,
        Property::Singleton,
        Property::Cone,
        Property::Affine,
        Property::Smooth,
        Property::Quadratic,
        Property::GeneralizedQuadratic,
        Property::StronglyConvex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Property::ProxAccurate => "prox_accurate",
            Property::Convex => "convex",
            Property::Set => "set",
            Property::Singleton => "singleton",
            Property::Cone => "cone",
            Property::Affine => "affine",
            Property::Smooth => "smooth",
            Property::Quadratic => "quadratic",
            Property::GeneralizedQuadratic => "generalized_quadratic",
            Property::StronglyConvex => "strongly_convex",
        }
    }

    /// Evaluates the predicate on `f`.
    pub fn holds_for<T, F>(self, f: &F) -> bool
    where
        T: Real,
        F: ProximableFunction<T> + ?Sized,
    {
        match self {
            Property::ProxAccurate => f.is_prox_accurate(),
            Property::Convex => f.is_convex(),
            Property::Set => f.is_set(),
            Property::Singleton => f.is_singleton(),
            Property::Cone => f.is_cone(),
            Property::Affine => f.is_affine(),
            Property::Smooth => f.is_smooth(),
            Property::Quadratic => f.is_quadratic(),
            Property::GeneralizedQuadratic => f.is_generalized_quadratic(),
            Property::StronglyConvex => f.is_strongly_convex(),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
