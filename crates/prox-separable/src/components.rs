//! Fixed-arity collections of component functions.
//!
//! A [`SeparableSum`](crate::SeparableSum) is generic over its component
//! collection. Heterogeneous tuples `(F1, F2, …)` keep every component
//! statically typed; arrays `[F; N]` and vectors `Vec<F>` hold components of
//! one type, which with [`DynComponent`] covers runtime-assembled sums.

use prox_core::{Property, ProximableFunction, Real};

/// Boxed component for sums assembled at runtime.
pub type DynComponent<T> = Box<dyn ProximableFunction<T> + Send + Sync>;

/// Number of components in a collection, independent of the scalar type.
pub trait Arity {
    fn arity(&self) -> usize;
}

/// An operation applied to a single component.
///
/// Visitors let a collection of heterogeneous components dispatch to the
/// concrete type of each component without boxing.
pub trait ComponentVisitor<T: Real> {
    type Output;

    fn visit<F: ProximableFunction<T> + ?Sized>(self, f: &F) -> Self::Output;
}

/// An ordered collection of component functions over scalar type `T`.
pub trait Components<T: Real>: Arity {
    /// Applies `visitor` to component `index`.
    ///
    /// Panics if `index >= self.arity()`.
    fn visit<V: ComponentVisitor<T>>(&self, index: usize, visitor: V) -> V::Output;

    /// Whether `property` holds for every component.
    fn all(&self, property: Property) -> bool {
        (0..self.arity()).all(|i| self.visit(i, HasProperty(property)))
    }
}

struct HasProperty(Property);

impl<T: Real> ComponentVisitor<T> for HasProperty {
    type Output = bool;

    fn visit<F: ProximableFunction<T> + ?Sized>(self, f: &F) -> bool {
        self.0.holds_for::<T, F>(f)
    }
}

impl<F> Arity for Vec<F> {
    fn arity(&self) -> usize {
        self.len()
    }
}

impl<T: Real, F: ProximableFunction<T>> Components<T> for Vec<F> {
    fn visit<V: ComponentVisitor<T>>(&self, index: usize, visitor: V) -> V::Output {
        visitor.visit(&self[index])
    }
}

impl<F, const N: usize> Arity for [F; N] {
    fn arity(&self) -> usize {
        N
    }
}

impl<T: Real, F: ProximableFunction<T>, const N: usize> Components<T> for [F; N] {
    fn visit<V: ComponentVisitor<T>>(&self, index: usize, visitor: V) -> V::Output {
        visitor.visit(&self[index])
    }
}

macro_rules! impl_components_tuple {
    ($len:expr; $($idx:tt => $F:ident),+) => {
        impl<$($F),+> Arity for ($($F,)+) {
            fn arity(&self) -> usize {
                $len
            }
        }

        impl<T: Real, $($F: ProximableFunction<T>),+> Components<T> for ($($F,)+) {
            fn visit<V: ComponentVisitor<T>>(&self, index: usize, visitor: V) -> V::Output {
                match index {
                    $($idx => visitor.visit(&self.$idx),)+
                    _ => panic!("component index {index} out of range for {} components", $len),
                }
            }
        }
    };
}

impl_components_tuple!(1; 0 => F0);
impl_components_tuple!(2; 0 => F0, 1 => F1);
impl_components_tuple!(3; 0 => F0, 1 => F1, 2 => F2);
impl_components_tuple!(4; 0 => F0, 1 => F1, 2 => F2, 3 => F3);
impl_components_tuple!(5; 0 => F0, 1 => F1, 2 => F2, 3 => F3, 4 => F4);
impl_components_tuple!(6; 0 => F0, 1 => F1, 2 => F2, 3 => F3, 4 => F4, 5 => F5);
impl_components_tuple!(7; 0 => F0, 1 => F1, 2 => F2, 3 => F3, 4 => F4, 5 => F5, 6 => F6);
impl_components_tuple!(8; 0 => F0, 1 => F1, 2 => F2, 3 => F3, 4 => F4, 5 => F5, 6 => F6, 7 => F7);
impl_components_tuple!(9; 0 => F0, 1 => F1, 2 => F2, 3 => F3, 4 => F4, 5 => F5, 6 => F6, 7 => F7, 8 => F8);
impl_components_tuple!(10; 0 => F0, 1 => F1, 2 => F2, 3 => F3, 4 => F4, 5 => F5, 6 => F6, 7 => F7, 8 => F8, 9 => F9);
impl_components_tuple!(11; 0 => F0, 1 => F1, 2 => F2, 3 => F3, 4 => F4, 5 => F5, 6 => F6, 7 => F7, 8 => F8, 9 => F9, 10 => F10);
impl_components_tuple!(12; 0 => F0, 1 => F1, 2 => F2, 3 => F3, 4 => F4, 5 => F5, 6 => F6, 7 => F7, 8 => F8, 9 => F9, 10 => F10, 11 => F11);

#[cfg(test)]
mod tests {
    use super::*;
    use prox_core::Result;

    struct Const(f64, bool);

    impl ProximableFunction<f64> for Const {
        fn eval(&self, _x: &[f64]) -> Result<f64> {
            Ok(self.0)
        }

        fn prox_into(&self, y: &mut [f64], x: &[f64], _gamma: f64) -> Result<f64> {
            y.copy_from_slice(x);
            Ok(self.0)
        }

        fn is_convex(&self) -> bool {
            self.1
        }
    }

    struct EvalAt<'a>(&'a [f64]);

    impl ComponentVisitor<f64> for EvalAt<'_> {
        type Output = Result<f64>;

        fn visit<F: ProximableFunction<f64> + ?Sized>(self, f: &F) -> Result<f64> {
            f.eval(self.0)
        }
    }

    #[test]
    fn tuple_dispatches_by_index() {
        let fs = (Const(1.0, true), Const(2.0, true), Const(3.0, false));
        assert_eq!(fs.arity(), 3);
        assert_eq!(fs.visit(2, EvalAt(&[])).unwrap(), 3.0);
        assert!(!Components::<f64>::all(&fs, Property::Convex));
        assert!(Components::<f64>::all(&fs, Property::ProxAccurate));
    }

    #[test]
    fn vectors_and_arrays_dispatch_by_index() {
        let boxed: Vec<DynComponent<f64>> = vec![Box::new(Const(4.0, true)), Box::new(Const(5.0, true))];
        assert_eq!(boxed.arity(), 2);
        assert_eq!(boxed.visit(1, EvalAt(&[])).unwrap(), 5.0);
        assert!(Components::<f64>::all(&boxed, Property::Convex));

        let array = [Const(6.0, true)];
        assert_eq!(array.arity(), 1);
        assert_eq!(array.visit(0, EvalAt(&[])).unwrap(), 6.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn tuple_index_out_of_range_panics() {
        let fs = (Const(1.0, true),);
        let _ = fs.visit(1, EvalAt(&[]));
    }
}
