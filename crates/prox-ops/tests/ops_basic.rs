use prox_ops::dot::{dot, norm_sqr};
use prox_ops::elementwise::{all_within, axpy, clamp_into, fill, scale_into, soft_threshold_into};
use prox_ops::sum::{sum, sum_abs};
use proptest::prelude::*;

#[test]
fn test_dot() {
    let a = [1.0f64, 2.0, 3.0];
    let b = [4.0f64, 5.0, 6.0];
    assert_eq!(dot(&a, &b), 32.0);
    assert_eq!(norm_sqr(&a), 14.0);
    assert_eq!(norm_sqr(&[3.0f32, 4.0]), 25.0);
}

#[test]
fn test_sum() {
    let a = [1.0f32, -2.0, 3.0];
    assert_eq!(sum(&a), 2.0);
    assert_eq!(sum_abs(&a), 6.0);
    assert_eq!(sum::<f64>(&[]), 0.0);
}

#[test]
fn test_soft_threshold() {
    let x = [-3.0f64, -0.5, 0.0, 0.5, 2.0];
    let mut y = [0.0f64; 5];
    soft_threshold_into(&mut y, &x, 1.0);
    assert_eq!(y, [-2.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_clamp_and_fill() {
    let x = [-2.0f64, 0.25, 5.0];
    let mut y = [0.0f64; 3];
    clamp_into(&mut y, &x, -1.0, 1.0);
    assert_eq!(y, [-1.0, 0.25, 1.0]);
    assert!(all_within(&y, -1.0, 1.0));
    assert!(!all_within(&x, -1.0, 1.0));
    fill(&mut y, 7.0);
    assert_eq!(y, [7.0; 3]);
}

#[test]
fn test_scale_and_axpy() {
    let x = [1.0f64, 2.0];
    let mut y = [0.0f64; 2];
    scale_into(&mut y, &x, 3.0);
    assert_eq!(y, [3.0, 6.0]);
    axpy(&mut y, -1.0, &x);
    assert_eq!(y, [2.0, 4.0]);
}

proptest! {
    #[test]
    fn sum_is_order_fixed(values in prop::collection::vec(-1e3f64..1e3, 0..64)) {
        let expected = values.iter().fold(0.0f64, |acc, v| acc + v);
        prop_assert_eq!(sum(&values), expected);
    }

    #[test]
    fn soft_threshold_shrinks_magnitude(
        values in prop::collection::vec(-10.0f64..10.0, 1..32),
        t in 0.0f64..5.0,
    ) {
        let mut y = vec![0.0; values.len()];
        soft_threshold_into(&mut y, &values, t);
        for (yi, xi) in y.iter().zip(&values) {
            prop_assert!(yi.abs() <= xi.abs());
            prop_assert!((xi.abs() - yi.abs() - t.min(xi.abs())).abs() < 1e-12);
        }
    }
}
