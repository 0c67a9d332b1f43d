use approx::assert_relative_eq;

use crate::vector::{direction, is_finite_vector, Vector3};

#[test]
fn test_direction_has_unit_length() {
    let d = direction(Vector3::new(3.0, 4.0, 0.0));
    assert_relative_eq!(d.length(), 1.0);
    assert_relative_eq!(d.x, 0.6);
    assert_relative_eq!(d.y, 0.8);
}

#[test]
fn test_direction_of_zero_vector_is_zero() {
    assert_eq!(direction(Vector3::ZERO), Vector3::ZERO);
}

#[test]
fn test_direction_of_nan_vector_is_zero() {
    assert_eq!(direction(Vector3::new(f64::NAN, 0.0, 0.0)), Vector3::ZERO);
}

#[test]
fn test_finite_check() {
    assert!(is_finite_vector(Vector3::new(1.0, -2.0, 3.0)));
    assert!(!is_finite_vector(Vector3::new(1.0, f64::INFINITY, 3.0)));
    assert!(!is_finite_vector(Vector3::new(f64::NAN, 0.0, 0.0)));
}
