use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use complex_lib::math::Complex;

#[test]
fn magnitude_of_pythagorean_triple() {
    let c = Complex::new(3, 4);
    assert_relative_eq!(c.magnitude(), 5.0);
    assert_relative_eq!(c.squared_magnitude(), 25.0);
    assert_eq!(c.norm(), c.magnitude());
}

#[test]
fn argument_on_axes() {
    assert_abs_diff_eq!(Complex::new(1, 0).argument().unwrap(), 0.0);
    assert_relative_eq!(Complex::new(0, 1).argument().unwrap(), FRAC_PI_2);
    assert_relative_eq!(Complex::new(0, 1).argument().unwrap(), 1.57079632679, epsilon = 1e-11);
    assert_relative_eq!(Complex::new(-1, 0).argument().unwrap(), PI);
    assert_relative_eq!(Complex::new(-1, 0).argument().unwrap(), 3.14159265359, epsilon = 1e-11);
    assert_relative_eq!(Complex::new(1, 1).angle().unwrap(), FRAC_PI_4);
    assert_relative_eq!(Complex::new(-1, -1).angle().unwrap(), -3. * FRAC_PI_4);
}

#[test]
fn zero() {
    let c = Complex::new(0, 0);
    assert_eq!(c.magnitude(), 0.0);
    assert_eq!(c.argument(), Ok(0.0));
}

#[test]
fn to_string() {
    assert_eq!(Complex::new(1, -2).to_string(), "1 - 2i");
    assert_eq!(Complex::new(1, 2).to_string(), "1 + 2i");
    assert_eq!(Complex::new(2.5, -0.75).to_string(), "2.5 - 0.75i");
}

#[test]
fn queries_do_not_change_components() {
    let c = Complex::new(-7.25, 0.5);
    let _ = c.to_string();
    let _ = c.magnitude();
    let _ = c.squared_magnitude();
    let _ = c.angle();
    assert_eq!(c.real(), -7.25);
    assert_eq!(c.imag(), 0.5);
}

#[test]
fn non_finite_rejected() {
    let err = Complex::try_new(f64::NEG_INFINITY, 0).unwrap_err();
    assert_eq!(err.real(), f64::NEG_INFINITY);
    assert_eq!(
        err.to_string(),
        "complex number components must be finite, got real: -inf, imag: 0"
    );
    assert!(Complex::try_new(1e308, -1e308).is_ok());
}

#[test]
fn serde() {
    let c = Complex::new(1, -2);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"real":1.0,"imag":-2.0}"#);
    let back: Complex = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
