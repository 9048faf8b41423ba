use assert_approx_eq::assert_approx_eq;
use ieee_complex::{create_provider, Complex, LibmMath, MathProvider, Transcendental};
use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

fn assert_close(actual: Complex, real: f64, imaginary: f64, eps: f64) {
    assert_approx_eq!(actual.real(), real, eps);
    assert_approx_eq!(actual.imaginary(), imaginary, eps);
}

#[test]
fn exp() {
    assert_close(Complex::ONE.exp(), E, 0.0, 1e-15);
    assert_eq!(Complex::ONE.exp().imaginary(), 0.0);
    assert_close(Complex::new(0.0, PI).exp(), -1.0, 0.0, 1e-15);
    assert_eq!(Complex::ZERO.exp(), Complex::ONE);
    assert!(Complex::NAN.exp().is_nan());
}

#[test]
fn log() {
    assert_eq!(Complex::ZERO.log(), Complex::new(f64::NEG_INFINITY, 0.0));
    assert_eq!(Complex::ONE.log(), Complex::ZERO);
    assert_eq!(Complex::new(-1.0, 0.0).log(), Complex::new(0.0, PI));
    assert_close(Complex::I.log(), 0.0, FRAC_PI_2, 1e-15);
    assert!(Complex::new(f64::NAN, 1.0).log().is_nan());
}

#[test]
fn log_inverts_exp() {
    let z = Complex::new(0.5, -1.25);
    let back = z.exp().log();
    assert_close(back, 0.5, -1.25, 1e-14);
}

#[test]
fn sqrt() {
    assert_eq!(Complex::ZERO.sqrt(), Complex::new(0.0, 0.0));
    assert_eq!(Complex::new(-4.0, 0.0).sqrt(), Complex::new(0.0, 2.0));
    assert_eq!(Complex::new(4.0, 0.0).sqrt(), Complex::new(2.0, 0.0));
    assert_eq!(Complex::new(0.0, 2.0).sqrt(), Complex::new(1.0, 1.0));
    assert!(Complex::NAN.sqrt().is_nan());
}

#[test]
fn sqrt_takes_branch_from_imaginary_sign() {
    let below = Complex::new(-4.0, -0.0).sqrt();
    assert_eq!(below, Complex::new(0.0, -2.0));

    let z = Complex::new(-3.0, -4.0).sqrt();
    assert_close(z, 1.0, -2.0, 1e-15);
}

#[test]
fn sqrt_squares_back() {
    let z = Complex::new(-2.5, 7.0);
    let root = z.sqrt();
    assert!(root.real() >= 0.0);
    assert_close(root * root, -2.5, 7.0, 1e-13);
}

#[test]
fn sqrt1z() {
    assert_eq!(Complex::ZERO.sqrt1z(), Complex::ONE);
    assert_eq!(Complex::ONE.sqrt1z(), Complex::ZERO);
    assert_close(Complex::new(0.6, 0.0).sqrt1z(), 0.8, 0.0, 1e-15);
    assert!(Complex::NAN.sqrt1z().is_nan());
}

#[test]
fn pow_and_power() {
    assert_close(Complex::new(2.0, 0.0).power(2.0), 4.0, 0.0, 1e-14);
    assert_close(Complex::I.pow(Complex::I), (-FRAC_PI_2).exp(), 0.0, 1e-15);
    assert_close(Complex::new(1.0, 1.0).pow(Complex::new(2.0, 0.0)), 0.0, 2.0, 1e-14);
}

#[test]
fn pow_degenerates_for_zero_nan_and_infinite_bases() {
    assert!(Complex::ZERO.pow(Complex::ONE).is_nan());
    assert!(Complex::ZERO.power(2.0).is_nan());
    assert!(Complex::NAN.pow(Complex::ONE).is_nan());
    assert!(Complex::INFINITY.pow(Complex::ONE).is_nan());
    assert!(Complex::ONE.pow(Complex::NAN).is_nan());
}

#[test]
fn sin_and_cos() {
    assert_eq!(Complex::ZERO.sin(), Complex::ZERO);
    assert_eq!(Complex::ZERO.cos(), Complex::ONE);
    assert_eq!(Complex::I.sin(), Complex::new(0.0, 1f64.sinh()));
    assert_eq!(Complex::I.cos(), Complex::new(1f64.cosh(), 0.0));
    assert_close(Complex::new(FRAC_PI_2, 0.0).sin(), 1.0, 0.0, 1e-15);

    let z = Complex::new(1.0, 2.0);
    assert_close(z.sin(), 1f64.sin() * 2f64.cosh(), 1f64.cos() * 2f64.sinh(), 1e-14);
    assert_close(z.cos(), 1f64.cos() * 2f64.cosh(), -(1f64.sin() * 2f64.sinh()), 1e-14);

    assert!(Complex::NAN.sin().is_nan());
    assert!(Complex::NAN.cos().is_nan());
}

#[test]
fn sinh_and_cosh() {
    assert_eq!(Complex::ONE.sinh(), Complex::new(1f64.sinh(), 0.0));
    assert_eq!(Complex::ONE.cosh(), Complex::new(1f64.cosh(), 0.0));
    assert_close(Complex::new(0.0, PI).cosh(), -1.0, 0.0, 1e-15);
    assert_close(Complex::new(0.0, FRAC_PI_2).sinh(), 0.0, 1.0, 1e-15);

    assert!(Complex::NAN.sinh().is_nan());
    assert!(Complex::NAN.cosh().is_nan());
}

#[test]
fn pythagorean_identity() {
    let z = Complex::new(0.3, -0.7);
    let s = z.sin();
    let c = z.cos();
    assert_close(s * s + c * c, 1.0, 0.0, 1e-14);
}

#[test]
fn tan() {
    assert_close(Complex::new(FRAC_PI_4, 0.0).tan(), 1.0, 0.0, 1e-15);
    assert_eq!(Complex::ZERO.tan(), Complex::ZERO);

    let z = Complex::new(0.5, 0.5);
    let expected = z.sin() / z.cos();
    assert_close(z.tan(), expected.real(), expected.imaginary(), 1e-14);
}

#[test]
fn tan_saturates_for_large_imaginary_part() {
    assert_eq!(Complex::new(0.0, 25.0).tan(), Complex::new(0.0, 1.0));
    assert_eq!(Complex::new(3.0, -25.0).tan(), Complex::new(0.0, -1.0));
    assert_eq!(Complex::new(1.0, f64::INFINITY).tan(), Complex::new(0.0, 1.0));
}

#[test]
fn tan_fails_for_nan_or_infinite_real_part() {
    assert!(Complex::NAN.tan().is_nan());
    assert!(Complex::new(f64::INFINITY, 0.0).tan().is_nan());
    assert!(Complex::new(f64::NEG_INFINITY, 1.0).tan().is_nan());
}

#[test]
fn tanh() {
    assert_close(Complex::ONE.tanh(), 1f64.tanh(), 0.0, 1e-15);
    assert_eq!(Complex::new(25.0, 0.0).tanh(), Complex::new(1.0, 0.0));
    assert_eq!(Complex::new(-25.0, 3.0).tanh(), Complex::new(-1.0, 0.0));
    assert!(Complex::NAN.tanh().is_nan());
    assert!(Complex::new(0.0, f64::INFINITY).tanh().is_nan());
}

#[test]
fn inverse_trig_on_real_axis() {
    assert_close(Complex::new(0.5, 0.0).asin(), FRAC_PI_6, 0.0, 1e-15);
    assert_close(Complex::new(0.5, 0.0).acos(), FRAC_PI_3, 0.0, 1e-15);
    assert_close(Complex::ONE.atan(), FRAC_PI_4, 0.0, 1e-15);
    assert_eq!(Complex::ZERO.asin(), Complex::ZERO);
}

#[test]
fn inverse_trig_round_trips() {
    let z = Complex::new(0.4, 0.3);
    let s = z.asin().sin();
    assert_close(s, 0.4, 0.3, 1e-13);

    let c = z.acos().cos();
    assert_close(c, 0.4, 0.3, 1e-13);

    let t = z.atan().tan();
    assert_close(t, 0.4, 0.3, 1e-13);
}

#[test]
fn inverse_trig_propagates_nan() {
    assert!(Complex::NAN.asin().is_nan());
    assert!(Complex::NAN.acos().is_nan());
    assert!(Complex::NAN.atan().is_nan());
    assert!(Complex::I.atan().is_nan());
}

#[test]
fn libm_provider_agrees_with_std() {
    let engine = Transcendental::new(&LibmMath);
    let z = Complex::new(0.7, -1.3);
    for (with_libm, with_std) in [
        (engine.exp(&z), z.exp()),
        (engine.log(&z), z.log()),
        (engine.sqrt(&z), z.sqrt()),
        (engine.sin(&z), z.sin()),
        (engine.tanh(&z), z.tanh()),
        (engine.atan(&z), z.atan()),
    ] {
        assert!(Complex::equals_with_tolerance(&with_libm, &with_std, 1e-14));
    }
}

#[test]
fn boxed_provider_drives_engine() {
    let provider = create_provider(MathProvider::Libm);
    let engine = Transcendental::new(provider.as_ref());
    assert_eq!(engine.sqrt(&Complex::new(-4.0, 0.0)), Complex::new(0.0, 2.0));
    assert!(engine.exp(&Complex::NAN).is_nan());
}
