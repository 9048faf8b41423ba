//! 대수 연산자 구현
//!
//! 이항 연산자는 복소수와 실수(`f64`) 피연산자를 모두 받는다.
//! NaN 이 끼어들면 결과는 항상 `Complex::NAN` 이다.

use super::Complex;
use log::trace;
use num::traits::{Inv, One, Zero};
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Complex {
    /// 켤레 복소수 (real, -imaginary)
    pub fn conjugate(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real, -self.imaginary)
    }

    /// 역수 1 / z
    ///
    /// 작은 성분을 큰 성분으로 나눈 비율을 먼저 구해 중간 오버플로우를 피한다.
    pub fn reciprocal(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        if self.real == 0.0 && self.imaginary == 0.0 {
            return Complex::INFINITY;
        }
        if self.is_infinite() {
            return Complex::ZERO;
        }

        if self.real.abs() < self.imaginary.abs() {
            let q = self.real / self.imaginary;
            let scale = 1.0 / (self.real * q + self.imaginary);
            Complex::new(scale * q, -scale)
        } else {
            let q = self.imaginary / self.real;
            let scale = 1.0 / (self.imaginary * q + self.real);
            Complex::new(scale, -scale * q)
        }
    }

    /// 절댓값 |z|
    ///
    /// 성분을 직접 제곱하지 않고 비율로 스케일해 큰 값에서도 오버플로우하지 않는다.
    pub fn abs(&self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        if self.is_infinite() {
            return f64::INFINITY;
        }

        if self.real.abs() < self.imaginary.abs() {
            if self.real == 0.0 {
                return self.imaginary.abs();
            }
            let q = self.real / self.imaginary;
            self.imaginary.abs() * (1.0 + q * q).sqrt()
        } else {
            if self.imaginary == 0.0 {
                return self.real.abs();
            }
            let q = self.imaginary / self.real;
            self.real.abs() * (1.0 + q * q).sqrt()
        }
    }

    /// 사전 스케일 나눗셈. 피제수와 제수 모두 NaN 이 아니고 제수가 0 이 아닐 때만 호출된다.
    fn divide_scaled(&self, divisor: &Complex) -> Complex {
        let c = divisor.real;
        let d = divisor.imaginary;

        if c.abs() < d.abs() {
            let q = c / d;
            let denominator = c * q + d;
            Complex::new(
                (self.real * q + self.imaginary) / denominator,
                (self.imaginary * q - self.real) / denominator,
            )
        } else {
            let q = d / c;
            let denominator = d * q + c;
            Complex::new(
                (self.imaginary * q + self.real) / denominator,
                (self.imaginary - self.real * q) / denominator,
            )
        }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        if self.is_nan() || rhs.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    fn add(self, rhs: f64) -> Complex {
        if self.is_nan() || rhs.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real + rhs, self.imaginary)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        if self.is_nan() || rhs.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, rhs: f64) -> Complex {
        if self.is_nan() || rhs.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real - rhs, self.imaginary)
    }
}

impl Mul for Complex {
    type Output = Complex;

    /// 한 성분이라도 무한대면 부호와 상관없이 `Complex::INFINITY`
    fn mul(self, rhs: Complex) -> Complex {
        if self.is_nan() || rhs.is_nan() {
            return Complex::NAN;
        }
        if self.real.is_infinite()
            || self.imaginary.is_infinite()
            || rhs.real.is_infinite()
            || rhs.imaginary.is_infinite()
        {
            return Complex::INFINITY;
        }
        Complex::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, rhs: f64) -> Complex {
        if self.is_nan() || rhs.is_nan() {
            return Complex::NAN;
        }
        if self.real.is_infinite() || self.imaginary.is_infinite() || rhs.is_infinite() {
            return Complex::INFINITY;
        }
        Complex::new(self.real * rhs, self.imaginary * rhs)
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        if self.is_nan() || rhs.is_nan() {
            return Complex::NAN;
        }
        if rhs.real == 0.0 && rhs.imaginary == 0.0 {
            trace!("division by zero complex, result is NaN");
            return Complex::NAN;
        }
        if rhs.is_infinite() && self.is_finite() {
            return Complex::ZERO;
        }
        self.divide_scaled(&rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, rhs: f64) -> Complex {
        if self.is_nan() || rhs.is_nan() {
            return Complex::NAN;
        }
        if rhs == 0.0 {
            trace!("division by zero real, result is NaN");
            return Complex::NAN;
        }
        if rhs.is_infinite() {
            return if self.is_finite() {
                Complex::ZERO
            } else {
                Complex::NAN
            };
        }
        Complex::new(self.real / rhs, self.imaginary / rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(-self.real, -self.imaginary)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        -*self
    }
}

// 참조 피연산자는 값 구현으로 넘긴다
macro_rules! forward_ref_binop {
    ($($imp:ident, $method:ident, $rhs:ty);* $(;)?) => {$(
        impl<'a> $imp<&'a $rhs> for &'a Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, rhs: &'a $rhs) -> Complex {
                $imp::$method(*self, *rhs)
            }
        }

        impl<'a> $imp<&'a $rhs> for Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, rhs: &'a $rhs) -> Complex {
                $imp::$method(self, *rhs)
            }
        }

        impl<'a> $imp<$rhs> for &'a Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, rhs: $rhs) -> Complex {
                $imp::$method(*self, rhs)
            }
        }
    )*}
}

forward_ref_binop! {
    Add, add, Complex;
    Add, add, f64;
    Sub, sub, Complex;
    Sub, sub, f64;
    Mul, mul, Complex;
    Mul, mul, f64;
    Div, div, Complex;
    Div, div, f64;
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}

impl Inv for Complex {
    type Output = Complex;

    fn inv(self) -> Complex {
        self.reciprocal()
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + *z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * *z)
    }
}
