//! 초월함수 계층
//!
//! 대수 연산자와 외부 실수 수학 제공자(`RealMath`)만으로 조합한다.
//! `Complex` 의 고유 메서드는 `StdMath` 를 쓰는 엔진으로 위임한다.

use super::Complex;
use crate::config::Constants;
use crate::math::{RealMath, StdMath};
use log::trace;

/// 실수 수학 제공자 위에서 동작하는 복소 초월함수 엔진
pub struct Transcendental<'a, M: RealMath + ?Sized> {
    pub(super) math: &'a M,
}

impl<M: RealMath + ?Sized> Clone for Transcendental<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RealMath + ?Sized> Copy for Transcendental<'_, M> {}

/// 고유 메서드가 쓰는 기본 엔진
pub(super) const STD: Transcendental<'static, StdMath> = Transcendental { math: &StdMath };

impl<'a, M: RealMath + ?Sized> Transcendental<'a, M> {
    /// 새 엔진 생성
    pub fn new(math: &'a M) -> Self {
        Transcendental { math }
    }

    /// e^z
    pub fn exp(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        let exp_real = self.math.exp(z.real);
        Complex::new(
            exp_real * self.math.cos(z.imaginary),
            exp_real * self.math.sin(z.imaginary),
        )
    }

    /// 주치 자연로그 (log|z|, arg z)
    pub fn log(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.math.log(z.abs()),
            self.math.atan2(z.imaginary, z.real),
        )
    }

    /// z^x = exp(log(z) · x)
    pub fn pow(&self, z: &Complex, x: &Complex) -> Complex {
        self.exp(&(self.log(z) * *x))
    }

    /// 실수 지수 거듭제곱 exp(log(z) · x)
    pub fn power(&self, z: &Complex, x: f64) -> Complex {
        self.exp(&(self.log(z) * x))
    }

    /// 주치 제곱근
    pub fn sqrt(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        if z.real == 0.0 && z.imaginary == 0.0 {
            return Complex::new(0.0, 0.0);
        }

        let t = self.math.sqrt((z.real.abs() + z.abs()) / 2.0);
        if z.real >= 0.0 {
            Complex::new(t, z.imaginary / (2.0 * t))
        } else {
            Complex::new(
                z.imaginary.abs() / (2.0 * t),
                self.math.copysign(1.0, z.imaginary) * t,
            )
        }
    }

    /// sqrt(1 - z²)
    pub fn sqrt1z(&self, z: &Complex) -> Complex {
        self.sqrt(&(Complex::ONE - *z * *z))
    }

    /// sin(a+bi) = sin(a)·cosh(b) + cos(a)·sinh(b)i
    pub fn sin(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.math.sin(z.real) * self.math.cosh(z.imaginary),
            self.math.cos(z.real) * self.math.sinh(z.imaginary),
        )
    }

    /// cos(a+bi) = cos(a)·cosh(b) - sin(a)·sinh(b)i
    pub fn cos(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.math.cos(z.real) * self.math.cosh(z.imaginary),
            -self.math.sin(z.real) * self.math.sinh(z.imaginary),
        )
    }

    /// sinh(a+bi) = sinh(a)·cos(b) + cosh(a)·sin(b)i
    pub fn sinh(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.math.sinh(z.real) * self.math.cos(z.imaginary),
            self.math.cosh(z.real) * self.math.sin(z.imaginary),
        )
    }

    /// cosh(a+bi) = cosh(a)·cos(b) + sinh(a)·sin(b)i
    pub fn cosh(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.math.cosh(z.real) * self.math.cos(z.imaginary),
            self.math.sinh(z.real) * self.math.sin(z.imaginary),
        )
    }

    /// 탄젠트. 허수부가 ±20 을 넘으면 ±i 로 포화한다
    pub fn tan(&self, z: &Complex) -> Complex {
        if z.is_nan() || z.real.is_infinite() {
            return Complex::NAN;
        }
        if z.imaginary > Constants::SATURATION_LIMIT {
            trace!("tan saturated to i for imaginary part {}", z.imaginary);
            return Complex::new(0.0, 1.0);
        }
        if z.imaginary < -Constants::SATURATION_LIMIT {
            trace!("tan saturated to -i for imaginary part {}", z.imaginary);
            return Complex::new(0.0, -1.0);
        }

        let real2 = 2.0 * z.real;
        let imaginary2 = 2.0 * z.imaginary;
        let d = self.math.cos(real2) + self.math.cosh(imaginary2);
        Complex::new(self.math.sin(real2) / d, self.math.sinh(imaginary2) / d)
    }

    /// 쌍곡 탄젠트. 실수부가 ±20 을 넘으면 ±1 로 포화한다
    pub fn tanh(&self, z: &Complex) -> Complex {
        if z.is_nan() || z.imaginary.is_infinite() {
            return Complex::NAN;
        }
        if z.real > Constants::SATURATION_LIMIT {
            trace!("tanh saturated to 1 for real part {}", z.real);
            return Complex::new(1.0, 0.0);
        }
        if z.real < -Constants::SATURATION_LIMIT {
            trace!("tanh saturated to -1 for real part {}", z.real);
            return Complex::new(-1.0, 0.0);
        }

        let real2 = 2.0 * z.real;
        let imaginary2 = 2.0 * z.imaginary;
        let d = self.math.cosh(real2) + self.math.cos(imaginary2);
        Complex::new(self.math.sinh(real2) / d, self.math.sin(imaginary2) / d)
    }

    /// acos(z) = -i·log(z + i·sqrt(1 - z²))
    pub fn acos(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        self.log(&(*z + self.sqrt1z(z) * Complex::I)) * -Complex::I
    }

    /// asin(z) = -i·log(sqrt(1 - z²) + i·z)
    pub fn asin(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        self.log(&(self.sqrt1z(z) + *z * Complex::I)) * -Complex::I
    }

    /// atan(z) = (i/2)·log((i + z) / (i - z))
    pub fn atan(&self, z: &Complex) -> Complex {
        if z.is_nan() {
            return Complex::NAN;
        }
        let half_i = Complex::I / Complex::new(2.0, 0.0);
        self.log(&((*z + Complex::I) / (Complex::I - *z))) * half_i
    }
}

impl Complex {
    pub fn exp(&self) -> Complex {
        STD.exp(self)
    }

    pub fn log(&self) -> Complex {
        STD.log(self)
    }

    /// 복소 지수 거듭제곱. 밑이 0, NaN, 무한대면 `log` 를 거쳐 NaN 이 된다
    pub fn pow(&self, x: Complex) -> Complex {
        STD.pow(self, &x)
    }

    /// 실수 지수 거듭제곱
    pub fn power(&self, x: f64) -> Complex {
        STD.power(self, x)
    }

    pub fn sqrt(&self) -> Complex {
        STD.sqrt(self)
    }

    pub fn sqrt1z(&self) -> Complex {
        STD.sqrt1z(self)
    }

    pub fn sin(&self) -> Complex {
        STD.sin(self)
    }

    pub fn cos(&self) -> Complex {
        STD.cos(self)
    }

    pub fn sinh(&self) -> Complex {
        STD.sinh(self)
    }

    pub fn cosh(&self) -> Complex {
        STD.cosh(self)
    }

    pub fn tan(&self) -> Complex {
        STD.tan(self)
    }

    pub fn tanh(&self) -> Complex {
        STD.tanh(self)
    }

    pub fn asin(&self) -> Complex {
        STD.asin(self)
    }

    pub fn acos(&self) -> Complex {
        STD.acos(self)
    }

    pub fn atan(&self) -> Complex {
        STD.atan(self)
    }
}
