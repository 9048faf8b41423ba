//! libm 기반 실수 수학 구현
//! 플랫폼 수학 라이브러리에 의존하지 않아 결과가 어디서나 같다

use super::RealMath;

#[derive(Debug, Clone, Copy, Default)]
pub struct LibmMath;

impl LibmMath {
    pub const fn new() -> Self {
        LibmMath
    }
}

impl RealMath for LibmMath {
    fn sin(&self, x: f64) -> f64 {
        libm::sin(x)
    }

    fn cos(&self, x: f64) -> f64 {
        libm::cos(x)
    }

    fn exp(&self, x: f64) -> f64 {
        libm::exp(x)
    }

    fn log(&self, x: f64) -> f64 {
        libm::log(x)
    }

    fn sqrt(&self, x: f64) -> f64 {
        libm::sqrt(x)
    }

    fn cosh(&self, x: f64) -> f64 {
        libm::cosh(x)
    }

    fn sinh(&self, x: f64) -> f64 {
        libm::sinh(x)
    }

    fn atan2(&self, y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }

    fn copysign(&self, magnitude: f64, sign: f64) -> f64 {
        libm::copysign(magnitude, sign)
    }

    fn pow(&self, base: f64, exponent: f64) -> f64 {
        libm::pow(base, exponent)
    }
}
