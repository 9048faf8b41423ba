//! 표준 라이브러리 기반 실수 수학 구현

use super::RealMath;

/// `f64` 고유 메서드를 그대로 쓰는 제공자
#[derive(Debug, Clone, Copy, Default)]
pub struct StdMath;

impl StdMath {
    pub const fn new() -> Self {
        StdMath
    }
}

impl RealMath for StdMath {
    #[inline]
    fn sin(&self, x: f64) -> f64 {
        x.sin()
    }

    #[inline]
    fn cos(&self, x: f64) -> f64 {
        x.cos()
    }

    #[inline]
    fn exp(&self, x: f64) -> f64 {
        x.exp()
    }

    #[inline]
    fn log(&self, x: f64) -> f64 {
        x.ln()
    }

    #[inline]
    fn sqrt(&self, x: f64) -> f64 {
        x.sqrt()
    }

    #[inline]
    fn cosh(&self, x: f64) -> f64 {
        x.cosh()
    }

    #[inline]
    fn sinh(&self, x: f64) -> f64 {
        x.sinh()
    }

    #[inline]
    fn atan2(&self, y: f64, x: f64) -> f64 {
        y.atan2(x)
    }

    #[inline]
    fn copysign(&self, magnitude: f64, sign: f64) -> f64 {
        magnitude.copysign(sign)
    }

    #[inline]
    fn pow(&self, base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
