//! IEEE-754 확장 규칙을 따르는 불변 복소수 값 타입
//!
//! 모든 연산은 새 값을 돌려주며 기존 값을 바꾸지 않는다.
//! NaN 과 무한대가 어떻게 전파되는지는 연산별로 정해져 있고,
//! 수학적 이상화가 아니라 배정밀도 산술이 만들어내는 결과를 따른다.

mod equality;
mod ops;
mod roots;
pub mod transcendental;

pub use transcendental::Transcendental;

use half::f16;

/// 배정밀도 복소수
///
/// 실수부와 허수부 두 필드만 가진다. 동등성은 NaN 을 하나로 묶는 것을 빼면 구조적이다.
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    /// 0 + 0i
    pub const ZERO: Complex = Complex::new(0.0, 0.0);

    /// 1 + 0i
    pub const ONE: Complex = Complex::new(1.0, 0.0);

    /// 허수 단위 0 + 1i
    pub const I: Complex = Complex::new(0.0, 1.0);

    /// NaN + NaNi, 정의되지 않은 모든 결과의 대표값
    pub const NAN: Complex = Complex::new(f64::NAN, f64::NAN);

    /// +∞ + ∞i
    pub const INFINITY: Complex = Complex::new(f64::INFINITY, f64::INFINITY);

    /// 두 성분을 그대로 저장한다
    #[inline]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    /// 허수부가 0 인 복소수
    #[inline]
    pub const fn from_real(real: f64) -> Self {
        Complex::new(real, 0.0)
    }

    #[inline]
    pub const fn real(&self) -> f64 {
        self.real
    }

    #[inline]
    pub const fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// 어느 한 성분이라도 NaN 이면 참
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }

    /// NaN 이 아니고 한 성분 이상이 ±∞ 이면 참
    #[inline]
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.real.is_infinite() || self.imaginary.is_infinite())
    }

    /// NaN 도 무한대도 아니면 참
    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl Default for Complex {
    fn default() -> Self {
        Complex::ZERO
    }
}

// 실수 → 복소수 변환 (허수부 0)
macro_rules! impl_from_real {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Complex {
            #[inline]
            fn from(value: $t) -> Self {
                Complex::from_real(value as f64)
            }
        }
    )*}
}
impl_from_real!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f16> for Complex {
    fn from(value: f16) -> Self {
        Complex::from_real(value.to_f64())
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Complex::new(real, imaginary)
    }
}

impl From<num::Complex<f64>> for Complex {
    fn from(value: num::Complex<f64>) -> Self {
        Complex::new(value.re, value.im)
    }
}

impl From<Complex> for num::Complex<f64> {
    fn from(value: Complex) -> Self {
        num::Complex::new(value.real, value.imaginary)
    }
}
