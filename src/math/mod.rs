//! 실수 수학 함수 제공자 모듈
//!
//! 복소수 초월함수는 여기 정의된 실수 함수들 위에서 조합된다.
//! 어떤 구현을 쓰든 IEEE-754 규칙(무한대, NaN, 부호 있는 0)을 따라야 한다.

mod libm_math;
mod std_math;

pub use libm_math::LibmMath;
pub use std_math::StdMath;

/// 지원하는 실수 수학 제공자 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathProvider {
    /// 표준 라이브러리 `f64` 메서드
    #[default]
    Std,
    /// `libm` 크레이트 (플랫폼 간 비트 단위 재현성)
    Libm,
}

/// 실수 수학 함수의 핵심 트레이트
pub trait RealMath: Send + Sync {
    fn sin(&self, x: f64) -> f64;

    fn cos(&self, x: f64) -> f64;

    fn exp(&self, x: f64) -> f64;

    /// 자연로그
    fn log(&self, x: f64) -> f64;

    fn sqrt(&self, x: f64) -> f64;

    fn cosh(&self, x: f64) -> f64;

    fn sinh(&self, x: f64) -> f64;

    /// 사분면 아크탄젠트, 범위 (-π, π]
    fn atan2(&self, y: f64, x: f64) -> f64;

    /// `magnitude` 의 크기에 `sign` 의 부호 비트를 붙인 값
    fn copysign(&self, magnitude: f64, sign: f64) -> f64;

    /// 실수 거듭제곱 (n 제곱근의 크기 계산용)
    fn pow(&self, base: f64, exponent: f64) -> f64;
}

/// 제공자 인스턴스 생성 팩토리 함수
pub fn create_provider(provider: MathProvider) -> Box<dyn RealMath> {
    match provider {
        MathProvider::Std => Box::new(StdMath::new()),
        MathProvider::Libm => Box::new(LibmMath::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn providers() -> Vec<Box<dyn RealMath>> {
        vec![
            create_provider(MathProvider::Std),
            create_provider(MathProvider::Libm),
        ]
    }

    #[test]
    fn atan2_follows_ieee_zero_conventions() {
        for m in providers() {
            assert_eq!(m.atan2(0.0, 0.0), 0.0);
            assert_eq!(m.atan2(0.0, -1.0), std::f64::consts::PI);
            assert_eq!(m.atan2(f64::INFINITY, f64::INFINITY), std::f64::consts::FRAC_PI_4);
        }
    }

    #[test]
    fn copysign_takes_sign_bit_of_negative_zero() {
        for m in providers() {
            assert_eq!(m.copysign(1.0, -0.0), -1.0);
            assert_eq!(m.copysign(-2.0, 0.0), 2.0);
        }
    }

    #[test]
    fn providers_agree_on_exact_values() {
        for m in providers() {
            assert_eq!(m.sqrt(16.0), 4.0);
            assert_eq!(m.exp(0.0), 1.0);
            assert_eq!(m.log(1.0), 0.0);
            assert_eq!(m.cosh(0.0), 1.0);
            assert_eq!(m.sinh(0.0), 0.0);
            assert_eq!(m.pow(8.0, 2.0), 64.0);
            assert_eq!(m.log(0.0), f64::NEG_INFINITY);
        }
    }

    #[test]
    fn default_provider_is_std() {
        assert_eq!(MathProvider::default(), MathProvider::Std);
    }
}
