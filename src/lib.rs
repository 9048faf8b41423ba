//! ieee_complex: IEEE-754 확장 규칙을 따르는 불변 복소수 라이브러리
//!
//! NaN, ±무한대, 부호 있는 0 이 모든 연산을 어떻게 통과하는지 연산별로 정해 두고,
//! 스케일된 절댓값, 사전 스케일 나눗셈, 분기 안전 제곱근 같은 알고리즘으로
//! 중간 오버플로우/언더플로우를 피한다.

pub mod complex;
pub mod config;
pub mod error;
pub mod math;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use complex::{Complex, Transcendental};
pub use error::{ComplexError, Result};
pub use math::{create_provider, LibmMath, MathProvider, RealMath, StdMath};
pub use utils::batch::{
    abs_all, apply_unary, argument_all, from_parts, polar_all, to_parts, UnaryOp,
};

/// 자주 사용되는 핵심 기능들을 쉽게 가져올 수 있는 prelude 모듈
pub mod prelude {
    pub use crate::{
        create_provider, Complex, ComplexError, LibmMath, MathProvider, RealMath, StdMath,
        Transcendental, UnaryOp,
    };
}
