//! 에러 타입 정의
//!
//! NaN 전파는 에러가 아니다. 여기에는 호출자가 잘못된 인자를 넘긴 경우만 담는다.

use thiserror::Error;

/// 잘못된 인자로 인한 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplexError {
    #[error("Negative modulus in polar form: {modulus}")]
    NegativeModulus { modulus: f64 },

    #[error("Root count must be positive, got {count}")]
    NonPositiveRootCount { count: i64 },

    #[error("Unsupported operand type for {operator}: {type_name}")]
    UnsupportedOperand {
        operator: &'static str,
        type_name: String,
    },

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ComplexError>;
