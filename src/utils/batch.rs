//! ndarray 배열에 대한 원소별 복소수 연산
//!
//! `parallel` 기능이 켜지면 rayon 스레드 풀에서 원소별로 계산한다.
//! 모든 원소 연산이 순수 함수라 결과는 순차 실행과 같다.

use crate::complex::Complex;
use crate::error::{ComplexError, Result};
use ndarray::{Array1, Zip};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 배열에 적용할 수 있는 단항 복소수 연산
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Conjugate,
    Reciprocal,
    Exp,
    Log,
    Sqrt,
    Sqrt1z,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Asin,
    Acos,
    Atan,
}

impl UnaryOp {
    /// 단일 값에 연산 적용
    pub fn apply(self, z: Complex) -> Complex {
        match self {
            UnaryOp::Negate => -z,
            UnaryOp::Conjugate => z.conjugate(),
            UnaryOp::Reciprocal => z.reciprocal(),
            UnaryOp::Exp => z.exp(),
            UnaryOp::Log => z.log(),
            UnaryOp::Sqrt => z.sqrt(),
            UnaryOp::Sqrt1z => z.sqrt1z(),
            UnaryOp::Sin => z.sin(),
            UnaryOp::Cos => z.cos(),
            UnaryOp::Tan => z.tan(),
            UnaryOp::Sinh => z.sinh(),
            UnaryOp::Cosh => z.cosh(),
            UnaryOp::Tanh => z.tanh(),
            UnaryOp::Asin => z.asin(),
            UnaryOp::Acos => z.acos(),
            UnaryOp::Atan => z.atan(),
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn map_elements<T, F>(values: &Array1<Complex>, f: F) -> Array1<T>
where
    T: Send,
    F: Fn(Complex) -> T + Send + Sync,
{
    values.mapv(f)
}

#[cfg(feature = "parallel")]
fn map_elements<T, F>(values: &Array1<Complex>, f: F) -> Array1<T>
where
    T: Send,
    F: Fn(Complex) -> T + Send + Sync,
{
    let mapped: Vec<T> = values.to_vec().into_par_iter().map(f).collect();
    Array1::from(mapped)
}

fn check_lengths(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        log::debug!("batch length mismatch: {} vs {}", expected, actual);
        return Err(ComplexError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

/// 모든 원소에 단항 연산 적용
pub fn apply_unary(values: &Array1<Complex>, op: UnaryOp) -> Array1<Complex> {
    map_elements(values, move |z| op.apply(z))
}

/// 원소별 절댓값
pub fn abs_all(values: &Array1<Complex>) -> Array1<f64> {
    map_elements(values, |z| z.abs())
}

/// 원소별 편각
pub fn argument_all(values: &Array1<Complex>) -> Array1<f64> {
    map_elements(values, |z| z.argument())
}

/// 실수부/허수부 배열로 복소수 배열 생성
pub fn from_parts(real: &Array1<f64>, imaginary: &Array1<f64>) -> Result<Array1<Complex>> {
    check_lengths(real.len(), imaginary.len())?;
    Ok(Zip::from(real)
        .and(imaginary)
        .map_collect(|&re, &im| Complex::new(re, im)))
}

/// 실수부/허수부 배열로 분해
pub fn to_parts(values: &Array1<Complex>) -> (Array1<f64>, Array1<f64>) {
    (
        values.mapv(|z| z.real()),
        values.mapv(|z| z.imaginary()),
    )
}

/// 극형식 배열로 복소수 배열 생성. 음의 모듈러스가 하나라도 있으면 실패한다
pub fn polar_all(
    modulus: &Array1<f64>,
    theta: &Array1<f64>,
    radians: bool,
) -> Result<Array1<Complex>> {
    check_lengths(modulus.len(), theta.len())?;
    let values = modulus
        .iter()
        .zip(theta.iter())
        .map(|(&r, &t)| Complex::polar_with(r, t, radians))
        .collect::<Result<Vec<_>>>()?;
    Ok(Array1::from(values))
}
