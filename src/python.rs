//! 파이썬 바인딩
//!
//! 파이썬에서는 피연산자 타입이 실행 시간에 정해지므로 이항 연산자가
//! `Complex` 와 실수만 받고, 그 밖의 타입은 `TypeError` 로 거절한다.

use crate::complex::Complex;
use crate::error::ComplexError;
use crate::utils::batch;
use numpy::{Complex64, IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::basic::CompareOp;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

impl From<ComplexError> for PyErr {
    fn from(err: ComplexError) -> PyErr {
        match err {
            ComplexError::UnsupportedOperand { .. } => PyTypeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// 오른쪽 피연산자
enum Operand {
    Complex(Complex),
    Real(f64),
}

fn operand(other: &PyAny, operator: &'static str) -> PyResult<Operand> {
    if let Ok(value) = other.extract::<PyComplex>() {
        return Ok(Operand::Complex(value.inner));
    }
    if let Ok(value) = other.extract::<f64>() {
        return Ok(Operand::Real(value));
    }
    let type_name = other.get_type().name()?.to_string();
    log::debug!("unsupported operand {} for {}", type_name, operator);
    Err(ComplexError::UnsupportedOperand {
        operator,
        type_name,
    }
    .into())
}

/// 파이썬에 노출되는 복소수 클래스
#[pyclass(name = "Complex")]
#[derive(Clone, Copy)]
pub struct PyComplex {
    inner: Complex,
}

impl From<Complex> for PyComplex {
    fn from(inner: Complex) -> Self {
        PyComplex { inner }
    }
}

#[pymethods]
impl PyComplex {
    #[new]
    #[pyo3(signature = (real, imaginary = 0.0))]
    fn new(real: f64, imaginary: f64) -> Self {
        Complex::new(real, imaginary).into()
    }

    #[staticmethod]
    #[pyo3(signature = (r, theta, radians = true))]
    fn polar(r: f64, theta: f64, radians: bool) -> PyResult<Self> {
        Ok(Complex::polar_with(r, theta, radians)?.into())
    }

    #[classattr]
    #[pyo3(name = "ZERO")]
    fn zero() -> Self {
        Complex::ZERO.into()
    }

    #[classattr]
    #[pyo3(name = "ONE")]
    fn one() -> Self {
        Complex::ONE.into()
    }

    #[classattr]
    #[pyo3(name = "I")]
    fn i() -> Self {
        Complex::I.into()
    }

    #[classattr]
    #[pyo3(name = "NAN")]
    fn nan() -> Self {
        Complex::NAN.into()
    }

    #[classattr]
    #[pyo3(name = "INFINITY")]
    fn infinity() -> Self {
        Complex::INFINITY.into()
    }

    #[getter]
    fn real(&self) -> f64 {
        self.inner.real()
    }

    #[getter]
    fn imaginary(&self) -> f64 {
        self.inner.imaginary()
    }

    #[getter]
    fn is_nan(&self) -> bool {
        self.inner.is_nan()
    }

    #[getter]
    fn is_infinite(&self) -> bool {
        self.inner.is_infinite()
    }

    #[getter]
    fn is_finite(&self) -> bool {
        self.inner.is_finite()
    }

    fn __add__(&self, other: &PyAny) -> PyResult<Self> {
        Ok(match operand(other, "+")? {
            Operand::Complex(z) => self.inner + z,
            Operand::Real(x) => self.inner + x,
        }
        .into())
    }

    fn __sub__(&self, other: &PyAny) -> PyResult<Self> {
        Ok(match operand(other, "-")? {
            Operand::Complex(z) => self.inner - z,
            Operand::Real(x) => self.inner - x,
        }
        .into())
    }

    fn __mul__(&self, other: &PyAny) -> PyResult<Self> {
        Ok(match operand(other, "*")? {
            Operand::Complex(z) => self.inner * z,
            Operand::Real(x) => self.inner * x,
        }
        .into())
    }

    fn __truediv__(&self, other: &PyAny) -> PyResult<Self> {
        Ok(match operand(other, "/")? {
            Operand::Complex(z) => self.inner / z,
            Operand::Real(x) => self.inner / x,
        }
        .into())
    }

    fn __neg__(&self) -> Self {
        (-self.inner).into()
    }

    fn __abs__(&self) -> f64 {
        self.inner.abs()
    }

    fn __richcmp__(&self, other: &PyAny, op: CompareOp, py: Python<'_>) -> PyObject {
        let other = match other.extract::<PyComplex>() {
            Ok(other) => other,
            Err(_) => return py.NotImplemented(),
        };
        match op {
            CompareOp::Eq => (self.inner == other.inner).into_py(py),
            CompareOp::Ne => (self.inner != other.inner).into_py(py),
            _ => py.NotImplemented(),
        }
    }

    fn __hash__(&self) -> isize {
        self.inner.hash_code() as isize
    }

    fn __repr__(&self) -> String {
        format!("Complex({}, {})", self.inner.real(), self.inner.imaginary())
    }

    fn conjugate(&self) -> Self {
        self.inner.conjugate().into()
    }

    fn reciprocal(&self) -> Self {
        self.inner.reciprocal().into()
    }

    fn argument(&self) -> f64 {
        self.inner.argument()
    }

    fn pow(&self, x: &PyAny) -> PyResult<Self> {
        Ok(match operand(x, "pow")? {
            Operand::Complex(z) => self.inner.pow(z),
            Operand::Real(x) => self.inner.power(x),
        }
        .into())
    }

    fn exp(&self) -> Self {
        self.inner.exp().into()
    }

    fn log(&self) -> Self {
        self.inner.log().into()
    }

    fn sqrt(&self) -> Self {
        self.inner.sqrt().into()
    }

    fn sqrt1z(&self) -> Self {
        self.inner.sqrt1z().into()
    }

    fn sin(&self) -> Self {
        self.inner.sin().into()
    }

    fn cos(&self) -> Self {
        self.inner.cos().into()
    }

    fn tan(&self) -> Self {
        self.inner.tan().into()
    }

    fn sinh(&self) -> Self {
        self.inner.sinh().into()
    }

    fn cosh(&self) -> Self {
        self.inner.cosh().into()
    }

    fn tanh(&self) -> Self {
        self.inner.tanh().into()
    }

    fn asin(&self) -> Self {
        self.inner.asin().into()
    }

    fn acos(&self) -> Self {
        self.inner.acos().into()
    }

    fn atan(&self) -> Self {
        self.inner.atan().into()
    }

    fn nth_root(&self, n: i64) -> PyResult<Vec<Self>> {
        Ok(self
            .inner
            .nth_root(n)?
            .into_iter()
            .map(PyComplex::from)
            .collect())
    }
}

/// complex128 배열의 원소별 절댓값
#[pyfunction]
fn abs_array<'py>(py: Python<'py>, values: PyReadonlyArray1<'py, Complex64>) -> &'py PyArray1<f64> {
    let values = values.as_array().mapv(Complex::from);
    batch::abs_all(&values).into_pyarray(py)
}

#[pymodule]
fn ieee_complex(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyComplex>()?;
    m.add_function(wrap_pyfunction!(abs_array, m)?)?;
    Ok(())
}
