//! 극형식 생성, 편각, n 제곱근

use super::transcendental::{Transcendental, STD};
use super::Complex;
use crate::config::Constants;
use crate::error::{ComplexError, Result};
use crate::math::RealMath;
use log::debug;
use std::f64::consts::PI;

impl<'a, M: RealMath + ?Sized> Transcendental<'a, M> {
    /// 극형식 r·(cos θ + i·sin θ)
    ///
    /// r 이 무한대이고 θ 가 유한하면 배정밀도 산술이 내는 값을 그대로 돌려준다
    /// (예: `polar(∞, 0) = ∞ + NaN·i`).
    pub fn polar(&self, r: f64, theta: f64) -> Result<Complex> {
        if r < 0.0 {
            debug!("polar rejected negative modulus {}", r);
            return Err(ComplexError::NegativeModulus { modulus: r });
        }
        if r.is_nan() || theta.is_nan() || theta.is_infinite() {
            return Ok(Complex::NAN);
        }
        Ok(Complex::new(
            r * self.math.cos(theta),
            r * self.math.sin(theta),
        ))
    }

    /// 편각, 범위 (-π, π]
    pub fn argument(&self, z: &Complex) -> f64 {
        self.math.atan2(z.imaginary, z.real)
    }

    /// n 개의 n 제곱근을 k = 0..n 순서로 돌려준다
    ///
    /// NaN 이면 `[NAN]`, 무한대면 `[INFINITY]` 한 개짜리 목록이다.
    pub fn nth_root(&self, z: &Complex, n: i64) -> Result<Vec<Complex>> {
        if n <= 0 {
            debug!("nth_root rejected root count {}", n);
            return Err(ComplexError::NonPositiveRootCount { count: n });
        }
        if z.is_nan() {
            return Ok(vec![Complex::NAN]);
        }
        if z.is_infinite() {
            return Ok(vec![Complex::INFINITY]);
        }

        let count = n as f64;
        let modulus = self.math.pow(z.abs(), 1.0 / count);
        let phi0 = self.argument(z) / count;
        let slice = 2.0 * PI / count;

        let roots: Vec<Complex> = (0..n)
            .map(|k| {
                let phi = phi0 + k as f64 * slice;
                Complex::new(modulus * self.math.cos(phi), modulus * self.math.sin(phi))
            })
            .collect();
        Ok(roots)
    }
}

impl Complex {
    /// 극형식 생성 (라디안)
    pub fn polar(r: f64, theta: f64) -> Result<Complex> {
        STD.polar(r, theta)
    }

    /// 극형식 생성 (도)
    pub fn polar_degrees(r: f64, theta: f64) -> Result<Complex> {
        STD.polar(r, theta * PI / Constants::DEGREES_PER_HALF_TURN)
    }

    /// `radians` 가 거짓이면 θ 를 도 단위로 해석한다
    pub fn polar_with(r: f64, theta: f64, radians: bool) -> Result<Complex> {
        if radians {
            Complex::polar(r, theta)
        } else {
            Complex::polar_degrees(r, theta)
        }
    }

    pub fn argument(&self) -> f64 {
        STD.argument(self)
    }

    pub fn nth_root(&self, n: i64) -> Result<Vec<Complex>> {
        STD.nth_root(self, n)
    }
}
