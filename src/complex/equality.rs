//! 동등성과 해시
//!
//! NaN 을 포함한 값은 모두 서로 같고 해시도 하나의 상수로 모인다.
//! 그 외에는 두 성분을 배정밀도 `==` 로 비교하므로 `0.0` 과 `-0.0` 도 같다.

use super::Complex;
use crate::config::Constants;
use crate::utils::numeric::{
    double_hash, equals_ulps, equals_with_relative_tolerance, equals_with_tolerance,
};
use std::hash::{Hash, Hasher};

impl PartialEq for Complex {
    fn eq(&self, other: &Complex) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if other.is_nan() {
            return self.is_nan();
        }
        self.real == other.real && self.imaginary == other.imaginary
    }
}

// NaN 이 하나의 동치류로 묶이므로 반사성이 성립한다
impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl Complex {
    /// `37 * (17 * hash(imaginary) + hash(real))`, NaN 이면 7
    pub fn hash_code(&self) -> i32 {
        if self.is_nan() {
            return Constants::NAN_HASH;
        }
        Constants::HASH_FACTOR.wrapping_mul(
            Constants::HASH_IMAGINARY_FACTOR
                .wrapping_mul(double_hash(self.imaginary))
                .wrapping_add(double_hash(self.real)),
        )
    }

    /// 성분별로 `max_ulps` 이내면 참
    pub fn equals_ulps(x: &Complex, y: &Complex, max_ulps: u64) -> bool {
        if x.is_nan() || y.is_nan() {
            return x.is_nan() && y.is_nan();
        }
        equals_ulps(x.real, y.real, max_ulps) && equals_ulps(x.imaginary, y.imaginary, max_ulps)
    }

    /// 성분별 절대 오차가 `eps` 이하이면 참
    pub fn equals_with_tolerance(x: &Complex, y: &Complex, eps: f64) -> bool {
        if x.is_nan() || y.is_nan() {
            return x.is_nan() && y.is_nan();
        }
        equals_with_tolerance(x.real, y.real, eps)
            && equals_with_tolerance(x.imaginary, y.imaginary, eps)
    }

    /// 성분별 상대 오차가 `eps` 이하이면 참
    pub fn equals_with_relative_tolerance(x: &Complex, y: &Complex, eps: f64) -> bool {
        if x.is_nan() || y.is_nan() {
            return x.is_nan() && y.is_nan();
        }
        equals_with_relative_tolerance(x.real, y.real, eps)
            && equals_with_relative_tolerance(x.imaginary, y.imaginary, eps)
    }
}
