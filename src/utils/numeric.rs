//! 수치 계산 유틸리티 함수들

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// 배정밀도 값의 32비트 해시 (상위/하위 워드 XOR 접기)
///
/// `0.0 == -0.0` 이므로 해시 전에 음의 0 을 양의 0 으로 접는다.
pub fn double_hash(x: f64) -> i32 {
    let x = if x == 0.0 { 0.0 } else { x };
    let bits = x.to_bits();
    (bits ^ (bits >> 32)) as i32
}

/// 두 값 사이에 있는 표현 가능한 배정밀도 값의 개수
///
/// 어느 한쪽이 NaN 이면 `None`. 부호가 다르면 0 을 가로지르는 거리를 센다.
pub fn ulps_between(x: f64, y: f64) -> Option<u64> {
    if x.is_nan() || y.is_nan() {
        return None;
    }
    let x_bits = x.to_bits();
    let y_bits = y.to_bits();
    if (x_bits ^ y_bits) & SIGN_MASK == 0 {
        Some(x_bits.abs_diff(y_bits))
    } else {
        Some((x_bits & !SIGN_MASK).saturating_add(y_bits & !SIGN_MASK))
    }
}

/// `max_ulps` 이내로 떨어진 두 값은 같다고 본다. NaN 은 어떤 값과도 다르다.
pub fn equals_ulps(x: f64, y: f64, max_ulps: u64) -> bool {
    matches!(ulps_between(x, y), Some(d) if d <= max_ulps)
}

/// 절대 허용오차 비교
pub fn equals_with_tolerance(x: f64, y: f64, eps: f64) -> bool {
    equals_ulps(x, y, 1) || (y - x).abs() <= eps
}

/// 상대 허용오차 비교
pub fn equals_with_relative_tolerance(x: f64, y: f64, eps: f64) -> bool {
    if equals_ulps(x, y, 1) {
        return true;
    }
    let absolute_max = x.abs().max(y.abs());
    ((x - y) / absolute_max).abs() <= eps
}
