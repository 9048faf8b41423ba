//! 복소수 연산의 수치 규칙을 위한 상수값 정의

/// 특수값 처리와 해시 계약에 쓰이는 상수들
pub struct Constants;

impl Constants {
    /// tan/tanh 포화 경계 (cosh(2x) 오버플로우 방지)
    pub const SATURATION_LIMIT: f64 = 20.0;

    /// NaN 을 포함한 모든 값의 해시
    pub const NAN_HASH: i32 = 7;

    /// 허수부 해시 혼합 계수
    pub const HASH_IMAGINARY_FACTOR: i32 = 17;

    /// 최종 해시 혼합 계수
    pub const HASH_FACTOR: i32 = 37;

    /// 반 바퀴의 도 단위 값 (θ·π/180 변환용)
    pub const DEGREES_PER_HALF_TURN: f64 = 180.0;
}
