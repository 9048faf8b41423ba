//! 설정 모듈

pub mod constants;

pub use constants::Constants;
