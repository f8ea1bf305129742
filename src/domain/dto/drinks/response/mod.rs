//! 음료 응답 DTO 모듈

pub mod drink_response;

pub use drink_response::*;
