//! 음료 비즈니스 로직 모듈

pub mod drink_service;

pub use drink_service::*;
