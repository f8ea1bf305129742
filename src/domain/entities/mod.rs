//! 도메인 엔티티 모듈
//!
//! MongoDB에 영속화되는 핵심 비즈니스 객체들을 정의합니다.

pub mod drinks;

pub use drinks::*;
