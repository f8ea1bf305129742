//! 데이터 전송 객체(DTO) 모듈
//!
//! API 경계에서 사용되는 요청/응답 구조체들을 정의합니다.
//! 요청 DTO는 `validator`를 통해 입력 검증을 수행하고,
//! 응답 DTO는 클라이언트와 합의된 JSON 계약을 보장합니다.

pub mod drinks;

pub use drinks::*;
