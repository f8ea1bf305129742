//! 도메인 모델 모듈
//!
//! 영속화 대상이 아닌 값 객체와 인증 컨텍스트 모델을 정의합니다.
//! 엔티티(`../entities/`)가 데이터베이스 문서라면, 이 모듈의 타입들은
//! 요청 처리 과정에서만 살아있는 런타임 모델입니다.

pub mod auth;

pub use auth::*;
