//! 리포지토리 계층 모듈
//!
//! MongoDB 컬렉션에 대한 데이터 액세스와 Redis 캐싱을 담당합니다.
//! 각 리포지토리는 `#[repository]` 매크로를 통해 싱글톤으로 등록됩니다.

pub mod drinks;

pub use drinks::*;
