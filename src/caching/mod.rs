//! 캐싱 계층 모듈
//!
//! Redis 기반 JSON 캐시 클라이언트를 제공합니다.
//! 음료 목록 조회와 Auth0 JWKS 문서 캐싱에 사용됩니다.

pub mod redis;
