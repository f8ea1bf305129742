//! 인증 서비스 모듈
//!
//! Auth0에서 발급된 RS256 액세스 토큰의 검증을 담당합니다.
//! 토큰 서명 검증에 필요한 JWKS 공개키 문서는 Redis에 캐싱됩니다.

pub mod token_service;

pub use token_service::*;
