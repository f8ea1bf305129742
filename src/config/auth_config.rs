//! # Authentication Configuration Module
//!
//! Auth0 토큰 검증에 필요한 서버 측 설정을 관리하는 모듈입니다.
//! 클라이언트 환경 설정([`crate::config::environment`])의 `auth0` 필드를
//! 기반으로 JWKS 엔드포인트, issuer, audience 등 검증 파라미터를 유도합니다.
//!
//! ## 토큰 검증 파라미터
//!
//! | 파라미터 | 출처 | 용도 |
//! |----------|------|------|
//! | JWKS URL | `auth0.url` + `.well-known/jwks.json` | RS256 공개키 조회 |
//! | issuer | `auth0.url` | `iss` 클레임 검증 |
//! | audience | `auth0.audience` | `aud` 클레임 검증 |
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! # JWKS 문서 캐시 유지 시간 (초, 기본값: 3600)
//! export JWKS_CACHE_TTL_SECS="3600"
//!
//! # 토큰 만료 검증 허용 오차 (초, 기본값: 60)
//! export AUTH0_TOKEN_LEEWAY_SECS="60"
//! ```

use std::env;

use crate::config::environment::get_environment;

/// Auth0 토큰 검증 설정
///
/// Auth0 테넌트가 발급한 RS256 JWT 를 검증하기 위한 파라미터를 제공합니다.
/// 모든 값은 클라이언트 환경 설정에서 유도되므로, 클라이언트와 서버가
/// 항상 같은 테넌트/audience 를 바라보는 것이 보장됩니다.
pub struct Auth0ApiConfig;

impl Auth0ApiConfig {
    /// 테넌트 JWKS 문서의 URL 을 반환합니다.
    ///
    /// 테넌트 도메인 끝의 슬래시 유무와 무관하게 올바른 URL 을 구성합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let url = Auth0ApiConfig::jwks_url();
    /// // "https://gharibo.us.auth0.com/.well-known/jwks.json"
    /// ```
    pub fn jwks_url() -> String {
        format!("{}.well-known/jwks.json", Self::issuer())
    }

    /// 토큰의 `iss` 클레임과 비교할 issuer 를 반환합니다.
    ///
    /// Auth0 는 issuer 를 항상 슬래시로 끝나는 형태로 발급하므로
    /// 테넌트 도메인을 그 형태로 정규화합니다.
    pub fn issuer() -> String {
        let domain = &get_environment().auth0.url;
        if domain.ends_with('/') {
            domain.clone()
        } else {
            format!("{}/", domain)
        }
    }

    /// 토큰의 `aud` 클레임과 비교할 audience 를 반환합니다.
    pub fn audience() -> String {
        get_environment().auth0.audience.clone()
    }

    /// JWKS 문서의 캐시 유지 시간(초)을 반환합니다.
    ///
    /// 키 순환(key rotation)을 반영하기 위해 캐시는 주기적으로 만료됩니다.
    /// 기본값: 3600초 (1시간)
    pub fn jwks_cache_ttl_secs() -> usize {
        env::var("JWKS_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600)
    }

    /// 토큰 시각 클레임(exp/nbf) 검증의 허용 오차(초)를 반환합니다.
    ///
    /// 서버 간 시계 오차를 흡수하기 위한 값입니다. 기본값: 60초
    pub fn token_leeway_secs() -> u64 {
        env::var("AUTH0_TOKEN_LEEWAY_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwks_url_is_derived_from_tenant_domain() {
        let url = Auth0ApiConfig::jwks_url();

        assert!(url.starts_with("https://"));
        assert!(url.ends_with("/.well-known/jwks.json"));
    }

    #[test]
    fn test_issuer_ends_with_slash() {
        assert!(Auth0ApiConfig::issuer().ends_with('/'));
    }

    #[test]
    fn test_audience_is_not_empty() {
        assert!(!Auth0ApiConfig::audience().is_empty());
    }

    #[test]
    fn test_default_cache_and_leeway_values() {
        if std::env::var("JWKS_CACHE_TTL_SECS").is_err() {
            assert_eq!(Auth0ApiConfig::jwks_cache_ttl_secs(), 3600);
        }
        if std::env::var("AUTH0_TOKEN_LEEWAY_SECS").is_err() {
            assert_eq!(Auth0ApiConfig::token_leeway_secs(), 60);
        }
    }
}
