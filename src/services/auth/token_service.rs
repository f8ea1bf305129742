//! Auth0 토큰 검증 서비스 구현
//!
//! Auth0 테넌트에서 발급된 RS256 서명 액세스 토큰을 검증합니다.
//! 서명 검증용 공개키는 테넌트의 JWKS 엔드포인트에서 가져오며,
//! 네트워크 왕복을 줄이기 위해 Redis에 캐싱합니다.
//!
//! ## 검증 절차
//!
//! ```text
//! 1. Authorization 헤더에서 Bearer 토큰 추출
//! 2. 토큰 헤더의 kid 확인
//! 3. JWKS 조회 (Redis 캐시 → 캐시 미스 시 Auth0 요청)
//! 4. kid와 일치하는 RSA 공개키로 서명 검증
//! 5. 발급자(iss), 대상(aud), 만료(exp) 검증
//! 6. permissions 클레임으로 RBAC 권한 확인
//! ```

use std::sync::Arc;

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use singleton_macro::service;

use crate::{
    caching::redis::RedisClient,
    config::auth_config::Auth0ApiConfig,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
};

/// JWKS 문서 캐시 키
const JWKS_CACHE_KEY: &str = "auth0:jwks";

/// Auth0 액세스 토큰의 페이로드 클레임
///
/// 검증에 필요한 최소 클레임만 역직렬화합니다.
/// `aud`와 `iss`는 jsonwebtoken의 Validation 설정으로 검증되므로
/// 구조체 필드로 가질 필요가 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auth0Claims {
    /// Auth0 사용자 식별자
    pub sub: String,
    /// RBAC 권한 목록 (권한 미부여 토큰은 클레임 자체가 없음)
    #[serde(default)]
    pub permissions: Vec<String>,
    /// 만료 시각 (Unix timestamp)
    pub exp: usize,
}

/// JWKS 문서의 개별 키 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonWebKey {
    /// 키 타입 (RSA)
    pub kty: String,
    /// 키 식별자
    pub kid: String,
    /// 키 용도 (sig)
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    /// RSA modulus (base64url)
    pub n: String,
    /// RSA exponent (base64url)
    pub e: String,
    /// 서명 알고리즘
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
}

/// Auth0 JWKS 엔드포인트 응답 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonWebKeySet {
    pub keys: Vec<JsonWebKey>,
}

impl JsonWebKeySet {
    /// kid와 일치하는 RSA 서명키 검색
    pub fn find_key(&self, kid: &str) -> Option<&JsonWebKey> {
        self.keys.iter().find(|key| key.kid == kid && key.kty == "RSA")
    }
}

/// Auth0 토큰 검증 서비스
///
/// RS256 서명 검증과 RBAC 권한 확인을 담당합니다.
/// JWKS 공개키 문서는 Redis에 1시간 캐싱되며,
/// 키 회전으로 캐시에 없는 kid가 등장하면 한 번 재조회합니다.
#[service(name = "token")]
pub struct TokenService {
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl TokenService {
    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }

    /// Auth0 액세스 토큰 검증 및 사용자 정보 추출
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticatedUser)` - 검증된 토큰의 사용자 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 서명 불일치, 발급자/대상 불일치
    /// * `AppError::ExternalServiceError` - JWKS 조회 실패
    pub async fn verify_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|_| {
            AppError::AuthenticationError("유효하지 않은 토큰 형식입니다".to_string())
        })?;

        let kid = header.kid.ok_or_else(|| {
            AppError::AuthenticationError("토큰 헤더에 kid가 없습니다".to_string())
        })?;

        let decoding_key = self.resolve_decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[Auth0ApiConfig::audience()]);
        validation.set_issuer(&[Auth0ApiConfig::issuer()]);
        validation.leeway = Auth0ApiConfig::token_leeway_secs();

        let claims = decode::<Auth0Claims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                    AppError::AuthenticationError("토큰 대상(audience)이 일치하지 않습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::AuthenticationError("토큰 발급자가 일치하지 않습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })?;

        Ok(AuthenticatedUser {
            sub: claims.sub,
            permissions: claims.permissions,
        })
    }

    /// 사용자가 요구 권한을 보유했는지 확인
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - 권한 미보유 (403)
    pub fn check_permission(
        &self,
        user: &AuthenticatedUser,
        permission: &str,
    ) -> Result<(), AppError> {
        if user.has_permission(permission) {
            Ok(())
        } else {
            Err(AppError::AuthorizationError(format!(
                "요청에 필요한 권한이 없습니다: {}",
                permission
            )))
        }
    }

    /// kid에 해당하는 RSA 복호화 키 확보
    ///
    /// 캐시된 JWKS에 kid가 없으면 키 회전 가능성이 있으므로
    /// Auth0에서 문서를 새로 받아 한 번 더 시도합니다.
    async fn resolve_decoding_key(&self, kid: &str) -> Result<DecodingKey, AppError> {
        let jwks = self.cached_jwks().await?;

        let key = match jwks.find_key(kid) {
            Some(key) => key.clone(),
            None => {
                let fresh = self.fetch_jwks().await?;
                fresh
                    .find_key(kid)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::AuthenticationError(
                            "토큰 서명키를 찾을 수 없습니다".to_string(),
                        )
                    })?
            }
        };

        DecodingKey::from_rsa_components(&key.n, &key.e).map_err(|e| {
            AppError::InternalError(format!("RSA 공개키 구성 실패: {}", e))
        })
    }

    /// JWKS 문서 조회 (캐시 우선)
    async fn cached_jwks(&self) -> Result<JsonWebKeySet, AppError> {
        if let Ok(Some(cached)) = self.redis.get::<JsonWebKeySet>(JWKS_CACHE_KEY).await {
            return Ok(cached);
        }

        self.fetch_jwks().await
    }

    /// Auth0에서 JWKS 문서를 가져와 캐시에 저장
    async fn fetch_jwks(&self) -> Result<JsonWebKeySet, AppError> {
        let jwks_url = Auth0ApiConfig::jwks_url();

        let response = reqwest::get(&jwks_url).await.map_err(|e| {
            AppError::ExternalServiceError(format!("JWKS 조회 실패: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "JWKS 엔드포인트 응답 오류: {}",
                response.status()
            )));
        }

        let jwks: JsonWebKeySet = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("JWKS 응답 파싱 실패: {}", e))
        })?;

        let _ = self
            .redis
            .set_with_expiry(JWKS_CACHE_KEY, &jwks, Auth0ApiConfig::jwks_cache_ttl_secs())
            .await;

        Ok(jwks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_default_to_empty_permissions() {
        let json = r#"{"sub": "auth0|abc123", "exp": 1893456000}"#;
        let claims: Auth0Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.sub, "auth0|abc123");
        assert!(claims.permissions.is_empty());
    }

    #[test]
    fn claims_deserialize_permissions_list() {
        let json = r#"{
            "sub": "auth0|abc123",
            "permissions": ["get:drinks-detail", "post:drinks"],
            "exp": 1893456000
        }"#;
        let claims: Auth0Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.permissions.len(), 2);
        assert_eq!(claims.permissions[0], "get:drinks-detail");
    }

    #[test]
    fn jwks_finds_rsa_key_by_kid() {
        let json = r#"{
            "keys": [
                {"kty": "RSA", "kid": "key-1", "use": "sig", "n": "abc", "e": "AQAB"},
                {"kty": "RSA", "kid": "key-2", "use": "sig", "n": "def", "e": "AQAB"}
            ]
        }"#;
        let jwks: JsonWebKeySet = serde_json::from_str(json).unwrap();

        assert!(jwks.find_key("key-2").is_some());
        assert_eq!(jwks.find_key("key-2").unwrap().n, "def");
        assert!(jwks.find_key("key-9").is_none());
    }

    #[test]
    fn jwks_ignores_non_rsa_keys() {
        let json = r#"{
            "keys": [
                {"kty": "EC", "kid": "key-1", "n": "abc", "e": "AQAB"}
            ]
        }"#;
        let jwks: JsonWebKeySet = serde_json::from_str(json).unwrap();

        assert!(jwks.find_key("key-1").is_none());
    }
}
