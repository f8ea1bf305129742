//! # Client Environment Configuration
//!
//! 웹/모바일 클라이언트가 사용하는 환경 설정 레코드를 정의하는 모듈입니다.
//! Angular/Ionic 프로젝트의 `environment.ts` 와 동일한 역할을 수행하며,
//! 백엔드 API 주소와 Auth0 테넌트 정보를 하나의 불변 레코드로 제공합니다.
//!
//! ## 설계 원칙
//!
//! 1. **불변성**: 레코드는 프로세스 시작 시 한 번 구성되며 이후 절대 변경되지 않습니다.
//! 2. **결정성**: [`get_environment`]는 순수 함수로, 동일 프로세스 내에서
//!    항상 비트 단위로 동일한 값을 반환합니다.
//! 3. **배포별 주입**: 소스에 하드코딩된 placeholder 값 대신 환경 변수로
//!    배포 환경마다 다른 값을 주입할 수 있습니다. 환경 변수가 없으면
//!    개발용 기본값이 사용됩니다.
//!
//! ## 직렬화 계약
//!
//! 클라이언트와 공유하는 JSON 형태는 다음과 같이 고정되어 있습니다:
//!
//! ```json
//! {
//!   "production": false,
//!   "apiServerUrl": "http://127.0.0.1:5000",
//!   "auth0": {
//!     "url": "https://gharibo.us.auth0.com/",
//!     "audience": "coffee",
//!     "clientId": "VYsTng1AB2ETzdcIpkesrf7fwjLUmDWy",
//!     "callbackURL": "http://localhost:8080"
//!   }
//! }
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export API_SERVER_URL="https://api.yourdomain.com"
//! export AUTH0_DOMAIN="https://your-tenant.us.auth0.com/"
//! export AUTH0_AUDIENCE="coffee"
//! export AUTH0_CLIENT_ID="your-auth0-client-id"
//! export AUTH0_CALLBACK_URL="https://app.yourdomain.com"
//! ```

use std::env;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::data_config::Environment;

/// 개발용 기본값 (개발 테넌트의 literal 값)
const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";
const DEV_AUTH0_DOMAIN: &str = "https://gharibo.us.auth0.com/";
const DEV_AUTH0_AUDIENCE: &str = "coffee";
const DEV_AUTH0_CLIENT_ID: &str = "VYsTng1AB2ETzdcIpkesrf7fwjLUmDWy";
const DEV_AUTH0_CALLBACK_URL: &str = "http://localhost:8080";

/// Auth0 테넌트 설정
///
/// 클라이언트가 OAuth/OIDC 핸드셰이크를 시작하기 위해 필요한
/// Auth0 애플리케이션 정보입니다. 모두 공개 가능한 값이며
/// client secret 은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Auth0Config {
    /// Auth0 테넌트 도메인 (절대 URL, 예: `https://tenant.us.auth0.com/`)
    #[validate(url(message = "auth0.url 은 유효한 절대 URL 이어야 합니다"))]
    pub url: String,

    /// 토큰이 발급될 대상 API 의 audience 식별자
    #[validate(length(min = 1, message = "auth0.audience 는 비어 있을 수 없습니다"))]
    pub audience: String,

    /// Auth0 애플리케이션의 공개 Client ID
    #[serde(rename = "clientId")]
    #[validate(length(min = 1, message = "auth0.clientId 는 비어 있을 수 없습니다"))]
    pub client_id: String,

    /// 인증 완료 후 리디렉션될 클라이언트 URL
    #[serde(rename = "callbackURL")]
    #[validate(url(message = "auth0.callbackURL 은 유효한 절대 URL 이어야 합니다"))]
    pub callback_url: String,
}

/// 클라이언트 환경 설정 레코드
///
/// 빌드/기동 시점에 한 번 구성되는 프로세스 전역 상수입니다.
/// 네트워킹 계층은 `api_server_url` 을 HTTP 호출의 base 로 사용하고,
/// 인증 계층은 `auth0` 필드로 Auth0 핸드셰이크를 초기화합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EnvironmentConfig {
    /// 프로덕션 배포 대상 여부
    pub production: bool,

    /// 백엔드 API 서버의 base URL
    #[serde(rename = "apiServerUrl")]
    #[validate(url(message = "apiServerUrl 은 유효한 절대 URL 이어야 합니다"))]
    pub api_server_url: String,

    /// Auth0 테넌트 설정
    #[validate(nested)]
    pub auth0: Auth0Config,
}

impl EnvironmentConfig {
    /// 개발용 기본값으로 구성된 설정을 반환합니다.
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: DEV_API_SERVER_URL.to_string(),
            auth0: Auth0Config {
                url: DEV_AUTH0_DOMAIN.to_string(),
                audience: DEV_AUTH0_AUDIENCE.to_string(),
                client_id: DEV_AUTH0_CLIENT_ID.to_string(),
                callback_url: DEV_AUTH0_CALLBACK_URL.to_string(),
            },
        }
    }

    /// 환경 변수에서 설정을 구성합니다.
    ///
    /// 각 필드는 대응하는 환경 변수로 재정의할 수 있으며,
    /// 설정되지 않은 필드는 개발용 기본값을 사용합니다.
    /// `production` 플래그는 [`Environment::current`] 프로파일에서 유도됩니다.
    pub fn from_env() -> Self {
        Self {
            production: Environment::current() == Environment::Production,
            api_server_url: env::var("API_SERVER_URL")
                .unwrap_or_else(|_| DEV_API_SERVER_URL.to_string()),
            auth0: Auth0Config {
                url: env::var("AUTH0_DOMAIN")
                    .unwrap_or_else(|_| DEV_AUTH0_DOMAIN.to_string()),
                audience: env::var("AUTH0_AUDIENCE")
                    .unwrap_or_else(|_| DEV_AUTH0_AUDIENCE.to_string()),
                client_id: env::var("AUTH0_CLIENT_ID")
                    .unwrap_or_else(|_| DEV_AUTH0_CLIENT_ID.to_string()),
                callback_url: env::var("AUTH0_CALLBACK_URL")
                    .unwrap_or_else(|_| DEV_AUTH0_CALLBACK_URL.to_string()),
            },
        }
    }

    /// 개발용 placeholder 값이 그대로 남아 있는지 확인합니다.
    ///
    /// 프로덕션 프로파일에서 placeholder 가 감지되면 기동 시점에
    /// 경고 로그를 남기는 용도로 사용됩니다. 런타임 에러는 아닙니다.
    pub fn has_placeholder_values(&self) -> bool {
        self.auth0.client_id == DEV_AUTH0_CLIENT_ID
            || self.auth0.url == DEV_AUTH0_DOMAIN
    }
}

/// 프로세스 전역 환경 설정 인스턴스
///
/// 첫 접근 시 한 번만 구성되며, 잘못 구성된 값(빈 필드, 비정상 URL)은
/// 배포 오류이므로 즉시 패닉으로 조기 실패합니다.
static ENVIRONMENT: Lazy<EnvironmentConfig> = Lazy::new(|| {
    let config = EnvironmentConfig::from_env();

    if let Err(e) = config.validate() {
        panic!("환경 설정이 유효하지 않습니다: {}", e);
    }

    config
});

/// 클라이언트 환경 설정을 반환합니다.
///
/// 순수하고 결정적인 제공자 함수입니다. 같은 프로세스 내에서
/// 반복 호출해도 항상 동일한 참조를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use coffee_shop_backend::config::get_environment;
///
/// let env = get_environment();
/// println!("API server: {}", env.api_server_url);
/// ```
pub fn get_environment() -> &'static EnvironmentConfig {
    &ENVIRONMENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_literals() {
        let config = EnvironmentConfig::development();

        assert!(!config.production);
        assert_eq!(config.api_server_url, "http://127.0.0.1:5000");
        assert_eq!(config.auth0.url, "https://gharibo.us.auth0.com/");
        assert_eq!(config.auth0.audience, "coffee");
        assert_eq!(config.auth0.client_id, "VYsTng1AB2ETzdcIpkesrf7fwjLUmDWy");
        assert_eq!(config.auth0.callback_url, "http://localhost:8080");
    }

    #[test]
    fn test_development_config_is_valid() {
        let config = EnvironmentConfig::development();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialized_shape_matches_client_contract() {
        let config = EnvironmentConfig::development();
        let json = serde_json::to_value(&config).unwrap();

        // 최상위 필드명
        assert!(json.get("production").unwrap().is_boolean());
        assert!(json.get("apiServerUrl").unwrap().is_string());

        // 중첩 auth0 필드명
        let auth0 = json.get("auth0").unwrap();
        assert!(auth0.get("url").unwrap().is_string());
        assert!(auth0.get("audience").unwrap().is_string());
        assert!(auth0.get("clientId").unwrap().is_string());
        assert!(auth0.get("callbackURL").unwrap().is_string());

        // snake_case 필드명이 노출되지 않아야 함
        assert!(json.get("api_server_url").is_none());
        assert!(auth0.get("client_id").is_none());
        assert!(auth0.get("callback_url").is_none());
    }

    #[test]
    fn test_serde_roundtrip_preserves_values() {
        let config = EnvironmentConfig::development();
        let json = serde_json::to_string(&config).unwrap();
        let restored: EnvironmentConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn test_get_environment_is_idempotent() {
        let first = get_environment();
        let second = get_environment();

        // 동일 참조, 동일 값
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let mut config = EnvironmentConfig::development();
        config.api_server_url = "not-a-url".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_identifier_fails_validation() {
        let mut config = EnvironmentConfig::development();
        config.auth0.audience = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_placeholder_detection() {
        let dev = EnvironmentConfig::development();
        assert!(dev.has_placeholder_values());

        let mut custom = dev.clone();
        custom.auth0.client_id = "real-client-id".to_string();
        custom.auth0.url = "https://real-tenant.us.auth0.com/".to_string();
        assert!(!custom.has_placeholder_values());
    }
}
