//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 프로파일과 HTTP 서버 바인딩 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인합니다.
    /// 아무것도 설정되지 않은 경우 `Development`가 기본값입니다.
    /// 프로파일 없이 기동하면 개발용 기본 설정(`production: false`)으로
    /// 동작하며, 운영 배포는 `ENVIRONMENT=production`을 명시해야 합니다.
    /// 알 수 없는 값이 명시된 경우에는 `Production`으로 처리합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Production {
    ///     // placeholder 설정값 경고 등 프로덕션 전용 점검
    /// }
    /// ```
    pub fn current() -> Self {
        match env::var("ENVIRONMENT").or_else(|_| env::var("NODE_ENV")) {
            Ok(value) => Self::from_str(&value),
            Err(_) => Environment::Development,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// 클라이언트 환경 설정의 `apiServerUrl` 기본값과 일치하도록
    /// 기본 포트는 5000 입니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_case_insensitive() {
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("Staging"), Environment::Staging);
    }

    #[test]
    fn test_environment_defaults_to_development() {
        // 프로파일 변수가 없으면 개발 환경으로 동작해야
        // 기본 설정 문서의 production: false 와 일치한다
        if env::var("ENVIRONMENT").is_err() && env::var("NODE_ENV").is_err() {
            assert_eq!(Environment::current(), Environment::Development);
        }
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 5000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
