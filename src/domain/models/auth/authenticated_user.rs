use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// Auth0 액세스 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 토큰 검증 후 요청 확장(extensions)에 저장하며,
/// 핸들러는 extractor 파라미터로 바로 받을 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Auth0 사용자 식별자 (`sub` 클레임)
    pub sub: String,

    /// RBAC 권한 목록 (`permissions` 클레임)
    pub permissions: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// 여러 권한 중 하나라도 보유하고 있는지 확인
    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|&p| self.has_permission(p))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barista() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "auth0|barista".to_string(),
            permissions: vec![
                "get:drinks-detail".to_string(),
                "post:drinks".to_string(),
            ],
        }
    }

    #[test]
    fn has_permission_matches_exactly() {
        let user = barista();

        assert!(user.has_permission("post:drinks"));
        assert!(!user.has_permission("delete:drinks"));
        assert!(!user.has_permission("post"));
    }

    #[test]
    fn has_any_permission_is_or_semantics() {
        let user = barista();

        assert!(user.has_any_permission(&["delete:drinks", "get:drinks-detail"]));
        assert!(!user.has_any_permission(&["delete:drinks", "patch:drinks"]));
        assert!(!user.has_any_permission(&[]));
    }
}
