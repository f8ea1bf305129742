//! Auth0 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Auth0 액세스 토큰을 검증하고
//! RBAC 권한을 확인한 뒤 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::authentication_request::{AuthMode, RequiredPermission};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// Auth0 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 권한 (선택사항)
    required_permission: Option<RequiredPermission>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_permission: None,
        }
    }

    /// 권한 요구사항이 있는 인증 미들웨어 생성
    pub fn new_with_permission(mode: AuthMode, required_permission: RequiredPermission) -> Self {
        Self {
            mode,
            required_permission: Some(required_permission),
        }
    }

    /// 필수 인증 미들웨어 생성 (권한 검사 없음)
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 특정 권한 요구 인증 미들웨어 생성
    pub fn required_with_permission(permission: &str) -> Self {
        Self::new_with_permission(
            AuthMode::Required,
            RequiredPermission::Single(permission.to_string()),
        )
    }

    /// 복수 권한 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_any_permission(permissions: Vec<&str>) -> Self {
        let permission_strings: Vec<String> =
            permissions.into_iter().map(|s| s.to_string()).collect();
        Self::new_with_permission(AuthMode::Required, RequiredPermission::Any(permission_strings))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_permission: self.required_permission.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
    use crate::domain::models::auth::authentication_request::RequiredPermission;

    #[test]
    fn test_required_permission_single() {
        let required = RequiredPermission::Single("post:drinks".to_string());
        let manager = vec!["post:drinks".to_string(), "delete:drinks".to_string()];
        let barista = vec!["get:drinks-detail".to_string()];

        assert!(required.is_satisfied(&manager));
        assert!(!required.is_satisfied(&barista));
    }

    #[test]
    fn test_required_permission_any() {
        let required = RequiredPermission::Any(vec![
            "post:drinks".to_string(),
            "patch:drinks".to_string(),
        ]);
        let manager = vec!["post:drinks".to_string()];
        let editor = vec!["patch:drinks".to_string()];
        let barista = vec!["get:drinks-detail".to_string()];

        assert!(required.is_satisfied(&manager));
        assert!(required.is_satisfied(&editor));
        assert!(!required.is_satisfied(&barista));
    }

    #[test]
    fn test_authenticated_user_has_permission() {
        let user = AuthenticatedUser {
            sub: "auth0|manager".to_string(),
            permissions: vec![
                "get:drinks-detail".to_string(),
                "post:drinks".to_string(),
                "patch:drinks".to_string(),
                "delete:drinks".to_string(),
            ],
        };

        assert!(user.has_permission("delete:drinks"));
        assert!(user.has_permission("post:drinks"));
        assert!(!user.has_permission("post:orders"));
    }

    #[test]
    fn test_authenticated_user_has_any_permission() {
        let user = AuthenticatedUser {
            sub: "auth0|barista".to_string(),
            permissions: vec!["get:drinks-detail".to_string()],
        };

        assert!(user.has_any_permission(&["get:drinks-detail", "post:drinks"]));
        assert!(!user.has_any_permission(&["post:drinks", "delete:drinks"]));
    }
}
