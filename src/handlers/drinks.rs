//! # Drink Menu HTTP Handlers
//!
//! 음료 메뉴와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! RESTful API 설계 원칙을 따르며, 권한 검사는 라우트에 적용된
//! 인증 미들웨어에서 선행됩니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 필요 권한 | 응답 표현 |
//! |--------|------|-----------|-----------|
//! | `GET` | `/drinks` | 없음 (공개) | short |
//! | `GET` | `/drinks-detail` | `get:drinks-detail` | long |
//! | `POST` | `/drinks` | `post:drinks` | long |
//! | `PATCH` | `/drinks/{id}` | `patch:drinks` | long |
//! | `DELETE` | `/drinks/{id}` | `delete:drinks` | 삭제된 ID |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @RestController
//! @RequestMapping("/drinks")
//! public class DrinkController {
//!     @PostMapping
//!     @PreAuthorize("hasAuthority('post:drinks')")
//!     public DrinksResponse createDrink(@Valid @RequestBody CreateDrinkRequest req) {
//!         return drinkService.create(req);
//!     }
//! }
//! ```
//!
//! 이 시스템에서는 `@PreAuthorize` 대신 스코프 단위의
//! `AuthMiddleware::required_with_permission(...)`이 같은 역할을 합니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::domain::dto::drinks::request::{CreateDrinkRequest, UpdateDrinkRequest};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::drinks::DrinkService;

/// 공개 메뉴 조회 (요약 표현)
///
/// 인증 없이 접근할 수 있으며, 재료 이름은 노출하지 않습니다.
#[get("/drinks")]
pub async fn get_drinks() -> Result<HttpResponse, AppError> {
    let service = DrinkService::instance();
    let response = service.list_drinks().await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 상세 메뉴 조회 (재료 이름 포함)
///
/// `get:drinks-detail` 권한이 필요합니다.
#[get("")]
pub async fn get_drinks_detail(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    log::debug!("상세 메뉴 조회: 사용자 {}", user.sub);

    let service = DrinkService::instance();
    let response = service.list_drinks_detail().await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 새 음료 등록
///
/// `post:drinks` 권한이 필요합니다.
/// 생성된 음료를 상세 표현으로 반환합니다.
#[post("")]
pub async fn create_drink(
    user: AuthenticatedUser,
    payload: web::Json<CreateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("음료 등록 요청: 사용자 {}", user.sub);

    let service = DrinkService::instance();
    let response = service.create_drink(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 음료 부분 수정
///
/// `patch:drinks` 권한이 필요합니다.
/// 요청 본문에 포함된 필드만 갱신합니다.
#[patch("/{drink_id}")]
pub async fn update_drink(
    user: AuthenticatedUser,
    drink_id: web::Path<String>,
    payload: web::Json<UpdateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("음료 수정 요청: 사용자 {}, 대상 {}", user.sub, drink_id);

    let service = DrinkService::instance();
    let response = service
        .update_drink(&drink_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 음료 삭제
///
/// `delete:drinks` 권한이 필요합니다.
/// 삭제된 음료의 ID를 반환합니다.
#[delete("/{drink_id}")]
pub async fn delete_drink(
    user: AuthenticatedUser,
    drink_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("음료 삭제 요청: 사용자 {}, 대상 {}", user.sub, drink_id);

    let service = DrinkService::instance();
    let response = service.delete_drink(&drink_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
