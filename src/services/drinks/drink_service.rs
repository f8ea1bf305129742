//! # 음료 관리 서비스 구현
//!
//! 음료 메뉴의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 `@Service` 패턴을 참고하여 설계되었으며,
//! 조회, 등록, 수정, 삭제의 도메인 규칙을 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! Handlers (HTTP 계층)
//!      │
//!      ▼
//! DrinkService (이 모듈)
//!  ├─ 입력 검증 (validator)
//!  ├─ 표현 선택 (short / long)
//!  └─ 응답 봉투 구성
//!      │
//!      ▼
//! DrinkRepository (MongoDB + Redis)
//! ```
//!
//! ## 표현 정책
//!
//! - **short**: 공개 메뉴. 재료 이름을 숨기고 색상/비율만 노출
//! - **long**: `get:drinks-detail` 권한 보유자용 상세 표현

use std::sync::Arc;

use mongodb::bson::doc;
use singleton_macro::service;
use validator::Validate;

use crate::{
    domain::{
        dto::drinks::{
            request::{CreateDrinkRequest, UpdateDrinkRequest},
            response::{
                DeleteDrinkResponse, DrinkLongResponse, DrinkShortResponse, DrinksEnvelope,
            },
        },
        entities::drinks::drink::{Drink, RecipeIngredient},
    },
    errors::errors::AppError,
    repositories::drinks::drink_repo::DrinkRepository,
};

/// 음료 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// DrinkRepository가 자동으로 주입됩니다.
///
/// ```rust,ignore
/// let drink_service = DrinkService::instance(); // 항상 동일한 인스턴스
/// let menu = drink_service.list_drinks().await?;
/// ```
#[service(name = "drink")]
pub struct DrinkService {
    /// 음료 데이터 액세스 리포지토리 (자동 주입)
    drink_repo: Arc<DrinkRepository>,
}

impl DrinkService {
    /// 공개 메뉴 조회 (요약 표현)
    ///
    /// 인증 없이 접근 가능한 목록이므로 재료 이름은 노출하지 않습니다.
    pub async fn list_drinks(&self) -> Result<DrinksEnvelope<DrinkShortResponse>, AppError> {
        let drinks = self.drink_repo.find_all().await?;

        Ok(DrinksEnvelope::new(
            drinks.iter().map(DrinkShortResponse::from).collect(),
        ))
    }

    /// 상세 메뉴 조회 (재료 이름 포함)
    ///
    /// `get:drinks-detail` 권한 검사는 미들웨어에서 선행됩니다.
    pub async fn list_drinks_detail(&self) -> Result<DrinksEnvelope<DrinkLongResponse>, AppError> {
        let drinks = self.drink_repo.find_all().await?;

        Ok(DrinksEnvelope::new(
            drinks.iter().map(DrinkLongResponse::from).collect(),
        ))
    }

    /// 새 음료 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` - 제목 중복
    pub async fn create_drink(
        &self,
        request: CreateDrinkRequest,
    ) -> Result<DrinksEnvelope<DrinkLongResponse>, AppError> {
        request.validate()?;

        let created = self.drink_repo.create(Drink::from(request)).await?;

        Ok(DrinksEnvelope::single(DrinkLongResponse::from(&created)))
    }

    /// 기존 음료 부분 수정
    ///
    /// 요청에 포함된 필드만 갱신합니다. 수정할 내용이 없는 요청은 거부됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패 또는 빈 요청
    /// * `AppError::NotFound` - 해당 ID의 음료 없음
    /// * `AppError::ConflictError` - 변경하려는 제목이 이미 사용 중
    pub async fn update_drink(
        &self,
        drink_id: &str,
        request: UpdateDrinkRequest,
    ) -> Result<DrinksEnvelope<DrinkLongResponse>, AppError> {
        request.validate()?;

        if !request.has_changes() {
            return Err(AppError::ValidationError(
                "수정할 내용이 없습니다".to_string(),
            ));
        }

        let mut update_doc = doc! {};

        if let Some(title) = request.title {
            update_doc.insert("title", title);
        }

        if let Some(recipe_req) = request.recipe {
            let recipe: Vec<RecipeIngredient> =
                recipe_req.into_iter().map(RecipeIngredient::from).collect();
            update_doc.insert("recipe", DrinkRepository::recipe_to_bson(&recipe)?);
        }

        let updated = self
            .drink_repo
            .update(drink_id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("해당 음료를 찾을 수 없습니다".to_string()))?;

        Ok(DrinksEnvelope::single(DrinkLongResponse::from(&updated)))
    }

    /// 음료 삭제
    ///
    /// 삭제된 음료의 ID를 응답으로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 음료 없음
    pub async fn delete_drink(&self, drink_id: &str) -> Result<DeleteDrinkResponse, AppError> {
        let deleted = self.drink_repo.delete(drink_id).await?;

        if !deleted {
            return Err(AppError::NotFound(
                "해당 음료를 찾을 수 없습니다".to_string(),
            ));
        }

        Ok(DeleteDrinkResponse::new(drink_id.to_string()))
    }
}
