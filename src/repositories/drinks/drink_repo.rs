//! # 음료 리포지토리 구현
//!
//! 음료 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **데이터 무결성**: `title` 유니크 인덱스 관리

use std::sync::Arc;

use mongodb::{
    bson::{doc, oid::ObjectId, to_bson},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::drinks::drink::Drink,
    errors::errors::AppError,
};

/// 전체 음료 목록 캐시 키
const ALL_DRINKS_CACHE_KEY: &str = "drink:all";

/// 캐시 TTL (10분)
const CACHE_TTL_SECS: usize = 600;

/// 음료 데이터 액세스 리포지토리
///
/// 음료 엔티티의 CRUD 연산을 담당하며,
/// MongoDB 컬렉션과 Redis 캐시를 통합하여 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// - **전체 목록**: `drink:all`, TTL 10분
/// - **쓰기 후 무효화**: 생성/수정/삭제 시 목록 캐시 제거
///
/// ## 데이터 무결성
///
/// `title` 필드에 유니크 인덱스를 유지하며,
/// 중복 제목으로 생성/수정 시 `ConflictError`를 반환합니다.
#[repository(name = "drink", collection = "drinks")]
pub struct DrinkRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl DrinkRepository {
    /// 전체 음료 목록 조회
    ///
    /// 캐시 우선으로 조회하고, 캐시 미스 시 MongoDB에서 읽어 캐시에 저장합니다.
    pub async fn find_all(&self) -> Result<Vec<Drink>, AppError> {
        if let Ok(Some(cached)) = self.redis.get::<Vec<Drink>>(ALL_DRINKS_CACHE_KEY).await {
            return Ok(cached);
        }

        let mut cursor = self
            .collection::<Drink>()
            .find(doc! {})
            .sort(doc! { "title": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut drinks = Vec::new();
        while cursor
            .advance()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            let drink = cursor
                .deserialize_current()
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            drinks.push(drink);
        }

        let _ = self
            .redis
            .set_with_expiry(ALL_DRINKS_CACHE_KEY, &drinks, CACHE_TTL_SECS)
            .await;

        Ok(drinks)
    }

    /// 제목으로 음료 조회
    ///
    /// 제목은 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 중복 확인 용도로 사용되므로 캐싱하지 않습니다.
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Drink>, AppError> {
        self.collection::<Drink>()
            .find_one(doc! { "title": title })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 음료 생성
    ///
    /// 제목 중복 여부를 사전에 검증하고, 성공 시 목록 캐시를 무효화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Drink)` - 생성된 음료 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 제목 중복
    pub async fn create(&self, mut drink: Drink) -> Result<Drink, AppError> {
        if self.find_by_title(&drink.title).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 등록된 음료 이름입니다".to_string(),
            ));
        }

        let result = self
            .collection::<Drink>()
            .insert_one(&drink)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        drink.id = result.inserted_id.as_object_id();

        let _ = self.redis.del(ALL_DRINKS_CACHE_KEY).await;
        let _ = self.invalidate_collection_cache(None).await;

        Ok(drink)
    }

    /// 음료 부분 수정
    ///
    /// `$set` 문서에 포함된 필드만 갱신하고 최신 상태를 반환합니다.
    /// 제목이 변경되는 경우 기존 다른 음료와의 중복 여부를 먼저 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Drink))` - 수정된 음료
    /// * `Ok(None)` - 해당 ID의 음료가 존재하지 않음
    /// * `Err(AppError::ConflictError)` - 변경하려는 제목이 이미 사용 중
    pub async fn update(
        &self,
        id: &str,
        update_doc: mongodb::bson::Document,
    ) -> Result<Option<Drink>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        if let Ok(new_title) = update_doc.get_str("title") {
            if let Some(existing) = self.find_by_title(new_title).await? {
                if existing.id != Some(object_id) {
                    return Err(AppError::ConflictError(
                        "이미 등록된 음료 이름입니다".to_string(),
                    ));
                }
            }
        }

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self
            .collection::<Drink>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.redis.del(ALL_DRINKS_CACHE_KEY).await;
        }

        Ok(updated)
    }

    /// 음료 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제 성공
    /// * `Ok(false)` - 해당 ID의 음료가 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self
            .collection::<Drink>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.redis.del(ALL_DRINKS_CACHE_KEY).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 레시피 목록을 BSON 배열로 변환
    ///
    /// PATCH 요청의 `$set` 문서를 구성할 때 사용합니다.
    pub fn recipe_to_bson(
        recipe: &[crate::domain::entities::drinks::drink::RecipeIngredient],
    ) -> Result<mongodb::bson::Bson, AppError> {
        to_bson(recipe).map_err(|e| AppError::InternalError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// `title` 필드에 유니크 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Drink>();

        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("title_unique".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([title_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
