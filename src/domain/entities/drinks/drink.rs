//! Drink Entity Implementation
//!
//! 음료 엔티티의 핵심 구현체입니다.
//! 메뉴에 노출되는 음료 한 잔을 제목과 레시피(재료 구성)로 표현합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 레시피를 구성하는 재료 하나
///
/// 재료 이름, 시각화용 색상, 그리고 전체 음료에서 차지하는 비율(parts)을 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// 재료 이름 (예: "milk", "espresso")
    pub name: String,
    /// 그래프 렌더링용 색상 (CSS 색상 문자열)
    pub color: String,
    /// 음료에서 이 재료가 차지하는 비율
    pub parts: i32,
}

/// 음료 엔티티
///
/// 시스템의 모든 음료 메뉴를 표현하는 핵심 도메인 엔티티입니다.
/// `title`은 컬렉션 내에서 유일해야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 음료 이름 (unique)
    pub title: String,
    /// 재료 구성 목록
    pub recipe: Vec<RecipeIngredient>,
}

impl Drink {
    /// 새 음료 생성
    ///
    /// 아직 영속화되지 않은 상태이므로 `id`는 `None`으로 시작합니다.
    pub fn new(title: String, recipe: Vec<RecipeIngredient>) -> Self {
        Self {
            id: None,
            title,
            recipe,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_recipe() -> Vec<RecipeIngredient> {
        vec![RecipeIngredient {
            name: "water".to_string(),
            color: "blue".to_string(),
            parts: 1,
        }]
    }

    #[test]
    fn new_drink_has_no_id() {
        let drink = Drink::new("water".to_string(), water_recipe());

        assert!(drink.id.is_none());
        assert!(drink.id_string().is_none());
        assert_eq!(drink.title, "water");
        assert_eq!(drink.recipe.len(), 1);
    }

    #[test]
    fn id_string_returns_hex() {
        let oid = ObjectId::new();
        let mut drink = Drink::new("latte".to_string(), water_recipe());
        drink.id = Some(oid);

        assert_eq!(drink.id_string(), Some(oid.to_hex()));
    }

    #[test]
    fn serializes_without_id_field_when_unsaved() {
        let drink = Drink::new("water".to_string(), water_recipe());
        let json = serde_json::to_value(&drink).unwrap();

        assert!(json.get("_id").is_none());
        assert_eq!(json["title"], "water");
        assert_eq!(json["recipe"][0]["name"], "water");
        assert_eq!(json["recipe"][0]["color"], "blue");
        assert_eq!(json["recipe"][0]["parts"], 1);
    }
}
