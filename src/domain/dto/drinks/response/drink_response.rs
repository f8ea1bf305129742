//! 음료 응답 DTO
//!
//! 음료 API의 응답 JSON 계약을 정의합니다.
//! 모든 성공 응답은 `success: true` 필드를 포함하는 봉투(envelope) 형태이며,
//! 음료 표현은 두 단계로 나뉩니다.
//!
//! * **short**: 공개 메뉴용 요약 표현. 재료 이름을 생략하고 색상과 비율만 노출
//! * **long**: 바리스타/매니저용 상세 표현. 재료 이름까지 포함

use serde::{Deserialize, Serialize};

use crate::domain::entities::drinks::drink::{Drink, RecipeIngredient};

/// 요약 표현의 레시피 재료 (이름 비공개)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortRecipeIngredient {
    pub color: String,
    pub parts: i32,
}

impl From<&RecipeIngredient> for ShortRecipeIngredient {
    fn from(ingredient: &RecipeIngredient) -> Self {
        Self {
            color: ingredient.color.clone(),
            parts: ingredient.parts,
        }
    }
}

/// 음료 요약 응답 DTO (공개 메뉴용)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkShortResponse {
    pub id: String,
    pub title: String,
    pub recipe: Vec<ShortRecipeIngredient>,
}

impl From<&Drink> for DrinkShortResponse {
    fn from(drink: &Drink) -> Self {
        Self {
            id: drink.id_string().unwrap_or_default(),
            title: drink.title.clone(),
            recipe: drink.recipe.iter().map(ShortRecipeIngredient::from).collect(),
        }
    }
}

/// 음료 상세 응답 DTO (재료 이름 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkLongResponse {
    pub id: String,
    pub title: String,
    pub recipe: Vec<RecipeIngredient>,
}

impl From<&Drink> for DrinkLongResponse {
    fn from(drink: &Drink) -> Self {
        Self {
            id: drink.id_string().unwrap_or_default(),
            title: drink.title.clone(),
            recipe: drink.recipe.clone(),
        }
    }
}

/// 음료 목록/변경 성공 응답 봉투
///
/// 조회, 생성, 수정 엔드포인트가 공통으로 사용합니다.
/// 단일 음료를 반환하는 경우에도 `drinks` 배열 형태를 유지하며,
/// 단수형 `drink` 키는 사용하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinksEnvelope<T> {
    pub success: bool,
    pub drinks: Vec<T>,
}

impl<T> DrinksEnvelope<T> {
    pub fn new(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }

    /// 단일 음료를 담은 봉투 생성
    pub fn single(drink: T) -> Self {
        Self::new(vec![drink])
    }
}

/// 음료 삭제 성공 응답
///
/// 삭제된 음료의 ID를 `delete` 필드로 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    pub delete: String,
}

impl DeleteDrinkResponse {
    pub fn new(deleted_id: String) -> Self {
        Self {
            success: true,
            delete: deleted_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn sample_drink() -> Drink {
        let mut drink = Drink::new(
            "matcha latte".to_string(),
            vec![
                RecipeIngredient {
                    name: "milk".to_string(),
                    color: "grey".to_string(),
                    parts: 3,
                },
                RecipeIngredient {
                    name: "matcha".to_string(),
                    color: "green".to_string(),
                    parts: 1,
                },
            ],
        );
        drink.id = Some(ObjectId::new());
        drink
    }

    #[test]
    fn short_response_omits_ingredient_names() {
        let drink = sample_drink();
        let short = DrinkShortResponse::from(&drink);
        let json = serde_json::to_value(&short).unwrap();

        assert_eq!(json["title"], "matcha latte");
        assert_eq!(json["recipe"][0]["color"], "grey");
        assert_eq!(json["recipe"][0]["parts"], 3);
        assert!(json["recipe"][0].get("name").is_none());
    }

    #[test]
    fn long_response_keeps_ingredient_names() {
        let drink = sample_drink();
        let long = DrinkLongResponse::from(&drink);
        let json = serde_json::to_value(&long).unwrap();

        assert_eq!(json["recipe"][1]["name"], "matcha");
        assert_eq!(json["recipe"][1]["color"], "green");
        assert_eq!(json["id"], drink.id_string().unwrap());
    }

    #[test]
    fn envelope_marks_success_true() {
        let drink = sample_drink();
        let envelope = DrinksEnvelope::single(DrinkLongResponse::from(&drink));
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["drinks"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn single_mutation_envelope_uses_drinks_array() {
        // 생성/수정 응답도 목록 응답과 동일한 봉투를 사용한다
        let drink = sample_drink();
        let envelope = DrinksEnvelope::single(DrinkLongResponse::from(&drink));
        let json = serde_json::to_value(&envelope).unwrap();

        let drinks = json["drinks"].as_array().unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0]["title"], "matcha latte");
        assert!(json.get("drink").is_none());
    }

    #[test]
    fn delete_response_echoes_id() {
        let response = DeleteDrinkResponse::new("65f0c4d2e1a2b3c4d5e6f708".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["delete"], "65f0c4d2e1a2b3c4d5e6f708");
    }
}
