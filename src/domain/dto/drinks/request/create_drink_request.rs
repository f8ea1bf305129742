//! 음료 생성 요청 DTO
//!
//! 새로운 음료 등록을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::drinks::drink::{Drink, RecipeIngredient};

/// 레시피 재료 입력 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipeIngredientRequest {
    /// 재료 이름 (1-50자)
    #[validate(length(min = 1, max = 50, message = "재료 이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    /// 재료 색상 (1-30자, CSS 색상 문자열)
    #[validate(length(min = 1, max = 30, message = "재료 색상은 1-30자 사이여야 합니다"))]
    pub color: String,

    /// 재료 비율 (1 이상)
    #[validate(range(min = 1, message = "재료 비율은 1 이상이어야 합니다"))]
    pub parts: i32,
}

impl From<RecipeIngredientRequest> for RecipeIngredient {
    fn from(req: RecipeIngredientRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            parts: req.parts,
        }
    }
}

/// 새로운 음료 등록을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDrinkRequest {
    /// 음료 이름 (1-100자, 컬렉션 내 unique)
    #[validate(length(min = 1, max = 100, message = "음료 이름은 1-100자 사이여야 합니다"))]
    pub title: String,

    /// 재료 구성 (최소 1개)
    #[validate(length(min = 1, message = "레시피에는 최소 하나의 재료가 필요합니다"))]
    #[validate(nested)]
    pub recipe: Vec<RecipeIngredientRequest>,
}

impl From<CreateDrinkRequest> for Drink {
    fn from(req: CreateDrinkRequest) -> Self {
        Drink::new(
            req.title,
            req.recipe.into_iter().map(RecipeIngredient::from).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_request() -> CreateDrinkRequest {
        CreateDrinkRequest {
            title: "matcha latte".to_string(),
            recipe: vec![
                RecipeIngredientRequest {
                    name: "milk".to_string(),
                    color: "grey".to_string(),
                    parts: 3,
                },
                RecipeIngredientRequest {
                    name: "matcha".to_string(),
                    color: "green".to_string(),
                    parts: 1,
                },
            ],
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut req = valid_request();
        req.title = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_recipe_fails_validation() {
        let mut req = valid_request();
        req.recipe.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_parts_fails_validation() {
        let mut req = valid_request();
        req.recipe[0].parts = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn converts_into_entity() {
        let drink = Drink::from(valid_request());

        assert!(drink.id.is_none());
        assert_eq!(drink.title, "matcha latte");
        assert_eq!(drink.recipe.len(), 2);
        assert_eq!(drink.recipe[1].name, "matcha");
        assert_eq!(drink.recipe[1].parts, 1);
    }
}
