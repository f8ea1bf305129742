//! 음료 수정 요청 DTO
//!
//! 기존 음료의 부분 수정(PATCH)을 위한 요청 데이터 구조를 정의합니다.
//! 제공된 필드만 갱신되고 생략된 필드는 기존 값이 유지됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::create_drink_request::RecipeIngredientRequest;

/// 음료 부분 수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDrinkRequest {
    /// 변경할 음료 이름 (생략 시 유지)
    #[validate(length(min = 1, max = 100, message = "음료 이름은 1-100자 사이여야 합니다"))]
    pub title: Option<String>,

    /// 변경할 재료 구성 (생략 시 유지, 제공 시 전체 교체)
    #[validate(length(min = 1, message = "레시피에는 최소 하나의 재료가 필요합니다"))]
    #[validate(nested)]
    pub recipe: Option<Vec<RecipeIngredientRequest>>,
}

impl UpdateDrinkRequest {
    /// 수정할 내용이 하나라도 포함되어 있는지 확인
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.recipe.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn title_only_update_is_valid() {
        let req = UpdateDrinkRequest {
            title: Some("flat white".to_string()),
            recipe: None,
        };

        assert!(req.validate().is_ok());
        assert!(req.has_changes());
    }

    #[test]
    fn empty_request_has_no_changes() {
        let req = UpdateDrinkRequest {
            title: None,
            recipe: None,
        };

        assert!(req.validate().is_ok());
        assert!(!req.has_changes());
    }

    #[test]
    fn empty_recipe_list_fails_validation() {
        let req = UpdateDrinkRequest {
            title: None,
            recipe: Some(vec![]),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn invalid_ingredient_fails_validation() {
        let req = UpdateDrinkRequest {
            title: None,
            recipe: Some(vec![RecipeIngredientRequest {
                name: String::new(),
                color: "blue".to_string(),
                parts: 1,
            }]),
        };

        assert!(req.validate().is_err());
    }
}
