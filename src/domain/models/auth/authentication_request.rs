/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 요구되는 권한 정보
#[derive(Debug, Clone)]
pub enum RequiredPermission {
    /// 특정 단일 권한이 필요
    Single(String),
    /// 여러 권한 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<String>),
}

impl RequiredPermission {
    /// 사용자 권한이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, user_permissions: &[String]) -> bool {
        match self {
            RequiredPermission::Single(required) => user_permissions.contains(required),
            RequiredPermission::Any(required_list) => required_list
                .iter()
                .any(|permission| user_permissions.contains(permission)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_permission_requires_exact_match() {
        let required = RequiredPermission::Single("patch:drinks".to_string());

        assert!(required.is_satisfied(&perms(&["patch:drinks", "get:drinks-detail"])));
        assert!(!required.is_satisfied(&perms(&["post:drinks"])));
        assert!(!required.is_satisfied(&[]));
    }

    #[test]
    fn any_permission_accepts_first_match() {
        let required = RequiredPermission::Any(vec![
            "post:drinks".to_string(),
            "patch:drinks".to_string(),
        ]);

        assert!(required.is_satisfied(&perms(&["patch:drinks"])));
        assert!(!required.is_satisfied(&perms(&["delete:drinks"])));
    }
}
