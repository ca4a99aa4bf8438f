//! 테마 엔티티

use crate::domain::entities::{same_identity, EntityId};
use crate::domain::errors::ValidationError;
use crate::utils::string_utils::require_not_blank;

/// 방탈출 테마
///
/// 이름, 설명, 썸네일 URL은 모두 필수이며 생성 시점에 검증됩니다.
#[derive(Debug, Clone)]
pub struct Theme {
    id: Option<EntityId>,
    name: String,
    description: String,
    thumbnail: String,
}

impl Theme {
    pub fn new(name: &str, description: &str, thumbnail: &str) -> Result<Self, ValidationError> {
        Self::build(None, name, description, thumbnail)
    }

    pub fn with_id(id: EntityId, name: &str, description: &str, thumbnail: &str) -> Result<Self, ValidationError> {
        Self::build(Some(id), name, description, thumbnail)
    }

    fn build(id: Option<EntityId>, name: &str, description: &str, thumbnail: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: require_not_blank(name, "name", "테마명이 입력되지 않았습니다.")?,
            description: require_not_blank(description, "description", "테마 설명이 입력되지 않았습니다.")?,
            thumbnail: require_not_blank(thumbnail, "thumbnail", "테마 이미지가 입력되지 않았습니다.")?,
        })
    }

    /// 저장소가 식별자를 부여한 사본을 만듭니다.
    pub fn assigned(self, id: EntityId) -> Self {
        Self { id: Some(id), ..self }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self.id, other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_theme_has_no_identity() {
        let theme = Theme::new("레벨2 탈출", "우테코 레벨2를 탈출하는 내용입니다.", "https://example.com/t.png").unwrap();

        assert_eq!(theme.id(), None);
        assert_eq!(theme.name(), "레벨2 탈출");
        assert_eq!(theme.thumbnail(), "https://example.com/t.png");
    }

    #[test]
    fn test_blank_fields_are_rejected_with_field_name() {
        assert_eq!(Theme::new(" ", "desc", "thumb").unwrap_err().field, "name");
        assert_eq!(Theme::new("name", "", "thumb").unwrap_err().field, "description");
        assert_eq!(Theme::new("name", "desc", "\n").unwrap_err().field, "thumbnail");
    }

    #[test]
    fn test_equality_is_by_identity() {
        let a = Theme::with_id(1, "a", "a", "a").unwrap();
        let renamed = Theme::with_id(1, "b", "b", "b").unwrap();
        let other = Theme::with_id(2, "a", "a", "a").unwrap();
        let unsaved = Theme::new("a", "a", "a").unwrap();

        assert_eq!(a, renamed);
        assert_ne!(a, other);
        assert_ne!(unsaved.clone(), unsaved);
    }
}
