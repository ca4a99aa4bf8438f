use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Theme;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ThemeCreateRequest {
    #[validate(length(max = 255, message = "테마명은 255자 이하여야 합니다"))]
    pub name: String,

    pub description: String,

    #[validate(length(max = 2048, message = "테마 이미지 URL은 2048자 이하여야 합니다"))]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl From<&Theme> for ThemeResponse {
    fn from(theme: &Theme) -> Self {
        Self {
            id: theme.id().unwrap_or_default(),
            name: theme.name().to_string(),
            description: theme.description().to_string(),
            thumbnail: theme.thumbnail().to_string(),
        }
    }
}

/// 테마 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponses {
    pub themes: Vec<ThemeResponse>,
}

impl From<&[Theme]> for ThemeResponses {
    fn from(themes: &[Theme]) -> Self {
        Self {
            themes: themes.iter().map(ThemeResponse::from).collect(),
        }
    }
}
