use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Member;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberCreateRequest {
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    pub password: String,
}

/// 회원 응답 (식별자와 이름만 노출)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().unwrap_or_default(),
            name: member.name().to_string(),
        }
    }
}
