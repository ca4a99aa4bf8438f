//! 회원 엔티티

use crate::domain::entities::{same_identity, EntityId};
use crate::domain::values::{Email, UserName};

/// 예약을 소유하는 회원
///
/// 비밀번호는 해시 형태로만 보관합니다.
#[derive(Clone)]
pub struct Member {
    id: Option<EntityId>,
    name: UserName,
    email: Email,
    password_hash: String,
}

impl Member {
    pub fn new(name: UserName, email: Email, password_hash: String) -> Self {
        Self { id: None, name, email, password_hash }
    }

    pub fn with_id(id: EntityId, name: UserName, email: Email, password_hash: String) -> Self {
        Self { id: Some(id), name, email, password_hash }
    }

    pub fn assigned(self, id: EntityId) -> Self {
        Self { id: Some(id), ..self }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self.id, other.id)
    }
}
