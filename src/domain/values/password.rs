//! 비밀번호 값 객체
//!
//! 평문 입력의 형식만 검증합니다. 저장 전 해싱은 회원 서비스가 담당하며,
//! `Debug` 출력에는 원문이 노출되지 않습니다.

use std::fmt;

use crate::domain::errors::ValidationError;
use crate::utils::string_utils::is_blank;

pub const MAX_PASSWORD_LENGTH: usize = 64;

#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if is_blank(&raw) {
            return Err(ValidationError::new("password", "비밀번호가 입력되지 않았습니다."));
        }
        if raw.chars().count() > MAX_PASSWORD_LENGTH {
            return Err(ValidationError::new(
                "password",
                format!("비밀번호는 {}글자 이하로 입력해주세요.", MAX_PASSWORD_LENGTH),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}
