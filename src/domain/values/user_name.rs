//! 예약자/회원 이름 값 객체

use std::fmt;

use crate::domain::errors::ValidationError;
use crate::utils::string_utils::is_blank;

pub const MAX_USER_NAME_LENGTH: usize = 20;

/// 1~20자의 한글, 영문, 숫자로 이루어진 이름
///
/// 허용 문자: `A-Z`, `a-z`, `0-9`, 완성형 한글(`가`-`힣`), 한글 자음(`ㄱ`-`ㅎ`).
/// 공백이나 특수문자는 허용하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// 검증 순서: 미입력 → 길이 → 허용 문자
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if is_blank(&raw) {
            return Err(ValidationError::new(
                "name",
                "예약자명이 입력되지 않았습니다. 1글자 이상 20글자 이하로 입력해주세요.",
            ));
        }
        if raw.chars().count() > MAX_USER_NAME_LENGTH {
            return Err(ValidationError::new(
                "name",
                format!("{}은 유효하지 않은 예약자명입니다. 20글자 이하로 입력해주세요.", raw),
            ));
        }
        if !raw.chars().all(is_allowed_char) {
            return Err(ValidationError::new(
                "name",
                format!("{}은 유효하지 않은 예약자명입니다. 한글, 영문, 숫자로만 입력해주세요.", raw),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('가'..='힣').contains(&c) || ('ㄱ'..='ㅎ').contains(&c)
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
