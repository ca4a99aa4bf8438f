//! # 문자열 유틸리티
//!
//! 값 객체와 엔티티 생성 시 사용하는 문자열 검증 함수들입니다.
//! 검증에 통과한 값은 다듬지 않고 원본 그대로 보존합니다.

use crate::domain::errors::ValidationError;

/// 공백 문자만 있거나 비어 있는지 확인합니다.
///
/// 유니코드 공백(탭, 개행, 전각 공백 포함)을 모두 공백으로 취급합니다.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// 필수 문자열을 검증합니다.
///
/// # Arguments
///
/// * `value` - 검증할 원본 문자열
/// * `field` - 실패 시 에러에 담을 필드명
/// * `reason` - 실패 시 사용자에게 보여줄 사유
///
/// # Returns
///
/// * `Ok(String)` - 원본 문자열 그대로
/// * `Err(ValidationError)` - 비어 있거나 공백뿐인 경우
///
/// # Examples
///
/// ```rust,ignore
/// let name = require_not_blank("레벨1 탈출", "name", "테마명이 입력되지 않았습니다.")?;
/// ```
pub fn require_not_blank(value: &str, field: &'static str, reason: &str) -> Result<String, ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new(field, reason));
    }
    Ok(value.to_string())
}
