//! 도메인 계층 에러
//!
//! 값 객체/엔티티 생성 실패와 예약 슬롯 충돌을 표현합니다.
//! 두 타입 모두 `AppError`로 변환되어 HTTP 계층까지 전달됩니다.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::utils::time_format::TIME_FORMAT;

/// 값 객체 생성 실패
///
/// 어떤 필드가 왜 실패했는지 함께 전달합니다. 유효하지 않은 인스턴스는
/// 만들어지지 않으며, 생성자는 이 에러만 반환합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// 이미 점유된 (날짜, 시간, 테마) 슬롯에 대한 예약 시도
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{date} {}은 이미 예약된 시간입니다.", .start_at.format(TIME_FORMAT))]
pub struct BookingConflict {
    pub date: NaiveDate,
    pub start_at: NaiveTime,
}
