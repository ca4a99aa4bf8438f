//! # 날짜/시각 직렬화 유틸리티
//!
//! API와 MongoDB 문서에서 사용하는 고정 문자열 형식을 정의합니다.
//!
//! - 날짜: `YYYY-MM-DD` (사전순 정렬 = 시간순 정렬)
//! - 시각: `HH:MM` (분 단위까지만 다룸, 요청의 `HH:MM:SS`는 초가 0일 때만 허용)
//!
//! `serde(with = "...")` 속성으로 DTO 필드에 붙여 사용합니다.
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! struct TimeResponse {
//!     #[serde(with = "crate::utils::time_format::hh_mm")]
//!     start_at: NaiveTime,
//! }
//! ```

use chrono::{NaiveDate, NaiveTime, Timelike};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// `HH:MM`과 `HH:MM:SS`를 모두 받습니다. 초 단위 검사는 호출하는 쪽의 몫입니다.
pub fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
}

pub fn is_whole_minute(time: NaiveTime) -> bool {
    time.second() == 0 && time.nanosecond() == 0
}

pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let time = super::parse_time(&raw).map_err(serde::de::Error::custom)?;

        if !super::is_whole_minute(time) {
            return Err(serde::de::Error::custom(format!(
                "{}은 유효하지 않은 시각입니다. 분 단위(HH:MM)로 입력해주세요.",
                raw
            )));
        }
        Ok(time)
    }
}
