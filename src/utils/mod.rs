//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증 등 문자열 처리
//! - [`time_format`] - `HH:MM` 시각, `YYYY-MM-DD` 날짜 직렬화
//! - [`display_terminal`] - 부팅 과정 터미널 출력

pub mod string_utils;
pub mod time_format;
pub mod display_terminal;
