//! 예약 시간 카탈로그 서비스

pub mod time_service;

pub use time_service::TimeService;
