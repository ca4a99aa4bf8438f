//! 예약 시간 카탈로그 리포지토리

pub mod time_repo;
