//! 예약 리포지토리
//!
//! - [`reservation_repo`] - MongoDB 어댑터
//! - [`cached_reservation_repo`] - 예약 쓰기 후 주간 랭킹 캐시를 비우는 데코레이터

pub mod reservation_repo;
pub mod cached_reservation_repo;
