//! 테마 리포지토리
//!
//! - [`theme_repo`] - MongoDB 어댑터 (주간 랭킹 집계 포함)
//! - [`cached_theme_repo`] - 주간 랭킹을 Redis에 캐시하는 데코레이터

pub mod theme_repo;
pub mod cached_theme_repo;
