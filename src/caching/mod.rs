//! 캐싱 계층 모듈
//!
//! Redis를 사용한 조회 결과 캐싱을 제공합니다. 캐시는 저장소 어댑터를
//! 감싸는 형태로만 사용되며, 도메인 로직은 캐시의 존재를 알지 못합니다.
//! 캐시 오류는 로그만 남기고 원본 저장소로 폴백합니다.
//!
//! - [`redis`] - JSON 값을 저장하는 Redis 클라이언트
//! - [`hot_themes`] - 주간 인기 테마 랭킹 캐시 포트와 Redis 구현

pub mod redis;
pub mod hot_themes;
