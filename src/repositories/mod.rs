//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`ports`]에 정의된 저장소 trait에만 의존하고,
//! 각 trait에는 MongoDB 기반 구현체가 하나씩 있습니다.
//!
//! | 포트 | MongoDB 구현 | 컬렉션 |
//! |------|--------------|--------|
//! | [`TimeCatalog`](ports::TimeCatalog) | [`ReservationTimeRepository`](times::time_repo::ReservationTimeRepository) | `reservation_times` |
//! | [`ThemeStore`](ports::ThemeStore) | [`ThemeRepository`](themes::theme_repo::ThemeRepository) | `themes` |
//! | [`MemberStore`](ports::MemberStore) | [`MemberRepository`](members::member_repo::MemberRepository) | `members` |
//! | [`ReservationStore`](ports::ReservationStore) | [`ReservationRepository`](reservations::reservation_repo::ReservationRepository) | `reservations` |
//!
//! 주간 인기 테마 조회는 Redis 캐시 데코레이터
//! [`CachedThemeStore`](themes::cached_theme_repo::CachedThemeStore)로 감쌀 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let reservations: Arc<dyn ReservationStore> = Arc::new(ReservationRepository::new(&database));
//! let booked = reservations.find_by_date_and_theme(date, theme_id).await?;
//! ```

pub mod ports;
pub mod mongo;
pub mod times;
pub mod themes;
pub mod members;
pub mod reservations;

#[cfg(test)]
pub mod memory;

pub use ports::*;
