//! 저장소 포트
//!
//! 도메인 서비스가 의존하는 저장소 계약입니다. 구현체는 MongoDB 어댑터이며,
//! 테스트에서는 같은 유일성 규칙을 지키는 인메모리 구현을 사용합니다.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::errors::AppResult;
use crate::domain::entities::{EntityId, Member, Reservation, ReservationTime, Theme};

/// 예약 삽입 결과
///
/// (날짜, 시간, 테마) 유일성 위반은 에러가 아니라 태그된 결과로 돌려줍니다.
/// 인프라 장애만 `Err`로 전달됩니다.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// 저장 완료, 식별자가 부여된 예약
    Inserted(Reservation),
    /// 같은 슬롯의 예약이 이미 존재
    UniquenessViolation,
}

/// 주간 랭킹 집계 결과 한 줄
#[derive(Debug, Clone)]
pub struct ThemeRanking {
    pub theme: Theme,
    pub reservation_count: u64,
}

/// 날짜와 무관한 예약 시각 카탈로그
#[async_trait]
pub trait TimeCatalog: Send + Sync {
    /// 전체 카탈로그를 시작 시각 오름차순으로 반환합니다.
    async fn load_all(&self) -> AppResult<Vec<ReservationTime>>;

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<ReservationTime>>;

    /// # Errors
    ///
    /// - `ConflictError` 같은 시작 시각이 이미 있는 경우
    async fn insert(&self, time: &ReservationTime) -> AppResult<ReservationTime>;

    /// 삭제된 개수(0 또는 1)를 반환합니다.
    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64>;

    /// 삭제한 예약 시간을 같은 식별자로 되돌립니다.
    ///
    /// 삭제 직후 참조하는 예약이 발견됐을 때만 사용합니다.
    async fn restore(&self, time: &ReservationTime) -> AppResult<()>;
}

#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// 전체 예약을 식별자 오름차순으로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;

    async fn find_by_date_and_theme(&self, date: NaiveDate, theme_id: EntityId) -> AppResult<Vec<Reservation>>;

    /// 후보 예약을 원자적으로 한 번 삽입합니다.
    ///
    /// (date, time_id, theme_id) 유일성 제약이 유일한 직렬화 지점이며,
    /// 위반 시 `InsertOutcome::UniquenessViolation`을 반환합니다.
    async fn insert(&self, candidate: &Reservation) -> AppResult<InsertOutcome>;

    /// 삭제된 개수(0 또는 1)를 반환합니다.
    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64>;

    async fn exists_by_time_id(&self, time_id: EntityId) -> AppResult<bool>;

    async fn exists_by_theme_id(&self, theme_id: EntityId) -> AppResult<bool>;
}

#[async_trait]
pub trait ThemeStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Theme>>;

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Theme>>;

    async fn insert(&self, theme: &Theme) -> AppResult<Theme>;

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64>;

    /// 삭제한 테마를 같은 식별자로 되돌립니다.
    async fn restore(&self, theme: &Theme) -> AppResult<()>;

    /// `[window_start, window_end]` 구간(양 끝 포함) 예약 수 상위 `limit`개 테마
    ///
    /// 예약 수 내림차순, 같으면 테마 식별자 오름차순. 예약이 없는 테마는 제외됩니다.
    async fn top_reserved_in_window(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        limit: usize,
    ) -> AppResult<Vec<ThemeRanking>>;
}

#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Member>>;

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Member>>;

    /// # Errors
    ///
    /// - `ConflictError` 같은 이메일의 회원이 이미 있는 경우
    async fn insert(&self, member: &Member) -> AppResult<Member>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ports_are_object_safe() {
        fn _times(_: &dyn TimeCatalog) {}
        fn _reservations(_: &dyn ReservationStore) {}
        fn _themes(_: &dyn ThemeStore) {}
        fn _members(_: &dyn MemberStore) {}
    }
}
