//! 예약 쓰기 후 주간 인기 테마 캐시를 비우는 데코레이터
//!
//! 랭킹은 예약 수로 정해지므로 예약이 저장되거나 삭제되면 캐시된 랭킹을
//! 더 이상 믿을 수 없습니다. 유일성 위반이나 0건 삭제처럼 아무것도 바뀌지
//! 않은 호출은 캐시를 건드리지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::caching::hot_themes::{invalidate_logged, HotThemeCache};
use crate::core::errors::AppResult;
use crate::domain::entities::{EntityId, Reservation};
use crate::repositories::ports::{InsertOutcome, ReservationStore};

pub struct CachedReservationStore {
    inner: Arc<dyn ReservationStore>,
    cache: Arc<dyn HotThemeCache>,
}

impl CachedReservationStore {
    pub fn new(inner: Arc<dyn ReservationStore>, cache: Arc<dyn HotThemeCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl ReservationStore for CachedReservationStore {
    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        self.inner.find_all().await
    }

    async fn find_by_date_and_theme(&self, date: NaiveDate, theme_id: EntityId) -> AppResult<Vec<Reservation>> {
        self.inner.find_by_date_and_theme(date, theme_id).await
    }

    async fn insert(&self, candidate: &Reservation) -> AppResult<InsertOutcome> {
        let outcome = self.inner.insert(candidate).await?;
        if let InsertOutcome::Inserted(_) = &outcome {
            invalidate_logged(self.cache.as_ref(), "예약 생성").await;
        }
        Ok(outcome)
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        let deleted = self.inner.delete_by_id(id).await?;
        if deleted > 0 {
            invalidate_logged(self.cache.as_ref(), "예약 삭제").await;
        }
        Ok(deleted)
    }

    async fn exists_by_time_id(&self, time_id: EntityId) -> AppResult<bool> {
        self.inner.exists_by_time_id(time_id).await
    }

    async fn exists_by_theme_id(&self, theme_id: EntityId) -> AppResult<bool> {
        self.inner.exists_by_theme_id(theme_id).await
    }
}
