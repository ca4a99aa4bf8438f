//! 주간 인기 테마 캐시 데코레이터
//!
//! 랭킹 집계는 예약 컬렉션 전체를 훑는 비싼 쿼리이고, 집계 구간이 "어제"에서
//! 끝나므로 하루 동안 결과가 거의 변하지 않습니다. 이 데코레이터는
//! `top_reserved_in_window` 결과만 캐시하고 나머지 호출은 그대로 위임합니다.
//!
//! - 무효화: 테마 생성/삭제/복원 시 전체 랭킹 키 삭제. 예약 쪽 무효화는
//!   [`CachedReservationStore`](crate::repositories::reservations::cached_reservation_repo::CachedReservationStore)가 담당
//! - 캐시 오류는 경고 로그만 남기고 원본 저장소 결과를 사용

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::caching::hot_themes::{invalidate_logged, ranking_key, CachedRanking, HotThemeCache};
use crate::core::errors::AppResult;
use crate::domain::entities::{EntityId, Theme};
use crate::repositories::ports::{ThemeRanking, ThemeStore};

pub struct CachedThemeStore {
    inner: Arc<dyn ThemeStore>,
    cache: Arc<dyn HotThemeCache>,
}

impl CachedThemeStore {
    pub fn new(inner: Arc<dyn ThemeStore>, cache: Arc<dyn HotThemeCache>) -> Self {
        Self { inner, cache }
    }

    async fn read_cached(&self, key: &str) -> Option<Vec<ThemeRanking>> {
        let cached = match self.cache.get(key).await {
            Ok(cached) => cached?,
            Err(e) => {
                log::warn!("주간 인기 테마 캐시 조회 실패 ({}): {}", key, e);
                return None;
            }
        };

        match cached.into_iter().map(CachedRanking::into_ranking).collect() {
            Ok(rankings) => Some(rankings),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }
}

#[async_trait]
impl ThemeStore for CachedThemeStore {
    async fn find_all(&self) -> AppResult<Vec<Theme>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Theme>> {
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, theme: &Theme) -> AppResult<Theme> {
        let saved = self.inner.insert(theme).await?;
        invalidate_logged(self.cache.as_ref(), "테마 생성").await;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        let deleted = self.inner.delete_by_id(id).await?;
        if deleted > 0 {
            invalidate_logged(self.cache.as_ref(), "테마 삭제").await;
        }
        Ok(deleted)
    }

    async fn restore(&self, theme: &Theme) -> AppResult<()> {
        self.inner.restore(theme).await?;
        invalidate_logged(self.cache.as_ref(), "테마 복원").await;
        Ok(())
    }

    async fn top_reserved_in_window(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        limit: usize,
    ) -> AppResult<Vec<ThemeRanking>> {
        let key = ranking_key(window_start, window_end, limit);

        if let Some(rankings) = self.read_cached(&key).await {
            log::debug!("주간 인기 테마 캐시 적중: {}", key);
            return Ok(rankings);
        }

        let rankings = self.inner.top_reserved_in_window(window_start, window_end, limit).await?;

        let cached: Vec<CachedRanking> = rankings.iter().map(CachedRanking::from_ranking).collect();
        if let Err(e) = self.cache.put(&key, &cached).await {
            log::warn!("주간 인기 테마 캐시 저장 실패 ({}): {}", key, e);
        }

        Ok(rankings)
    }
}
