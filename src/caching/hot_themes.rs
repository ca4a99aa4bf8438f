//! 주간 인기 테마 랭킹 캐시
//!
//! 테마 데코레이터는 랭킹을 읽고 쓰며, 테마/예약 데코레이터는 쓰기 후에
//! [`HotThemeCache::invalidate_all`]로 캐시를 비웁니다. 랭킹은 예약 수로
//! 정해지므로 예약이 생기거나 사라지면 캐시된 결과는 더 이상 유효하지 않습니다.
//!
//! - 캐시 키: `themes:hot:<start>:<end>:<limit>`
//! - 무효화 패턴: `themes:hot:*`

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::caching::redis::RedisClient;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{EntityId, Theme};
use crate::repositories::ports::ThemeRanking;
use crate::utils::time_format::format_date;

pub const HOT_THEME_KEY_PATTERN: &str = "themes:hot:*";

pub fn ranking_key(window_start: NaiveDate, window_end: NaiveDate, limit: usize) -> String {
    format!("themes:hot:{}:{}:{}", format_date(window_start), format_date(window_end), limit)
}

/// 캐시에 저장되는 랭킹 한 건
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedRanking {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub reservation_count: u64,
}

impl CachedRanking {
    pub fn from_ranking(ranking: &ThemeRanking) -> Self {
        Self {
            id: ranking.theme.id().unwrap_or_default(),
            name: ranking.theme.name().to_string(),
            description: ranking.theme.description().to_string(),
            thumbnail: ranking.theme.thumbnail().to_string(),
            reservation_count: ranking.reservation_count,
        }
    }

    pub fn into_ranking(self) -> AppResult<ThemeRanking> {
        let theme = Theme::with_id(self.id, &self.name, &self.description, &self.thumbnail)
            .map_err(|e| AppError::RedisError(format!("캐시된 테마가 유효하지 않습니다: {}", e)))?;
        Ok(ThemeRanking {
            theme,
            reservation_count: self.reservation_count,
        })
    }
}

#[async_trait]
pub trait HotThemeCache: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<CachedRanking>>>;

    async fn put(&self, key: &str, rankings: &[CachedRanking]) -> AppResult<()>;

    /// 모든 랭킹 키를 지우고 지운 개수를 반환합니다.
    async fn invalidate_all(&self) -> AppResult<usize>;
}

/// 캐시 무효화 실패는 경고만 남깁니다. 남은 키는 TTL이 지나면 사라집니다.
pub async fn invalidate_logged(cache: &dyn HotThemeCache, cause: &str) {
    match cache.invalidate_all().await {
        Ok(count) => log::debug!("{} 후 주간 인기 테마 캐시 {}건 무효화", cause, count),
        Err(e) => log::warn!("{} 후 주간 인기 테마 캐시 무효화 실패: {}", cause, e),
    }
}

pub struct RedisHotThemeCache {
    redis: Arc<RedisClient>,
    ttl_seconds: u64,
}

impl RedisHotThemeCache {
    pub fn new(redis: Arc<RedisClient>, ttl_seconds: u64) -> Self {
        Self { redis, ttl_seconds }
    }
}

fn redis_error(e: redis::RedisError) -> AppError {
    AppError::RedisError(e.to_string())
}

#[async_trait]
impl HotThemeCache for RedisHotThemeCache {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<CachedRanking>>> {
        self.redis.get::<Vec<CachedRanking>>(key).await.map_err(redis_error)
    }

    async fn put(&self, key: &str, rankings: &[CachedRanking]) -> AppResult<()> {
        self.redis
            .set_with_expiry(key, &rankings, self.ttl_seconds)
            .await
            .map_err(redis_error)
    }

    async fn invalidate_all(&self) -> AppResult<usize> {
        self.redis.del_matching(HOT_THEME_KEY_PATTERN).await.map_err(redis_error)
    }
}
