//! Redis 캐시 클라이언트
//!
//! 값을 JSON 문자열로 직렬화해 저장하는 얇은 래퍼입니다.
//! 주간 인기 테마 캐시([`RedisHotThemeCache`](crate::caching::hot_themes::RedisHotThemeCache))가
//! 사용합니다.
//!
//! # 환경 변수
//!
//! * `REDIS_URL` - Redis 접속 URL (기본값: "redis://localhost:6379")

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 클라이언트를 만들고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, redis::RedisError> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }

    /// 패턴에 맞는 키를 모두 지웁니다.
    pub async fn del_matching(&self, pattern: &str) -> Result<usize, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let keys: Vec<String> = conn.keys(pattern).await?;
        if keys.is_empty() {
            return Ok(0);
        }
        let _: () = conn.del(&keys).await?;
        Ok(keys.len())
    }
}
