//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버, 요청 제한, 랭킹, 캐시, 보안 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 환경 변수를 파싱하고, 없거나 파싱에 실패하면 기본값을 돌려줍니다.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} 파싱 실패: {:?}. 기본값 사용", key, raw);
            default
        }),
        Err(_) => default,
    }
}

pub struct PasswordConfig;

impl PasswordConfig {
    pub fn bcrypt_cost() -> u32 {
        let cost = env_or("BCRYPT_COST", 0u32);
        if (4..=15).contains(&cost) {
            return cost;
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        env_or("SERVER_WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

pub struct RankingConfig;

impl RankingConfig {
    pub const DEFAULT_HOT_THEME_LIMIT: usize = 10;

    /// 주간 인기 테마 최대 개수 (`HOT_THEME_LIMIT`, 0이면 기본값)
    pub fn hot_theme_limit() -> usize {
        match env_or("HOT_THEME_LIMIT", Self::DEFAULT_HOT_THEME_LIMIT) {
            0 => Self::DEFAULT_HOT_THEME_LIMIT,
            limit => limit,
        }
    }
}

pub struct CacheConfig;

impl CacheConfig {
    pub fn enabled() -> bool {
        env_or("CACHE_ENABLED", true)
    }

    pub fn hot_theme_ttl_seconds() -> u64 {
        env_or("HOT_THEME_CACHE_TTL_SECONDS", 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("STAGE"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_env_or_falls_back_on_missing_key() {
        assert_eq!(env_or("ROOMESCAPE_TEST_SURELY_UNSET_KEY", 42u32), 42);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_ranking_limit_default() {
        if env::var("HOT_THEME_LIMIT").is_err() {
            assert_eq!(RankingConfig::hot_theme_limit(), RankingConfig::DEFAULT_HOT_THEME_LIMIT);
        }
    }
}
