//! 환경 변수 기반 설정 모듈
//!
//! 서버, 캐시, 랭킹, 비밀번호 해싱 등 실행 환경별 설정을 제공합니다.
//! 모든 값은 환경 변수에서 읽으며, 없거나 잘못된 값이면 기본값을 사용합니다.
//!
//! ```bash
//! PORT=8080
//! HOT_THEME_LIMIT=10
//! CACHE_ENABLED=true
//! HOT_THEME_CACHE_TTL_SECONDS=600
//! ```

pub mod data_config;

pub use data_config::*;
