//! 테마 서비스
//!
//! - [`popularity`] - 주간 인기 테마 랭킹
//! - [`theme_service`] - 테마 목록/생성/삭제

pub mod popularity;
pub mod theme_service;

pub use popularity::PopularityRanker;
pub use theme_service::ThemeService;
