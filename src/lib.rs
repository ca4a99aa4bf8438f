//! 방탈출 예약 서비스 백엔드
//!
//! 날짜, 시간, 테마 단위로 방탈출 예약을 받는 REST 서비스입니다.
//! 같은 슬롯의 이중 예약을 저장소의 유일성 제약으로 막고,
//! 직전 7일 예약 수로 주간 인기 테마를 계산합니다.
//!
//! # Features
//!
//! - **예약 가능 시간**: 날짜와 테마별로 시간 카탈로그 전체의 예약 여부 계산
//! - **이중 예약 방지**: 유니크 인덱스 위반을 409 Conflict로 번역
//! - **주간 인기 테마**: 예약 수 내림차순, 동률이면 테마 식별자 오름차순
//! - **검증된 값 객체**: 사용자 이름, 이메일, 비밀번호, 필수 문자열
//! - **MongoDB**: 예약 데이터 영구 저장
//! - **Redis**: 주간 인기 테마 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가용성 계산, 예약 충돌 방지, 인기 테마 랭킹
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repository     │ ← 저장소 포트 (trait)
//! │  Ports          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 어댑터
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use roomescape_backend::core::registry::ServiceLocator;
//! use roomescape_backend::services::themes::ThemeService;
//!
//! let service = ServiceLocator::get::<ThemeService>()?;
//! let hot = service.find_weekly_hot_themes().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
