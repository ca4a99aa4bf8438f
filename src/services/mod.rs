//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 포트(`Arc<dyn ...>`)만 주입받아 동작하며,
//! 애플리케이션 시작 시 한 번 생성되어 [`ServiceLocator`](crate::core::registry::ServiceLocator)에 등록됩니다.
//!
//! # Modules
//!
//! - [`reservations`] - 예약 가능 시간 계산, 이중 예약 방지, 예약 유스케이스
//! - [`themes`] - 주간 인기 테마 랭킹, 테마 관리
//! - [`times`] - 예약 시간 카탈로그 관리
//! - [`members`] - 회원 가입
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::reservations::ReservationService;
//!
//! let service = ServiceLocator::get::<ReservationService>()?;
//! let available = service.find_available_times(date, theme_id).await?;
//! ```

pub mod reservations;
pub mod themes;
pub mod times;
pub mod members;
