//! 예약 도메인 서비스
//!
//! - [`availability`] - 예약 가능 시간 계산 (순수 함수)
//! - [`booking_guard`] - 이중 예약 방지와 삭제
//! - [`reservation_service`] - HTTP 계층이 사용하는 예약 유스케이스

pub mod availability;
pub mod booking_guard;
pub mod reservation_service;

pub use booking_guard::BookingGuard;
pub use reservation_service::ReservationService;
