//! HTTP 요청 핸들러 모듈
//!
//! 각 핸들러는 요청 DTO를 `validator`로 검사한 뒤
//! [`ServiceLocator`](crate::core::registry::ServiceLocator)에서 서비스를 꺼내 호출합니다.
//! 서비스가 돌려준 `AppError`는 `ResponseError` 구현을 통해 그대로 HTTP 응답이 됩니다.
//!
//! # Modules
//!
//! - [`reservations`] - 예약 조회/생성/삭제, 예약 가능 시간
//! - [`themes`] - 테마 관리, 주간 인기 테마
//! - [`times`] - 예약 시간 카탈로그
//! - [`members`] - 회원 가입/목록

pub mod reservations;
pub mod themes;
pub mod times;
pub mod members;
