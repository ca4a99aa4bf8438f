//! # 도메인 계층
//!
//! 방탈출 예약 서비스의 도메인 모델을 정의합니다.
//!
//! - [`values`] - `UserName`, `Email`, `Password` 등 검증된 값 객체
//! - [`entities`] - `Theme`, `ReservationTime`, `Member`, `Reservation`
//! - [`errors`] - 값 객체 검증 실패, 예약 슬롯 충돌
//! - [`dto`] - HTTP 요청/응답 데이터 구조

pub mod errors;
pub mod values;
pub mod entities;
pub mod dto;

pub use entities::*;
pub use values::*;
