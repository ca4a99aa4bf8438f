//! # Core Framework Module
//!
//! 예약 서비스의 공통 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **도메인 에러 변환**: 검증 실패, 예약 충돌을 `AppError`로 변환
//!
//! ### [`registry`] - 서비스 로케이터
//! - **ServiceLocator**: 부팅 시 등록한 저장소/서비스를 타입으로 조회
//! - **불변 공유**: 모든 인스턴스는 `Arc<T>`로 공유되며 요청 간 가변 상태가 없음

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
