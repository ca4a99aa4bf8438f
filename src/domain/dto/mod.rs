//! HTTP 요청/응답 DTO
//!
//! 요청 DTO는 `validator`로 형식(식별자 범위, 이메일, 길이)을 먼저 검사하고,
//! 도메인 규칙은 값 객체/엔티티 생성자가 다시 확인합니다.
//! 응답 DTO는 엔티티에서 `From`으로 변환되며 JSON 필드는 camelCase입니다.

pub mod themes;
pub mod times;
pub mod members;
pub mod reservations;

pub use themes::*;
pub use times::*;
pub use members::*;
pub use reservations::*;
