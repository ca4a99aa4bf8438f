//! 예약 도메인 엔티티
//!
//! 모든 필드는 생성 시점에 정해지며 이후 변경할 수 없습니다.
//! 엔티티마다 두 가지 생성 경로가 있습니다.
//!
//! - `new(...)`: 아직 저장되지 않은 후보 (식별자 없음)
//! - `with_id(id, ...)`: 저장소에서 다시 읽어온 레코드 (식별자 있음)
//!
//! 동등성은 저장소가 부여한 식별자로만 판단합니다. 식별자가 없는 두
//! 엔티티는 필드가 같더라도 "같은 레코드"로 취급하지 않습니다.

pub mod theme;
pub mod reservation_time;
pub mod member;
pub mod reservation;

pub use theme::Theme;
pub use reservation_time::ReservationTime;
pub use member::Member;
pub use reservation::Reservation;

/// 저장소가 부여한 식별자
pub type EntityId = i64;

/// 식별자가 있고 서로 같을 때만 같은 레코드로 봅니다.
pub(crate) fn same_identity(left: Option<EntityId>, right: Option<EntityId>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l == r)
}
