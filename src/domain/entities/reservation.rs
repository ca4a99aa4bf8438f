//! 예약 엔티티
//!
//! 정확히 하나의 날짜 + 시간 + 테마 + 회원의 조합입니다.
//! 예약 흐름을 통해서만 만들어지고, 식별자로 삭제될 뿐 수정되지 않습니다.

use chrono::NaiveDate;

use crate::domain::entities::{same_identity, EntityId, Member, ReservationTime, Theme};
use crate::domain::errors::{BookingConflict, ValidationError};

#[derive(Debug, Clone)]
pub struct Reservation {
    id: Option<EntityId>,
    date: NaiveDate,
    time: ReservationTime,
    theme: Theme,
    member: Member,
}

/// 한 예약이 점유하는 슬롯 (날짜, 시간 식별자, 테마 식별자)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub time_id: EntityId,
    pub theme_id: EntityId,
}

impl Reservation {
    /// 저장 전 예약 후보를 만듭니다.
    ///
    /// 참조하는 시간, 테마, 회원은 이미 저장되어 식별자가 있어야 합니다.
    pub fn new(date: NaiveDate, time: ReservationTime, theme: Theme, member: Member) -> Result<Self, ValidationError> {
        if time.id().is_none() {
            return Err(ValidationError::new("timeId", "저장되지 않은 예약 시간입니다."));
        }
        if theme.id().is_none() {
            return Err(ValidationError::new("themeId", "저장되지 않은 테마입니다."));
        }
        if member.id().is_none() {
            return Err(ValidationError::new("memberId", "저장되지 않은 회원입니다."));
        }

        Ok(Self { id: None, date, time, theme, member })
    }

    pub fn with_id(id: EntityId, date: NaiveDate, time: ReservationTime, theme: Theme, member: Member) -> Self {
        Self { id: Some(id), date, time, theme, member }
    }

    pub fn assigned(self, id: EntityId) -> Self {
        Self { id: Some(id), ..self }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> &ReservationTime {
        &self.time
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn member(&self) -> &Member {
        &self.member
    }

    /// 유일성 제약의 대상이 되는 슬롯
    ///
    /// 참조 엔티티의 식별자가 없으면 `None` (`with_id`로 잘못 복원된 경우).
    pub fn slot(&self) -> Option<SlotKey> {
        Some(SlotKey {
            date: self.date,
            time_id: self.time.id()?,
            theme_id: self.theme.id()?,
        })
    }

    /// 이 예약의 슬롯이 이미 점유되었을 때 돌려줄 충돌 정보
    pub fn conflict(&self) -> BookingConflict {
        BookingConflict {
            date: self.date,
            start_at: self.time.start_at(),
        }
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self.id, other.id)
    }
}
