//! 예약 시간 엔티티
//!
//! 날짜와 무관한 "하루 중 시각" 슬롯입니다. 모든 테마와 날짜가
//! 같은 시간 카탈로그를 공유합니다. 시각은 분 단위로 저장되므로 초 이하는
//! 생성 시점에 버립니다.

use chrono::{NaiveTime, Timelike};

use crate::domain::entities::{same_identity, EntityId};

#[derive(Debug, Clone)]
pub struct ReservationTime {
    id: Option<EntityId>,
    start_at: NaiveTime,
}

impl ReservationTime {
    pub fn new(start_at: NaiveTime) -> Self {
        Self { id: None, start_at: to_minute(start_at) }
    }

    pub fn with_id(id: EntityId, start_at: NaiveTime) -> Self {
        Self { id: Some(id), start_at: to_minute(start_at) }
    }

    pub fn assigned(self, id: EntityId) -> Self {
        Self { id: Some(id), ..self }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn start_at(&self) -> NaiveTime {
        self.start_at
    }
}

fn to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

impl PartialEq for ReservationTime {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self.id, other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_are_dropped() {
        let time = ReservationTime::new(NaiveTime::from_hms_milli_opt(10, 30, 45, 500).unwrap());

        assert_eq!(time.start_at(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(ReservationTime::with_id(1, NaiveTime::from_hms_opt(9, 0, 59).unwrap()).start_at().second(), 0);
    }
}
