//! 예약 가능 시간 계산기
//!
//! 특정 (날짜, 테마)에 대해 시간 카탈로그 전체를 "예약됨/예약 가능"으로
//! 나눕니다. 저장소에 접근하지 않는 순수 함수입니다.

use std::collections::HashSet;

use chrono::NaiveTime;

use crate::domain::entities::{EntityId, Reservation, ReservationTime};

/// 카탈로그의 한 시간과 예약 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableTime {
    pub time_id: EntityId,
    pub start_at: NaiveTime,
    pub already_booked: bool,
}

/// 예약 목록에서 이미 점유된 시간 식별자 집합을 만듭니다.
pub fn booked_time_ids(reservations: &[Reservation]) -> HashSet<EntityId> {
    reservations
        .iter()
        .filter_map(|reservation| reservation.time().id())
        .collect()
}

/// 카탈로그의 각 시간에 예약 여부를 붙여 시작 시각 오름차순으로 반환합니다.
///
/// 식별자 집합 조회로 판정하므로 카탈로그 크기에 선형입니다.
/// 저장되지 않은(식별자 없는) 카탈로그 항목은 건너뜁니다.
pub fn calculate(catalog: &[ReservationTime], booked: &HashSet<EntityId>) -> Vec<AvailableTime> {
    let mut available: Vec<AvailableTime> = catalog
        .iter()
        .filter_map(|time| {
            let time_id = time.id()?;
            Some(AvailableTime {
                time_id,
                start_at: time.start_at(),
                already_booked: booked.contains(&time_id),
            })
        })
        .collect();

    available.sort_by_key(|time| time.start_at);
    available
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(id: EntityId, hour: u32) -> ReservationTime {
        ReservationTime::with_id(id, NaiveTime::from_hms_opt(hour, 0, 0).unwrap())
    }

    #[test]
    fn test_marks_booked_times() {
        let catalog = vec![time(1, 9), time(2, 10), time(3, 11)];
        let booked = HashSet::from([2]);

        let result = calculate(&catalog, &booked);

        let flags: Vec<(EntityId, bool)> = result.iter().map(|t| (t.time_id, t.already_booked)).collect();
        assert_eq!(flags, vec![(1, false), (2, true), (3, false)]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(calculate(&[], &HashSet::from([1, 2])).is_empty());
    }

    #[test]
    fn test_no_reservations_means_all_free() {
        let catalog = vec![time(1, 9), time(2, 10)];

        let result = calculate(&catalog, &HashSet::new());

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|t| !t.already_booked));
    }

    #[test]
    fn test_result_is_ordered_by_start() {
        let catalog = vec![time(3, 14), time(1, 9), time(2, 11)];

        let result = calculate(&catalog, &HashSet::from([1]));

        let starts: Vec<u32> = result.iter().map(|t| chrono::Timelike::hour(&t.start_at)).collect();
        assert_eq!(starts, vec![9, 11, 14]);
        assert!(result[0].already_booked);
    }

    #[test]
    fn test_unsaved_catalog_entry_is_skipped() {
        let catalog = vec![
            time(1, 9),
            ReservationTime::new(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
        ];

        let result = calculate(&catalog, &HashSet::new());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].time_id, 1);
    }
}
