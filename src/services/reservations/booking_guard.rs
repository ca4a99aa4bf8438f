//! 이중 예약 방지
//!
//! 같은 (날짜, 시간, 테마) 슬롯에 두 예약이 존재하지 않도록 하는 유일한
//! 지점입니다. 사전 조회 후 삽입하는 방식에 기대지 않고, 저장소의 유일성
//! 제약이 돌려준 [`InsertOutcome::UniquenessViolation`]을 도메인 충돌
//! 에러로 번역하기만 합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{EntityId, Reservation};
use crate::repositories::ports::{InsertOutcome, ReservationStore};

pub struct BookingGuard {
    reservations: Arc<dyn ReservationStore>,
}

impl BookingGuard {
    pub fn new(reservations: Arc<dyn ReservationStore>) -> Self {
        Self { reservations }
    }

    /// 후보 예약을 한 번의 원자적 삽입으로 저장합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Reservation)` - 식별자가 부여된 예약
    /// * `Err(AppError::ConflictError)` - 슬롯이 이미 점유됨, 메시지에 날짜와 시각 포함
    /// * `Err(AppError::DatabaseError)` - 저장소 장애
    pub async fn book(&self, candidate: Reservation) -> AppResult<Reservation> {
        match self.reservations.insert(&candidate).await? {
            InsertOutcome::Inserted(reservation) => {
                log::info!(
                    "예약 완료: id={:?}, date={}, time={:?}, theme={:?}",
                    reservation.id(),
                    reservation.date(),
                    reservation.time().id(),
                    reservation.theme().id(),
                );
                Ok(reservation)
            }
            InsertOutcome::UniquenessViolation => {
                let conflict = candidate.conflict();
                log::warn!("예약 충돌: {}", conflict);
                Err(conflict.into())
            }
        }
    }

    /// 식별자로 예약을 삭제합니다. 없는 식별자는 `NotFound`입니다.
    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        if self.reservations.delete_by_id(id).await? == 0 {
            return Err(AppError::NotFound(format!("{}번 예약이 존재하지 않습니다.", id)));
        }

        log::info!("예약 삭제: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures_util::future::join_all;

    use crate::repositories::memory::InMemoryStore;

    async fn candidate(store: &InMemoryStore) -> Reservation {
        let time = store.seed_time(10, 0).await;
        let theme = store.seed_theme("레벨2 탈출").await;
        let member = store.seed_member("브라운", "brown@example.com").await;

        Reservation::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), time, theme, member).unwrap()
    }

    #[actix_web::test]
    async fn test_book_assigns_identity() {
        let store = Arc::new(InMemoryStore::new());
        let guard = BookingGuard::new(store.clone());

        let booked = guard.book(candidate(&store).await).await.unwrap();

        assert!(booked.id().is_some());
        assert_eq!(store.reservation_count(), 1);
    }

    #[actix_web::test]
    async fn test_second_booking_of_same_slot_conflicts() {
        let store = Arc::new(InMemoryStore::new());
        let guard = BookingGuard::new(store.clone());
        let candidate = candidate(&store).await;

        guard.book(candidate.clone()).await.unwrap();
        let result = guard.book(candidate).await;

        match result {
            Err(AppError::ConflictError(message)) => {
                assert_eq!(message, "2024-05-01 10:00은 이미 예약된 시간입니다.");
            }
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(store.reservation_count(), 1);
    }

    #[actix_web::test]
    async fn test_concurrent_bookings_persist_exactly_one() {
        let store = Arc::new(InMemoryStore::new());
        let guard = BookingGuard::new(store.clone());
        let candidate = candidate(&store).await;

        let results = join_all((0..8).map(|_| guard.book(candidate.clone()))).await;

        let succeeded = results.iter().filter(|result| result.is_ok()).count();
        let conflicted = results
            .iter()
            .filter(|result| matches!(result, Err(AppError::ConflictError(_))))
            .count();
        assert_eq!(succeeded, 1);
        assert_eq!(conflicted, 7);
        assert_eq!(store.reservation_count(), 1);
    }

    #[actix_web::test]
    async fn test_delete_unknown_identity_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let guard = BookingGuard::new(store);

        assert!(matches!(guard.delete(42).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_succeeds_exactly_once() {
        let store = Arc::new(InMemoryStore::new());
        let guard = BookingGuard::new(store.clone());
        let booked = guard.book(candidate(&store).await).await.unwrap();
        let id = booked.id().unwrap();

        guard.delete(id).await.unwrap();

        assert!(matches!(guard.delete(id).await, Err(AppError::NotFound(_))));
        assert_eq!(store.reservation_count(), 0);
    }
}
