//! # 예약 서비스
//!
//! 예약 조회, 예약 가능 시간 조회, 예약 생성/삭제를 담당합니다.
//!
//! ```text
//! ReservationService
//!   ├─ availability::calculate   (순수 계산)
//!   ├─ BookingGuard              (유일성 위반 → 충돌 에러)
//!   └─ TimeCatalog / ThemeStore / MemberStore / ReservationStore
//! ```
//!
//! 예약 생성 시 참조 대상(시간, 테마, 회원)의 존재만 확인하고, 슬롯 중복
//! 여부는 미리 조회하지 않습니다. 중복 판정은 저장소 삽입 결과로만 합니다.
//!
//! 저장 후에는 시간과 테마가 아직 남아 있는지 다시 확인합니다. 그 사이에
//! 삭제됐다면 방금 저장한 예약을 지우고 `NotFound`를 돌려줍니다. 테마/시간
//! 삭제 쪽의 재확인과 함께, 참조 대상이 없는 예약이 남지 않게 합니다.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{AvailableTimeResponse, ReservationCreateRequest, ReservationResponse};
use crate::domain::entities::{EntityId, Reservation};
use crate::repositories::ports::{MemberStore, ReservationStore, ThemeStore, TimeCatalog};
use crate::services::reservations::availability::{self, AvailableTime};
use crate::services::reservations::booking_guard::BookingGuard;

pub struct ReservationService {
    reservations: Arc<dyn ReservationStore>,
    times: Arc<dyn TimeCatalog>,
    themes: Arc<dyn ThemeStore>,
    members: Arc<dyn MemberStore>,
    guard: BookingGuard,
}

impl ReservationService {
    pub fn new(
        reservations: Arc<dyn ReservationStore>,
        times: Arc<dyn TimeCatalog>,
        themes: Arc<dyn ThemeStore>,
        members: Arc<dyn MemberStore>,
    ) -> Self {
        Self {
            guard: BookingGuard::new(reservations.clone()),
            reservations,
            times,
            themes,
            members,
        }
    }

    /// 전체 예약을 식별자 오름차순으로 조회합니다.
    pub async fn find_all(&self) -> AppResult<Vec<ReservationResponse>> {
        let reservations = self.reservations.find_all().await?;
        Ok(reservations.iter().map(ReservationResponse::from).collect())
    }

    /// 날짜와 테마에 대한 시간 카탈로그 전체의 예약 여부
    ///
    /// # Errors
    ///
    /// * `NotFound` - 테마가 존재하지 않는 경우
    pub async fn find_available_times(&self, date: NaiveDate, theme_id: EntityId) -> AppResult<Vec<AvailableTimeResponse>> {
        let available = self.available_times(date, theme_id).await?;
        Ok(available.iter().map(AvailableTimeResponse::from).collect())
    }

    async fn available_times(&self, date: NaiveDate, theme_id: EntityId) -> AppResult<Vec<AvailableTime>> {
        if self.themes.find_by_id(theme_id).await?.is_none() {
            return Err(AppError::NotFound(format!("{}번 테마가 존재하지 않습니다.", theme_id)));
        }

        let catalog = self.times.load_all().await?;
        let reservations = self.reservations.find_by_date_and_theme(date, theme_id).await?;
        let booked = availability::booked_time_ids(&reservations);

        Ok(availability::calculate(&catalog, &booked))
    }

    /// 예약을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 시간, 테마, 회원 중 하나라도 존재하지 않거나 저장 직후 삭제된 경우
    /// * `ConflictError` - 같은 슬롯이 이미 예약된 경우
    pub async fn create(&self, request: ReservationCreateRequest) -> AppResult<ReservationResponse> {
        let time = self.times
            .find_by_id(request.time_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}번 예약 시간이 존재하지 않습니다.", request.time_id)))?;

        let theme = self.themes
            .find_by_id(request.theme_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}번 테마가 존재하지 않습니다.", request.theme_id)))?;

        let member = self.members
            .find_by_id(request.member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}번 회원이 존재하지 않습니다.", request.member_id)))?;

        let candidate = Reservation::new(request.date, time, theme, member)?;
        let reservation = self.guard.book(candidate).await?;
        self.cancel_if_orphaned(&reservation).await?;

        Ok(ReservationResponse::from(&reservation))
    }

    async fn cancel_if_orphaned(&self, reservation: &Reservation) -> AppResult<()> {
        let (Some(id), Some(slot)) = (reservation.id(), reservation.slot()) else {
            return Ok(());
        };

        let missing = if self.times.find_by_id(slot.time_id).await?.is_none() {
            AppError::NotFound(format!("{}번 예약 시간이 존재하지 않습니다.", slot.time_id))
        } else if self.themes.find_by_id(slot.theme_id).await?.is_none() {
            AppError::NotFound(format!("{}번 테마가 존재하지 않습니다.", slot.theme_id))
        } else {
            return Ok(());
        };

        self.reservations.delete_by_id(id).await?;
        log::warn!("저장 직후 참조 대상이 삭제되어 예약을 취소: id={}", id);
        Err(missing)
    }

    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        self.guard.delete(id).await
    }
}


fn reservation_service_constructor() -> AppResult<()> {
    let service = ReservationService::new(
        ServiceLocator::port::<dyn ReservationStore>()?,
        ServiceLocator::port::<dyn TimeCatalog>()?,
        ServiceLocator::port::<dyn ThemeStore>()?,
        ServiceLocator::port::<dyn MemberStore>()?,
    );
    ServiceLocator::set(Arc::new(service));
    Ok(())
}

inventory::submit! {
    ServiceRegistration {
        name: "reservation_service",
        constructor: reservation_service_constructor,
    }
}
