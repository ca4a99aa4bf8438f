use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{TimeCreateRequest, TimeResponse};
use crate::domain::entities::{EntityId, ReservationTime};
use crate::repositories::ports::{ReservationStore, TimeCatalog};

pub struct TimeService {
    times: Arc<dyn TimeCatalog>,
    reservations: Arc<dyn ReservationStore>,
}

impl TimeService {
    pub fn new(times: Arc<dyn TimeCatalog>, reservations: Arc<dyn ReservationStore>) -> Self {
        Self { times, reservations }
    }

    /// 시작 시각 오름차순
    pub async fn find_all(&self) -> AppResult<Vec<TimeResponse>> {
        let times = self.times.load_all().await?;
        Ok(times.iter().map(TimeResponse::from).collect())
    }

    /// # Errors
    ///
    /// * `ConflictError` - 같은 시작 시각이 이미 등록된 경우
    pub async fn create(&self, request: TimeCreateRequest) -> AppResult<TimeResponse> {
        let saved = self.times.insert(&ReservationTime::new(request.start_at)).await?;

        log::info!("예약 시간 등록: id={:?}, start_at={}", saved.id(), saved.start_at());
        Ok(TimeResponse::from(&saved))
    }

    /// 참조하는 예약이 없을 때만 삭제하고, 삭제 도중 예약이 생기면 되돌립니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 이 시간을 참조하는 예약이 남아 있는 경우
    /// * `NotFound` - 시간이 존재하지 않는 경우
    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        if self.reservations.exists_by_time_id(id).await? {
            return Err(referenced(id));
        }

        let time = self.times
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if self.times.delete_by_id(id).await? == 0 {
            return Err(not_found(id));
        }

        if self.reservations.exists_by_time_id(id).await? {
            self.times.restore(&time).await?;
            log::warn!("삭제 중 예약이 생겨 예약 시간을 되돌림: id={}", id);
            return Err(referenced(id));
        }

        log::info!("예약 시간 삭제: id={}", id);
        Ok(())
    }
}

fn referenced(id: EntityId) -> AppError {
    AppError::ConflictError(format!("{}번 예약 시간에 대한 예약이 존재하여 삭제할 수 없습니다.", id))
}

fn not_found(id: EntityId) -> AppError {
    AppError::NotFound(format!("{}번 예약 시간이 존재하지 않습니다.", id))
}


fn time_service_constructor() -> AppResult<()> {
    let service = TimeService::new(
        ServiceLocator::port::<dyn TimeCatalog>()?,
        ServiceLocator::port::<dyn ReservationStore>()?,
    );
    ServiceLocator::set(Arc::new(service));
    Ok(())
}

inventory::submit! {
    ServiceRegistration {
        name: "time_service",
        constructor: time_service_constructor,
    }
}
