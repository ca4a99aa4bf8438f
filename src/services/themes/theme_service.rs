//! # 테마 서비스
//!
//! 테마 목록/생성/삭제와 주간 인기 테마 조회를 담당합니다.
//! 인기 테마 계산은 [`PopularityRanker`]에 위임합니다.

use std::sync::Arc;

use crate::config::RankingConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{ThemeCreateRequest, ThemeResponse, ThemeResponses};
use crate::domain::entities::{EntityId, Theme};
use crate::repositories::ports::{ReservationStore, ThemeStore};
use crate::services::themes::popularity::PopularityRanker;

pub struct ThemeService {
    themes: Arc<dyn ThemeStore>,
    reservations: Arc<dyn ReservationStore>,
    ranker: PopularityRanker,
}

impl ThemeService {
    /// # Arguments
    ///
    /// * `hot_theme_limit` - 주간 인기 테마 최대 개수
    pub fn new(
        themes: Arc<dyn ThemeStore>,
        reservations: Arc<dyn ReservationStore>,
        hot_theme_limit: usize,
    ) -> Self {
        Self {
            ranker: PopularityRanker::new(themes.clone(), hot_theme_limit),
            themes,
            reservations,
        }
    }

    pub async fn find_all(&self) -> AppResult<ThemeResponses> {
        let themes = self.themes.find_all().await?;
        Ok(ThemeResponses::from(themes.as_slice()))
    }

    pub async fn find_weekly_hot_themes(&self) -> AppResult<ThemeResponses> {
        let themes = self.ranker.weekly_hot_themes().await?;
        Ok(ThemeResponses::from(themes.as_slice()))
    }

    pub async fn create(&self, request: ThemeCreateRequest) -> AppResult<ThemeResponse> {
        let theme = Theme::new(&request.name, &request.description, &request.thumbnail)?;
        let saved = self.themes.insert(&theme).await?;

        log::info!("테마 등록: id={:?}, name={}", saved.id(), saved.name());
        Ok(ThemeResponse::from(&saved))
    }

    /// 참조하는 예약이 없을 때만 테마를 삭제합니다.
    ///
    /// 확인과 삭제 사이에 예약이 저장될 수 있으므로 삭제 후 한 번 더 확인하고,
    /// 참조가 생겼으면 테마를 같은 식별자로 되돌립니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 이 테마를 참조하는 예약이 남아 있는 경우
    /// * `NotFound` - 테마가 존재하지 않는 경우
    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        if self.reservations.exists_by_theme_id(id).await? {
            return Err(referenced(id));
        }

        let theme = self.themes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if self.themes.delete_by_id(id).await? == 0 {
            return Err(not_found(id));
        }

        if self.reservations.exists_by_theme_id(id).await? {
            self.themes.restore(&theme).await?;
            log::warn!("삭제 중 예약이 생겨 테마를 되돌림: id={}", id);
            return Err(referenced(id));
        }

        log::info!("테마 삭제: id={}", id);
        Ok(())
    }
}

fn referenced(id: EntityId) -> AppError {
    AppError::ConflictError(format!("{}번 테마에 대한 예약이 존재하여 삭제할 수 없습니다.", id))
}

fn not_found(id: EntityId) -> AppError {
    AppError::NotFound(format!("{}번 테마가 존재하지 않습니다.", id))
}


fn theme_service_constructor() -> AppResult<()> {
    let service = ThemeService::new(
        ServiceLocator::port::<dyn ThemeStore>()?,
        ServiceLocator::port::<dyn ReservationStore>()?,
        RankingConfig::hot_theme_limit(),
    );
    ServiceLocator::set(Arc::new(service));
    Ok(())
}

inventory::submit! {
    ServiceRegistration {
        name: "theme_service",
        constructor: theme_service_constructor,
    }
}
