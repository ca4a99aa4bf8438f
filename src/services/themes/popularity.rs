//! 주간 인기 테마 랭킹
//!
//! 오늘을 제외한 직전 7일(`today - 7` ~ `today - 1`, 양 끝 포함) 동안의
//! 예약 수로 테마 순위를 매깁니다. 예약 수가 같으면 테마 식별자 오름차순입니다.

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Theme;
use crate::repositories::ports::{ThemeRanking, ThemeStore};

const WINDOW_DAYS: u64 = 7;

/// 랭킹 집계 구간 (양 끝 포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TrailingWindow {
    /// `today` 전날에서 끝나는 7일 구간
    pub fn ending_yesterday(today: NaiveDate) -> AppResult<Self> {
        let out_of_range = || AppError::InternalError(format!("{} 기준 랭킹 구간을 계산할 수 없습니다", today));

        let end = today.checked_sub_days(Days::new(1)).ok_or_else(out_of_range)?;
        let start = today.checked_sub_days(Days::new(WINDOW_DAYS)).ok_or_else(out_of_range)?;

        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

pub struct PopularityRanker {
    themes: Arc<dyn ThemeStore>,
    limit: usize,
}

impl PopularityRanker {
    pub fn new(themes: Arc<dyn ThemeStore>, limit: usize) -> Self {
        Self { themes, limit }
    }

    /// 현재 날짜 기준 주간 인기 테마
    pub async fn weekly_hot_themes(&self) -> AppResult<Vec<Theme>> {
        self.weekly_hot_themes_on(Local::now().date_naive()).await
    }

    /// `today` 기준 주간 인기 테마, 가장 많이 예약된 테마부터
    pub async fn weekly_hot_themes_on(&self, today: NaiveDate) -> AppResult<Vec<Theme>> {
        let window = TrailingWindow::ending_yesterday(today)?;

        let rankings = self.themes
            .top_reserved_in_window(window.start, window.end, self.limit)
            .await?;

        log::debug!(
            "주간 인기 테마 집계: {} ~ {}, {}건",
            window.start,
            window.end,
            rankings.len()
        );

        Ok(Self::order(rankings, self.limit))
    }

    /// 저장소의 정렬을 신뢰하지 않고 같은 규칙으로 다시 정렬합니다.
    fn order(mut rankings: Vec<ThemeRanking>, limit: usize) -> Vec<Theme> {
        rankings.retain(|ranking| ranking.reservation_count > 0);
        rankings.sort_by(|a, b| {
            b.reservation_count
                .cmp(&a.reservation_count)
                .then_with(|| a.theme.id().cmp(&b.theme.id()))
        });

        rankings
            .into_iter()
            .take(limit)
            .map(|ranking| ranking.theme)
            .collect()
    }
}
