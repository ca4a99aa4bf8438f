use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::{MemberResponse, ThemeResponse, TimeResponse};
use crate::domain::entities::Reservation;
use crate::services::reservations::availability::AvailableTime;
use crate::utils::time_format::hh_mm;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreateRequest {
    pub date: NaiveDate,

    #[validate(range(min = 1, message = "예약 시간 식별자는 1 이상이어야 합니다"))]
    pub time_id: i64,

    #[validate(range(min = 1, message = "테마 식별자는 1 이상이어야 합니다"))]
    pub theme_id: i64,

    #[validate(range(min = 1, message = "회원 식별자는 1 이상이어야 합니다"))]
    pub member_id: i64,
}

/// `GET /reservations/available?date=...&themeId=...`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimesQuery {
    pub date: NaiveDate,

    #[validate(range(min = 1, message = "테마 식별자는 1 이상이어야 합니다"))]
    pub theme_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub time: TimeResponse,
    pub theme: ThemeResponse,
    pub member: MemberResponse,
}

impl From<&Reservation> for ReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id().unwrap_or_default(),
            date: reservation.date(),
            time: TimeResponse::from(reservation.time()),
            theme: ThemeResponse::from(reservation.theme()),
            member: MemberResponse::from(reservation.member()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimeResponse {
    pub time_id: i64,
    #[serde(with = "hh_mm")]
    pub start_at: NaiveTime,
    pub already_booked: bool,
}

impl From<&AvailableTime> for AvailableTimeResponse {
    fn from(available: &AvailableTime) -> Self {
        Self {
            time_id: available.time_id,
            start_at: available.start_at,
            already_booked: available.already_booked,
        }
    }
}
