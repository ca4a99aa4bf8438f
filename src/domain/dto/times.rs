use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ReservationTime;
use crate::utils::time_format::hh_mm;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCreateRequest {
    #[serde(with = "hh_mm")]
    pub start_at: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    pub id: i64,
    #[serde(with = "hh_mm")]
    pub start_at: NaiveTime,
}

impl From<&ReservationTime> for TimeResponse {
    fn from(time: &ReservationTime) -> Self {
        Self {
            id: time.id().unwrap_or_default(),
            start_at: time.start_at(),
        }
    }
}
