//! # Reservation Time HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/times` | 전체 예약 시간 (시작 시각 순) | 200 OK |
//! | `POST` | `/times` | 예약 시간 등록 | 201 Created |
//! | `DELETE` | `/times/{id}` | 예약 시간 삭제 | 204 No Content |

use actix_web::{delete, get, http::header, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::TimeCreateRequest;
use crate::services::times::TimeService;

#[get("")]
pub async fn find_times() -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<TimeService>()?;
    let times = service.find_all().await?;

    Ok(HttpResponse::Ok().json(times))
}

#[post("")]
pub async fn create_time(
    payload: web::Json<TimeCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<TimeService>()?;
    let response = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/times/{}", response.id)))
        .json(response))
}

#[delete("/{time_id}")]
pub async fn delete_time(
    time_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<TimeService>()?;
    service.delete(time_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
