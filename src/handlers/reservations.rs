//! # Reservation HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/reservations` | 전체 예약 조회 | 200 OK |
//! | `GET` | `/reservations/available?date=&themeId=` | 예약 가능 시간 조회 | 200 OK |
//! | `POST` | `/reservations` | 예약 생성 | 201 Created |
//! | `DELETE` | `/reservations/{id}` | 예약 삭제 | 204 No Content |
//!
//! 이미 예약된 슬롯에 대한 생성 요청은 409 Conflict로 응답합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/reservations \
//!   -H "Content-Type: application/json" \
//!   -d '{"date":"2024-05-01","timeId":1,"themeId":1,"memberId":1}'
//! ```

use actix_web::{delete, get, http::header, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::{AvailableTimesQuery, ReservationCreateRequest};
use crate::services::reservations::ReservationService;

#[get("")]
pub async fn find_reservations() -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<ReservationService>()?;
    let reservations = service.find_all().await?;

    Ok(HttpResponse::Ok().json(reservations))
}

#[get("/available")]
pub async fn find_available_times(
    query: web::Query<AvailableTimesQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let service = ServiceLocator::get::<ReservationService>()?;
    let available = service.find_available_times(query.date, query.theme_id).await?;

    Ok(HttpResponse::Ok().json(available))
}

#[post("")]
pub async fn create_reservation(
    payload: web::Json<ReservationCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = ServiceLocator::get::<ReservationService>()?;
    let response = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/reservations/{}", response.id)))
        .json(response))
}

#[delete("/{reservation_id}")]
pub async fn delete_reservation(
    reservation_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<ReservationService>()?;
    service.delete(reservation_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
