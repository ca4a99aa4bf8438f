//! # Theme HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/themes` | 전체 테마 조회 | 200 OK |
//! | `GET` | `/themes/hot/weekly` | 주간 인기 테마 | 200 OK |
//! | `POST` | `/themes` | 테마 생성 | 201 Created |
//! | `DELETE` | `/themes/{id}` | 테마 삭제 | 204 No Content |

use actix_web::{delete, get, http::header, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::ThemeCreateRequest;
use crate::services::themes::ThemeService;

#[get("")]
pub async fn find_themes() -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<ThemeService>()?;
    let themes = service.find_all().await?;

    Ok(HttpResponse::Ok().json(themes))
}

#[get("/hot/weekly")]
pub async fn find_weekly_hot_themes() -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<ThemeService>()?;
    let themes = service.find_weekly_hot_themes().await?;

    Ok(HttpResponse::Ok().json(themes))
}

#[post("")]
pub async fn create_theme(
    payload: web::Json<ThemeCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = ServiceLocator::get::<ThemeService>()?;
    let response = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/themes/{}", response.id)))
        .json(response))
}

#[delete("/{theme_id}")]
pub async fn delete_theme(
    theme_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<ThemeService>()?;
    service.delete(theme_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
