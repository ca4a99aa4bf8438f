//! # Member HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/members` | 회원 목록 (식별자, 이름) | 200 OK |
//! | `POST` | `/members` | 회원 가입 | 201 Created |

use actix_web::{get, http::header, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::MemberCreateRequest;
use crate::services::members::MemberService;

#[get("")]
pub async fn find_members() -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<MemberService>()?;
    let members = service.find_all().await?;

    Ok(HttpResponse::Ok().json(members))
}

#[post("")]
pub async fn create_member(
    payload: web::Json<MemberCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = ServiceLocator::get::<MemberService>()?;
    let response = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/members/{}", response.id)))
        .json(response))
}
