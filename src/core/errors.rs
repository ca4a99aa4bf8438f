//! # Application Error Handling System
//!
//! 예약 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 도메인 계층의 에러(검증 실패, 예약 충돌)를 `AppError`로 모으고,
//! Actix-Web `ResponseError` 구현을 통해 일관된 JSON 에러 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 값 객체/요청 검증 실패 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 예약, 테마, 시간 |
//! | `ConflictError` | 409 Conflict | 이미 예약된 슬롯, 참조 중인 테마 삭제 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let theme = theme_store.find_by_id(theme_id).await?
//!     .ok_or_else(|| AppError::NotFound("테마가 존재하지 않습니다".to_string()))?;
//! ```

use thiserror::Error;

use crate::domain::errors::{BookingConflict, ValidationError};

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`만으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생한 오류입니다. 중복 키 위반은 이 변형으로 오지 않고
    /// 저장소 포트의 태그된 결과로 전달됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 값 객체 생성 실패나 요청 DTO 검증 실패 시 발생하며,
    /// 실패한 필드와 사유를 메시지에 담습니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// # 예제
    /// ```rust,ignore
    /// if store.delete_by_id(id).await? == 0 {
    ///     return Err(AppError::NotFound("삭제할 예약이 존재하지 않습니다".to_string()));
    /// }
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 같은 (날짜, 시간, 테마) 슬롯의 이중 예약, 중복된 예약 시간,
    /// 예약이 남아있는 테마/시간 삭제 시도 등에서 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::ValidationError(error.to_string())
    }
}

impl From<BookingConflict> for AppError {
    fn from(conflict: BookingConflict) -> Self {
        AppError::ConflictError(conflict.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    /// 각 변형을 HTTP 상태 코드와 `{"error": "..."}` 형식의 JSON 응답으로 변환합니다.
    ///
    /// 5xx 에러는 서버 로그에 남기고, 4xx 에러는 클라이언트가 고칠 수 있는
    /// 메시지를 그대로 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let document = bson::from_document::<ThemeDocument>(raw)
///     .context("테마 문서 변환 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
