//! API 라우트 설정 모듈
//!
//! 기능별 스코프를 `/api/v1` 아래에 등록하고, 헬스체크 엔드포인트를 제공합니다.
//!
//! | 스코프 | 핸들러 모듈 |
//! |--------|-------------|
//! | `/api/v1/reservations` | [`handlers::reservations`] |
//! | `/api/v1/themes` | [`handlers::themes`] |
//! | `/api/v1/times` | [`handlers::times`] |
//! | `/api/v1/members` | [`handlers::members`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(configure_reservation_routes)
            .configure(configure_theme_routes)
            .configure(configure_time_routes)
            .configure(configure_member_routes)
    );
}

/// 예약 라우트
///
/// `/available`이 `/{reservation_id}`보다 먼저 등록되어야 합니다.
fn configure_reservation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reservations")
            .service(handlers::reservations::find_available_times)
            .service(handlers::reservations::find_reservations)
            .service(handlers::reservations::create_reservation)
            .service(handlers::reservations::delete_reservation)
    );
}

fn configure_theme_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/themes")
            .service(handlers::themes::find_weekly_hot_themes)
            .service(handlers::themes::find_themes)
            .service(handlers::themes::create_theme)
            .service(handlers::themes::delete_theme)
    );
}

fn configure_time_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/times")
            .service(handlers::times::find_times)
            .service(handlers::times::create_time)
            .service(handlers::times::delete_time)
    );
}

fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .service(handlers::members::find_members)
            .service(handlers::members::create_member)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "roomescape_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-05-01T00:00:00+00:00",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "registered_components": 12
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "registered_components": crate::core::registry::ServiceLocator::registered_count()
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], env!("CARGO_PKG_NAME"));
    }

    #[actix_web::test]
    async fn test_invalid_reservation_request_is_rejected_before_service() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let request = test::TestRequest::post()
            .uri("/api/v1/reservations")
            .set_json(json!({ "date": "2024-05-01", "timeId": 0, "themeId": 1, "memberId": 1 }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_invalid_member_email_is_rejected() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let request = test::TestRequest::post()
            .uri("/api/v1/members")
            .set_json(json!({ "name": "브라운", "email": "not-an-email", "password": "1234" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_time_with_seconds_is_rejected() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let request = test::TestRequest::post()
            .uri("/api/v1/times")
            .set_json(json!({ "startAt": "10:30:45" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
