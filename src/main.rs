//! 방탈출 예약 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB에 연결하고, 캐시가 켜져 있으면 Redis에 연결합니다. 저장소와 서비스는
//! 각 모듈이 `inventory`로 등록한 생성 함수를 [`ServiceLocator::initialize_all`]이
//! 실행해 만듭니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info, warn};
use roomescape_backend::caching::hot_themes::{HotThemeCache, RedisHotThemeCache};
use roomescape_backend::caching::redis::RedisClient;
use roomescape_backend::config::{CacheConfig, RateLimitConfig, ServerConfig};
use roomescape_backend::core::registry::ServiceLocator;
use roomescape_backend::db::Database;
use roomescape_backend::routes::configure_all_routes;
use roomescape_backend::utils::display_terminal::{print_boxed_title, print_step_complete, print_step_start};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 방탈출 예약 서비스 시작중...");
    print_boxed_title("ROOMESCAPE RESERVATION SERVICE");

    print_step_start(1, "데이터 저장소 연결");
    let (database, redis_client) = initialize_data_stores().await?;
    print_step_complete(1, "데이터 저장소 연결");

    print_step_start(2, "인프라 등록");
    register_infrastructure(database, redis_client);
    print_step_complete(2, "인프라 등록");

    // 저장소(인덱스 포함) → 서비스 순서로 자동 등록
    ServiceLocator::initialize_all()
        .await
        .map_err(|e| io::Error::other(format!("서비스 초기화 실패: {}", e)))?;

    ServiceLocator::print_summary();
    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other(format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config)))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv::dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=roomescape_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 (캐시가 켜져 있으면) Redis 연결을 초기화합니다
///
/// MongoDB 연결 실패는 시작 실패입니다. Redis 연결 실패는 경고만 남기고
/// 캐시 없이 계속 진행합니다.
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Option<Arc<RedisClient>>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

    info!("📦 사용 데이터베이스: {}", database.database_name());

    if !CacheConfig::enabled() {
        info!("캐시 비활성화 (CACHE_ENABLED=false)");
        return Ok((Arc::new(database), None));
    }

    let redis_client = match RedisClient::new().await {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("Redis 연결 실패, 캐시 없이 시작합니다: {}", e);
            None
        }
    };

    Ok((Arc::new(database), redis_client))
}

/// 저장소 생성 함수가 꺼내 쓸 인프라를 등록합니다
///
/// Redis가 연결되어 있으면 주간 인기 테마 캐시 포트를 등록하고, 테마/예약 저장소는
/// 이 포트가 있을 때만 캐시 데코레이터로 감싸집니다.
fn register_infrastructure(database: Arc<Database>, redis_client: Option<Arc<RedisClient>>) {
    ServiceLocator::set(database);

    if let Some(redis_client) = redis_client {
        let cache = RedisHotThemeCache::new(redis_client, CacheConfig::hot_theme_ttl_seconds());
        ServiceLocator::set_port::<dyn HotThemeCache>(Arc::new(cache));
    }
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 개발 서버와 자체 서버의 로컬호스트 Origin을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])
        .max_age(3600)
}
