//! # Service Registry
//!
//! 애플리케이션 전역에서 공유하는 컴포넌트(데이터베이스 핸들, 저장소 포트,
//! 서비스)를 타입 기준으로 보관하는 경량 서비스 로케이터입니다.
//!
//! 저장소와 서비스는 각 모듈에서 `inventory::submit!`으로 생성 함수를 등록하고,
//! 부팅 시점에 [`ServiceLocator::initialize_all`]이 저장소 → 서비스 순서로
//! 생성 함수를 실행합니다. 생성 함수는 필요한 의존성을 로케이터에서 꺼내 쓰므로
//! `main`은 인프라(`Database`, 선택적인 랭킹 캐시)만 먼저 등록하면 됩니다.
//!
//! ```text
//! main ──set(Database)──▶ ┌──────────────────────────────┐
//! RepositoryRegistration ▶│ ServiceLocator               │
//! ServiceRegistration ───▶│  TypeId → Arc<dyn Any>       │
//! handler ─────get──────▶ └──────────────────────────────┘
//! ```
//!
//! 저장소는 구현 타입이 아니라 포트(`Arc<dyn ThemeStore>` 등)로 등록합니다.
//!
//! ```rust,ignore
//! ServiceLocator::set_port::<dyn ThemeStore>(Arc::new(ThemeRepository::new(&database)));
//!
//! let themes = ServiceLocator::port::<dyn ThemeStore>()?;
//! let service = ServiceLocator::get::<ReservationService>()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use futures_util::future::BoxFuture;
use once_cell::sync::Lazy;

use crate::core::errors::{AppError, AppResult};
use crate::utils::display_terminal::{
    print_boxed_title, print_registered, print_registry_summary, print_step_complete, print_step_start,
    print_sub_task,
};

/// 저장소 등록 정보
///
/// 생성 함수는 로케이터에서 `Database`를 꺼내 어댑터를 만들고 인덱스를 준비한 뒤
/// 포트로 등록합니다. 인덱스 생성이 비동기이므로 future를 반환합니다.
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> BoxFuture<'static, AppResult<()>>,
}

/// 서비스 등록 정보
///
/// 생성 함수는 저장소 포트가 모두 등록된 뒤에 실행됩니다.
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> AppResult<()>,
}

inventory::collect!(RepositoryRegistration);
inventory::collect!(ServiceRegistration);

pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 등록된 인스턴스를 타입으로 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 등록되지 않았거나 잠금이 오염된 경우
    pub fn get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        let type_name = std::any::type_name::<T>();

        let instances = LOCATOR.instances.read()
            .map_err(|_| AppError::InternalError("ServiceLocator lock poisoned".to_string()))?;

        let instance = instances.get(&TypeId::of::<T>())
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!(
                "Service not found: {}. Make sure it's registered with ServiceLocator::set()",
                type_name
            )))?;

        instance
            .downcast::<T>()
            .map_err(|_| AppError::InternalError(format!("Type mismatch in ServiceLocator: {}", type_name)))
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        match LOCATOR.instances.write() {
            Ok(mut instances) => {
                instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
                print_registered(&clean_name);
            }
            Err(_) => log::error!("ServiceLocator lock poisoned, {} not registered", clean_name),
        }
    }

    /// 트레이트 객체(포트)를 등록합니다.
    ///
    /// `Arc<P>` 자체를 키로 삼으므로 같은 포트는 하나만 등록됩니다.
    pub fn set_port<P: ?Sized + Send + Sync + 'static>(port: Arc<P>) {
        Self::set(Arc::new(port));
    }

    /// 등록된 포트를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 포트가 등록되지 않은 경우
    pub fn port<P: ?Sized + Send + Sync + 'static>() -> AppResult<Arc<P>> {
        Self::get::<Arc<P>>().map(|port| (*port).clone())
    }

    /// 수집된 모든 저장소와 서비스를 생성해 등록합니다.
    ///
    /// # 초기화 순서
    ///
    /// 1. **Repository 먼저**: 인덱스를 준비하고 포트를 등록
    /// 2. **Service 나중에**: 등록된 포트로 서비스를 조립
    ///
    /// # Errors
    ///
    /// 생성 함수가 돌려준 첫 번째 오류 (의존성 누락, 인덱스 생성 실패 등)
    pub async fn initialize_all() -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        print_step_start(1, "Creating Repository instances");
        for registration in &repo_registrations {
            print_sub_task(registration.name, "Creating...");
            (registration.constructor)().await?;
        }
        print_step_complete(1, "Repository instances created");

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        print_step_start(2, "Creating Service instances");
        for registration in &service_registrations {
            print_sub_task(registration.name, "Creating...");
            (registration.constructor)()?;
        }
        print_step_complete(2, "Service instances created");

        log::info!(
            "저장소 {}개, 서비스 {}개 초기화 완료",
            repo_registrations.len(),
            service_registrations.len()
        );
        Ok(())
    }

    /// 현재 등록된 컴포넌트 수
    pub fn registered_count() -> usize {
        LOCATOR.instances.read()
            .map(|instances| instances.len())
            .unwrap_or(0)
    }

    /// 부팅 완료 요약을 출력합니다.
    pub fn print_summary() {
        print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
        print_registry_summary(Self::registered_count());
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        // 제네릭 인자 안의 경로는 건드리지 않는다
        let head = type_name.split('<').next().unwrap_or(type_name);
        match head.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct RegisteredCounter {
        value: u32,
    }

    struct MissingComponent;

    trait Greeter: Send + Sync {
        fn greet(&self) -> &'static str;
    }

    struct Korean;

    impl Greeter for Korean {
        fn greet(&self) -> &'static str {
            "안녕하세요"
        }
    }

    trait UnregisteredPort: Send + Sync {}

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(RegisteredCounter { value: 7 }));

        let counter = ServiceLocator::get::<RegisteredCounter>().unwrap();
        assert_eq!(counter.value, 7);
    }

    #[test]
    fn test_get_unregistered_type_is_internal_error() {
        let result = ServiceLocator::get::<MissingComponent>();

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_port_is_returned_as_trait_object() {
        ServiceLocator::set_port::<dyn Greeter>(Arc::new(Korean));

        let greeter = ServiceLocator::port::<dyn Greeter>().unwrap();
        assert_eq!(greeter.greet(), "안녕하세요");
    }

    #[test]
    fn test_missing_port_is_internal_error() {
        let result = ServiceLocator::port::<dyn UnregisteredPort>();

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_every_repository_and_service_submits_a_registration() {
        let mut repositories: Vec<_> = inventory::iter::<RepositoryRegistration>()
            .map(|registration| registration.name)
            .collect();
        let mut services: Vec<_> = inventory::iter::<ServiceRegistration>()
            .map(|registration| registration.name)
            .collect();
        repositories.sort();
        services.sort();

        assert_eq!(
            repositories,
            vec!["member_repository", "reservation_repository", "reservation_time_repository", "theme_repository"]
        );
        assert_eq!(
            services,
            vec!["member_service", "reservation_service", "theme_service", "time_service"]
        );
    }

    #[test]
    fn test_service_constructor_without_ports_fails() {
        // 포트가 등록되지 않은 테스트 환경에서는 생성 함수가 의존성 누락을 보고한다
        let registration = inventory::iter::<ServiceRegistration>()
            .find(|registration| registration.name == "reservation_service")
            .unwrap();

        assert!(matches!((registration.constructor)(), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("roomescape_backend::services::ThemeService"),
            "ThemeService"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Plain"), "Plain");
    }
}
