//! # 회원 서비스
//!
//! 회원 목록 조회와 가입을 담당합니다.
//!
//! 가입 요청은 값 객체(`UserName`, `Email`, `Password`)로 다시 검증한 뒤
//! 비밀번호를 bcrypt로 해싱해 저장합니다. 원문 비밀번호는 저장하지도,
//! 로그에 남기지도 않습니다. 이메일 중복은 저장소의 유니크 인덱스가 판정합니다.

use std::sync::Arc;
use bcrypt::hash;

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{MemberCreateRequest, MemberResponse};
use crate::domain::entities::Member;
use crate::domain::values::{Email, Password, UserName};
use crate::repositories::ports::MemberStore;

pub struct MemberService {
    members: Arc<dyn MemberStore>,
    bcrypt_cost: u32,
}

impl MemberService {
    /// # Arguments
    ///
    /// * `bcrypt_cost` - 해싱 비용, 보통 [`PasswordConfig::bcrypt_cost`]
    pub fn new(members: Arc<dyn MemberStore>, bcrypt_cost: u32) -> Self {
        Self { members, bcrypt_cost }
    }

    pub async fn find_all(&self) -> AppResult<Vec<MemberResponse>> {
        let members = self.members.find_all().await?;
        Ok(members.iter().map(MemberResponse::from).collect())
    }

    /// 회원 가입
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 이름, 이메일, 비밀번호 규칙 위반
    /// * `ConflictError` - 이미 가입된 이메일
    /// * `InternalError` - 비밀번호 해싱 실패
    pub async fn create(&self, request: MemberCreateRequest) -> AppResult<MemberResponse> {
        let start_time = std::time::Instant::now();

        let name = UserName::new(request.name)?;
        let email = Email::new(request.email)?;
        let password = Password::new(request.password)?;

        let hash_start = std::time::Instant::now();
        let password_hash = hash(password.as_str(), self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let saved = self.members
            .insert(&Member::new(name, email, password_hash))
            .await?;

        log::info!("Total member creation took: {:?}", start_time.elapsed());

        Ok(MemberResponse::from(&saved))
    }
}

fn member_service_constructor() -> AppResult<()> {
    let service = MemberService::new(
        ServiceLocator::port::<dyn MemberStore>()?,
        PasswordConfig::bcrypt_cost(),
    );
    ServiceLocator::set(Arc::new(service));
    Ok(())
}

inventory::submit! {
    ServiceRegistration {
        name: "member_service",
        constructor: member_service_constructor,
    }
}
