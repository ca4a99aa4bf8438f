use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::{FindOptions, IndexOptions}, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::{EntityId, Member};
use crate::domain::values::{Email, UserName};
use crate::repositories::mongo::{is_duplicate_key, IdSequence};
use crate::repositories::ports::MemberStore;
use crate::utils::display_terminal::print_index_ready;

pub const COLLECTION: &str = "members";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDocument {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
}

impl TryFrom<MemberDocument> for Member {
    type Error = AppError;

    fn try_from(document: MemberDocument) -> Result<Self, Self::Error> {
        let invalid = |e: crate::domain::errors::ValidationError| {
            AppError::DatabaseError(format!("저장된 회원 {}가 유효하지 않습니다: {}", document.id, e))
        };

        let name = UserName::new(document.name.clone()).map_err(invalid)?;
        let email = Email::new(document.email.clone()).map_err(invalid)?;

        Ok(Member::with_id(document.id, name, email, document.password_hash))
    }
}

pub struct MemberRepository {
    collection: Collection<MemberDocument>,
    sequence: IdSequence,
}

impl MemberRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
            sequence: IdSequence::new(database, COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection.create_index(email_index).await?;
        print_index_ready(COLLECTION, "email_unique");

        Ok(())
    }
}

#[async_trait]
impl MemberStore for MemberRepository {
    async fn find_all(&self) -> AppResult<Vec<Member>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .build();

        let documents: Vec<MemberDocument> = self.collection
            .find(doc! {})
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Member::try_from).collect()
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Member>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(Member::try_from)
            .transpose()
    }

    async fn insert(&self, member: &Member) -> AppResult<Member> {
        let id = self.sequence.next().await?;
        let document = MemberDocument {
            id,
            name: member.name().to_string(),
            email: member.email().to_string(),
            password_hash: member.password_hash().to_string(),
        };

        match self.collection.insert_one(&document).await {
            Ok(_) => {
                log::info!("회원 등록: id={}, email={}", id, document.email);
                Ok(member.clone().assigned(id))
            }
            Err(e) if is_duplicate_key(&e) => Err(AppError::ConflictError(format!(
                "{}은 이미 가입된 이메일입니다.",
                document.email
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

async fn register_member_repository() -> AppResult<()> {
    let database = ServiceLocator::get::<Database>()?;
    let repository = MemberRepository::new(&database);
    repository.create_indexes().await?;

    ServiceLocator::set_port::<dyn MemberStore>(Arc::new(repository));
    Ok(())
}

fn member_repository_constructor() -> BoxFuture<'static, AppResult<()>> {
    Box::pin(register_member_repository())
}

inventory::submit! {
    RepositoryRegistration {
        name: "member_repository",
        constructor: member_repository_constructor,
    }
}
