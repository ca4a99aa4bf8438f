use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::{FindOptions, IndexOptions}, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::{EntityId, ReservationTime};
use crate::repositories::mongo::{is_duplicate_key, IdSequence};
use crate::repositories::ports::TimeCatalog;
use crate::utils::display_terminal::print_index_ready;
use crate::utils::time_format::{format_time, parse_time};

pub const COLLECTION: &str = "reservation_times";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationTimeDocument {
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// `HH:MM`
    pub start_at: String,
}

impl TryFrom<ReservationTimeDocument> for ReservationTime {
    type Error = AppError;

    fn try_from(document: ReservationTimeDocument) -> Result<Self, Self::Error> {
        let start_at = parse_time(&document.start_at)
            .map_err(|e| AppError::DatabaseError(format!("저장된 예약 시간 {}의 형식이 잘못되었습니다: {}", document.id, e)))?;
        Ok(ReservationTime::with_id(document.id, start_at))
    }
}

pub struct ReservationTimeRepository {
    collection: Collection<ReservationTimeDocument>,
    sequence: IdSequence,
}

impl ReservationTimeRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
            sequence: IdSequence::new(database, COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // 같은 시각은 카탈로그에 한 번만
        let start_at_index = IndexModel::builder()
            .keys(doc! { "start_at": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("start_at_unique".to_string())
                .build())
            .build();

        self.collection.create_index(start_at_index).await?;
        print_index_ready(COLLECTION, "start_at_unique");

        Ok(())
    }
}

#[async_trait]
impl TimeCatalog for ReservationTimeRepository {
    async fn load_all(&self) -> AppResult<Vec<ReservationTime>> {
        let options = FindOptions::builder()
            .sort(doc! { "start_at": 1 })
            .build();

        let documents: Vec<ReservationTimeDocument> = self.collection
            .find(doc! {})
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(ReservationTime::try_from).collect()
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<ReservationTime>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(ReservationTime::try_from)
            .transpose()
    }

    async fn insert(&self, time: &ReservationTime) -> AppResult<ReservationTime> {
        let id = self.sequence.next().await?;
        let document = ReservationTimeDocument {
            id,
            start_at: format_time(time.start_at()),
        };

        match self.collection.insert_one(&document).await {
            Ok(_) => Ok(time.clone().assigned(id)),
            Err(e) if is_duplicate_key(&e) => Err(AppError::ConflictError(format!(
                "{}은 이미 등록된 예약 시간입니다.",
                document.start_at
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count)
    }

    async fn restore(&self, time: &ReservationTime) -> AppResult<()> {
        let id = time.id()
            .ok_or_else(|| AppError::InternalError("식별자가 없는 예약 시간은 되돌릴 수 없습니다".to_string()))?;
        let document = ReservationTimeDocument {
            id,
            start_at: format_time(time.start_at()),
        };

        match self.collection.insert_one(&document).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::ConflictError(format!(
                "{}번 예약 시간을 되돌릴 수 없습니다. 같은 시각이 이미 등록되어 있습니다.",
                id
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

async fn register_reservation_time_repository() -> AppResult<()> {
    let database = ServiceLocator::get::<Database>()?;
    let repository = ReservationTimeRepository::new(&database);
    repository.create_indexes().await?;

    ServiceLocator::set_port::<dyn TimeCatalog>(Arc::new(repository));
    Ok(())
}

fn reservation_time_repository_constructor() -> BoxFuture<'static, AppResult<()>> {
    Box::pin(register_reservation_time_repository())
}

inventory::submit! {
    RepositoryRegistration {
        name: "reservation_time_repository",
        constructor: reservation_time_repository_constructor,
    }
}
