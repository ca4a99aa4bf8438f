//! # 예약 리포지토리 구현
//!
//! 예약 문서는 참조 대상의 식별자만 저장하고, 조회 시 `$lookup`으로
//! 시간, 테마, 회원 문서를 붙여 완전한 [`Reservation`]으로 복원합니다.
//!
//! ## 인덱스
//!
//! - `slot_unique`: `(date, time_id, theme_id)` 유니크 복합 인덱스
//!
//! 이 인덱스가 동시 예약 요청의 유일한 직렬화 지점입니다. 같은 슬롯에 대한
//! 두 번째 `insert_one`은 중복 키 에러(11000)로 실패하고,
//! [`InsertOutcome::UniquenessViolation`]으로 변환되어 서비스에 전달됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::future::BoxFuture;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, from_document, Document}, options::IndexOptions, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::caching::hot_themes::HotThemeCache;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::{EntityId, Member, Reservation, ReservationTime, Theme};
use crate::repositories::members::member_repo::{MemberDocument, COLLECTION as MEMBERS};
use crate::repositories::mongo::{is_duplicate_key, IdSequence};
use crate::repositories::reservations::cached_reservation_repo::CachedReservationStore;
use crate::repositories::ports::{InsertOutcome, ReservationStore};
use crate::repositories::themes::theme_repo::{ThemeDocument, COLLECTION as THEMES};
use crate::repositories::times::time_repo::{ReservationTimeDocument, COLLECTION as TIMES};
use crate::utils::display_terminal::print_index_ready;
use crate::utils::time_format::{format_date, parse_date};

pub const COLLECTION: &str = "reservations";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDocument {
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time_id: EntityId,
    pub theme_id: EntityId,
    pub member_id: EntityId,
}

/// `$lookup`으로 참조 문서를 붙인 조회 결과
#[derive(Debug, Deserialize)]
struct ReservationView {
    #[serde(rename = "_id")]
    id: EntityId,
    date: String,
    time: ReservationTimeDocument,
    theme: ThemeDocument,
    member: MemberDocument,
}

impl TryFrom<ReservationView> for Reservation {
    type Error = AppError;

    fn try_from(view: ReservationView) -> Result<Self, Self::Error> {
        let date = parse_date(&view.date)
            .map_err(|e| AppError::DatabaseError(format!("저장된 예약 {}의 날짜 형식이 잘못되었습니다: {}", view.id, e)))?;

        Ok(Reservation::with_id(
            view.id,
            date,
            ReservationTime::try_from(view.time)?,
            Theme::try_from(view.theme)?,
            Member::try_from(view.member)?,
        ))
    }
}

pub struct ReservationRepository {
    collection: Collection<ReservationDocument>,
    sequence: IdSequence,
}

impl ReservationRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
            sequence: IdSequence::new(database, COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let slot_index = IndexModel::builder()
            .keys(doc! { "date": 1, "time_id": 1, "theme_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("slot_unique".to_string())
                .build())
            .build();

        // 테마/시간 삭제 전 참조 여부 확인용
        let theme_index = IndexModel::builder()
            .keys(doc! { "theme_id": 1 })
            .build();
        let time_index = IndexModel::builder()
            .keys(doc! { "time_id": 1 })
            .build();

        self.collection.create_index(slot_index).await?;
        print_index_ready(COLLECTION, "slot_unique");

        self.collection.create_indexes(vec![theme_index, time_index]).await?;
        print_index_ready(COLLECTION, "theme_id, time_id");

        Ok(())
    }

    /// 조건에 맞는 예약에 참조 문서를 붙이는 파이프라인
    ///
    /// 참조 문서가 없는 예약은 `$unwind`에서 빠집니다. 테마/시간 삭제는 삭제 후
    /// 참조를 다시 확인해 되돌리고, 예약 생성은 저장 후 참조를 다시 확인해
    /// 취소하므로 그런 예약은 남지 않습니다.
    fn view_pipeline(filter: Document) -> Vec<Document> {
        let lookup = |from: &str, local_field: &str, alias: &str| {
            doc! { "$lookup": {
                "from": from,
                "localField": local_field,
                "foreignField": "_id",
                "as": alias,
            }}
        };

        vec![
            doc! { "$match": filter },
            doc! { "$sort": { "_id": 1 } },
            lookup(TIMES, "time_id", "time"),
            doc! { "$unwind": "$time" },
            lookup(THEMES, "theme_id", "theme"),
            doc! { "$unwind": "$theme" },
            lookup(MEMBERS, "member_id", "member"),
            doc! { "$unwind": "$member" },
        ]
    }

    async fn find_views(&self, filter: Document) -> AppResult<Vec<Reservation>> {
        let rows: Vec<Document> = self.collection
            .aggregate(Self::view_pipeline(filter))
            .await?
            .try_collect()
            .await?;

        rows.into_iter()
            .map(|row| {
                let view: ReservationView = from_document(row)
                    .map_err(|e| AppError::DatabaseError(format!("예약 조회 결과 변환 실패: {}", e)))?;
                Reservation::try_from(view)
            })
            .collect()
    }
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        self.find_views(doc! {}).await
    }

    async fn find_by_date_and_theme(&self, date: NaiveDate, theme_id: EntityId) -> AppResult<Vec<Reservation>> {
        self.find_views(doc! { "date": format_date(date), "theme_id": theme_id }).await
    }

    async fn insert(&self, candidate: &Reservation) -> AppResult<InsertOutcome> {
        let slot = candidate.slot()
            .ok_or_else(|| AppError::InternalError("식별자가 없는 참조를 가진 예약은 저장할 수 없습니다".to_string()))?;
        let member_id = candidate.member().id()
            .ok_or_else(|| AppError::InternalError("저장되지 않은 회원의 예약은 저장할 수 없습니다".to_string()))?;

        let id = self.sequence.next().await?;
        let document = ReservationDocument {
            id,
            date: format_date(slot.date),
            time_id: slot.time_id,
            theme_id: slot.theme_id,
            member_id,
        };

        match self.collection.insert_one(&document).await {
            Ok(_) => Ok(InsertOutcome::Inserted(candidate.clone().assigned(id))),
            Err(e) if is_duplicate_key(&e) => Ok(InsertOutcome::UniquenessViolation),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count)
    }

    async fn exists_by_time_id(&self, time_id: EntityId) -> AppResult<bool> {
        let count = self.collection
            .count_documents(doc! { "time_id": time_id })
            .await?;

        Ok(count > 0)
    }

    async fn exists_by_theme_id(&self, theme_id: EntityId) -> AppResult<bool> {
        let count = self.collection
            .count_documents(doc! { "theme_id": theme_id })
            .await?;

        Ok(count > 0)
    }
}


/// 랭킹 캐시가 등록되어 있으면 쓰기 후 캐시를 비우는 데코레이터로 감싸 등록합니다.
async fn register_reservation_repository() -> AppResult<()> {
    let database = ServiceLocator::get::<Database>()?;
    let repository = ReservationRepository::new(&database);
    repository.create_indexes().await?;

    let repository: Arc<dyn ReservationStore> = Arc::new(repository);
    let reservations: Arc<dyn ReservationStore> = match ServiceLocator::port::<dyn HotThemeCache>() {
        Ok(cache) => Arc::new(CachedReservationStore::new(repository, cache)),
        Err(_) => repository,
    };

    ServiceLocator::set_port::<dyn ReservationStore>(reservations);
    Ok(())
}

fn reservation_repository_constructor() -> BoxFuture<'static, AppResult<()>> {
    Box::pin(register_reservation_repository())
}

inventory::submit! {
    RepositoryRegistration {
        name: "reservation_repository",
        constructor: reservation_repository_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_pipeline_joins_every_reference() {
        let pipeline = ReservationRepository::view_pipeline(doc! { "date": "2024-05-01", "theme_id": 3_i64 });

        let matched = pipeline[0].get_document("$match").unwrap();
        assert_eq!(matched.get_str("date").unwrap(), "2024-05-01");
        assert_eq!(matched.get_i64("theme_id").unwrap(), 3);

        let joined: Vec<&str> = pipeline.iter()
            .filter_map(|stage| stage.get_document("$lookup").ok())
            .map(|lookup| lookup.get_str("from").unwrap())
            .collect();
        assert_eq!(joined, vec![TIMES, THEMES, MEMBERS]);
    }

    #[test]
    fn test_view_converts_into_reservation() {
        let view = ReservationView {
            id: 7,
            date: "2024-05-01".to_string(),
            time: ReservationTimeDocument { id: 1, start_at: "10:00".to_string() },
            theme: ThemeDocument {
                id: 2,
                name: "레벨2 탈출".to_string(),
                description: "우테코 레벨2를 탈출하는 내용입니다.".to_string(),
                thumbnail: "https://example.com/2.png".to_string(),
            },
            member: MemberDocument {
                id: 3,
                name: "브라운".to_string(),
                email: "brown@example.com".to_string(),
                password_hash: "$2b$04$hash".to_string(),
            },
        };

        let reservation = Reservation::try_from(view).unwrap();

        assert_eq!(reservation.id(), Some(7));
        assert_eq!(reservation.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(reservation.time().id(), Some(1));
        assert_eq!(reservation.theme().name(), "레벨2 탈출");
        assert_eq!(reservation.member().name().as_str(), "브라운");
    }

    #[test]
    fn test_view_with_malformed_date_is_database_error() {
        let view = ReservationView {
            id: 7,
            date: "05/01/2024".to_string(),
            time: ReservationTimeDocument { id: 1, start_at: "10:00".to_string() },
            theme: ThemeDocument {
                id: 2,
                name: "레벨2 탈출".to_string(),
                description: "설명".to_string(),
                thumbnail: "https://example.com/2.png".to_string(),
            },
            member: MemberDocument {
                id: 3,
                name: "브라운".to_string(),
                email: "brown@example.com".to_string(),
                password_hash: "hash".to_string(),
            },
        };

        assert!(matches!(Reservation::try_from(view), Err(AppError::DatabaseError(_))));
    }
}
