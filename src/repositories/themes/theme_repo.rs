use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::future::BoxFuture;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, from_document, Document}, options::FindOptions, Collection};
use serde::{Deserialize, Serialize};

use crate::caching::hot_themes::HotThemeCache;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::{EntityId, Theme};
use crate::repositories::mongo::IdSequence;
use crate::repositories::ports::{ThemeRanking, ThemeStore};
use crate::repositories::reservations::reservation_repo::COLLECTION as RESERVATIONS;
use crate::repositories::themes::cached_theme_repo::CachedThemeStore;
use crate::utils::time_format::format_date;

pub const COLLECTION: &str = "themes";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeDocument {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl ThemeDocument {
    fn from_theme(id: EntityId, theme: &Theme) -> Self {
        Self {
            id,
            name: theme.name().to_string(),
            description: theme.description().to_string(),
            thumbnail: theme.thumbnail().to_string(),
        }
    }
}

impl TryFrom<ThemeDocument> for Theme {
    type Error = AppError;

    fn try_from(document: ThemeDocument) -> Result<Self, Self::Error> {
        Theme::with_id(document.id, &document.name, &document.description, &document.thumbnail)
            .map_err(|e| AppError::DatabaseError(format!("저장된 테마 {}가 유효하지 않습니다: {}", document.id, e)))
    }
}

/// 주간 랭킹 집계 결과 문서
#[derive(Debug, Deserialize)]
struct RankedThemeDocument {
    reservation_count: i64,
    theme: ThemeDocument,
}

pub struct ThemeRepository {
    collection: Collection<ThemeDocument>,
    reservations: Collection<Document>,
    sequence: IdSequence,
}

impl ThemeRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
            reservations: database.collection(RESERVATIONS),
            sequence: IdSequence::new(database, COLLECTION),
        }
    }

    /// 주간 랭킹 집계 파이프라인
    ///
    /// 날짜는 `YYYY-MM-DD` 문자열로 저장되어 있어 문자열 범위 비교가 곧 날짜 비교입니다.
    fn ranking_pipeline(window_start: NaiveDate, window_end: NaiveDate, limit: usize) -> Vec<Document> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let window = doc! { "$gte": format_date(window_start), "$lte": format_date(window_end) };

        vec![
            doc! { "$match": { "date": window } },
            doc! { "$group": { "_id": "$theme_id", "reservation_count": { "$sum": 1 } } },
            doc! { "$sort": { "reservation_count": -1, "_id": 1 } },
            doc! { "$limit": limit },
            doc! { "$lookup": {
                "from": COLLECTION,
                "localField": "_id",
                "foreignField": "_id",
                "as": "theme",
            }},
            doc! { "$unwind": "$theme" },
        ]
    }
}

#[async_trait]
impl ThemeStore for ThemeRepository {
    async fn find_all(&self) -> AppResult<Vec<Theme>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .build();

        let documents: Vec<ThemeDocument> = self.collection
            .find(doc! {})
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Theme::try_from).collect()
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Theme>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(Theme::try_from)
            .transpose()
    }

    async fn insert(&self, theme: &Theme) -> AppResult<Theme> {
        let id = self.sequence.next().await?;
        self.collection.insert_one(&ThemeDocument::from_theme(id, theme)).await?;

        Ok(theme.clone().assigned(id))
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count)
    }

    async fn restore(&self, theme: &Theme) -> AppResult<()> {
        let id = theme.id()
            .ok_or_else(|| AppError::InternalError("식별자가 없는 테마는 되돌릴 수 없습니다".to_string()))?;
        self.collection.insert_one(&ThemeDocument::from_theme(id, theme)).await?;

        Ok(())
    }

    async fn top_reserved_in_window(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        limit: usize,
    ) -> AppResult<Vec<ThemeRanking>> {
        if limit == 0 || window_start > window_end {
            return Ok(Vec::new());
        }

        let rows: Vec<Document> = self.reservations
            .aggregate(Self::ranking_pipeline(window_start, window_end, limit))
            .await?
            .try_collect()
            .await?;

        rows.into_iter()
            .map(|row| {
                let ranked: RankedThemeDocument = from_document(row)
                    .map_err(|e| AppError::DatabaseError(format!("랭킹 집계 결과 변환 실패: {}", e)))?;
                Ok(ThemeRanking {
                    theme: Theme::try_from(ranked.theme)?,
                    reservation_count: ranked.reservation_count.max(0) as u64,
                })
            })
            .collect()
    }
}


/// 랭킹 캐시가 등록되어 있으면 캐시 데코레이터로 감싸 등록합니다.
async fn register_theme_repository() -> AppResult<()> {
    let database = ServiceLocator::get::<Database>()?;
    let repository: Arc<dyn ThemeStore> = Arc::new(ThemeRepository::new(&database));

    let themes: Arc<dyn ThemeStore> = match ServiceLocator::port::<dyn HotThemeCache>() {
        Ok(cache) => Arc::new(CachedThemeStore::new(repository, cache)),
        Err(_) => repository,
    };

    ServiceLocator::set_port::<dyn ThemeStore>(themes);
    Ok(())
}

fn theme_repository_constructor() -> BoxFuture<'static, AppResult<()>> {
    Box::pin(register_theme_repository())
}

inventory::submit! {
    RepositoryRegistration {
        name: "theme_repository",
        constructor: theme_repository_constructor,
    }
}
