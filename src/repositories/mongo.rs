//! MongoDB 어댑터 공통 기능
//!
//! - 컬렉션별 숫자 식별자 시퀀스 (`counters` 컬렉션)
//! - 중복 키(11000) 에러 판별

use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::EntityId;

pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 쓰기 에러가 유니크 인덱스 위반인지 확인합니다.
pub fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// `counters` 컬렉션 기반 식별자 발급기
///
/// 컬렉션 이름마다 `{ _id: <name>, seq: <i64> }` 문서를 두고 `$inc`
/// upsert로 원자적으로 증가시킵니다. 발급되는 값은 1부터 시작합니다.
#[derive(Clone)]
pub struct IdSequence {
    counters: Collection<Document>,
    name: &'static str,
}

impl IdSequence {
    pub fn new(database: &Database, name: &'static str) -> Self {
        Self {
            counters: database.collection::<Document>("counters"),
            name,
        }
    }

    pub async fn next(&self) -> AppResult<EntityId> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.counters
            .find_one_and_update(
                doc! { "_id": self.name },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError(format!("{} 시퀀스를 발급하지 못했습니다", self.name)))?;

        counter.get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("{} 시퀀스 형식 오류: {}", self.name, e)))
    }
}
