//! 테스트용 인메모리 저장소
//!
//! 네 개의 포트를 하나의 잠금 아래에서 구현합니다. MongoDB 어댑터와
//! 같은 유일성 규칙을 지킵니다.
//!
//! - 예약: (date, time_id, theme_id) 슬롯 중복 시 `UniquenessViolation`
//! - 예약 시간: 같은 시작 시각 중복 시 `ConflictError`
//! - 회원: 같은 이메일 중복 시 `ConflictError`
//!
//! 주간 인기 테마 캐시 대역인 [`InMemoryHotThemeCache`]와 동시 삭제/예약
//! 경합을 재현하는 래퍼([`StaleReferenceCheck`], [`ThemeDeletedAfterLookup`])도
//! 함께 제공합니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::caching::hot_themes::{CachedRanking, HotThemeCache};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{EntityId, Member, Reservation, ReservationTime, Theme};
use crate::domain::values::{Email, UserName};
use crate::repositories::ports::{
    InsertOutcome, MemberStore, ReservationStore, ThemeRanking, ThemeStore, TimeCatalog,
};

#[derive(Default)]
struct State {
    next_id: EntityId,
    times: BTreeMap<EntityId, ReservationTime>,
    themes: BTreeMap<EntityId, Theme>,
    members: BTreeMap<EntityId, Member>,
    reservations: BTreeMap<EntityId, Reservation>,
}

impl State {
    fn issue_id(&mut self) -> EntityId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> AppResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| AppError::InternalError("인메모리 저장소 잠금 실패".to_string()))
    }

    pub async fn seed_time(&self, hour: u32, minute: u32) -> ReservationTime {
        let start_at = chrono::NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        TimeCatalog::insert(self, &ReservationTime::new(start_at)).await.unwrap()
    }

    pub async fn seed_theme(&self, name: &str) -> Theme {
        let theme = Theme::new(name, &format!("{} 설명", name), "https://example.com/thumbnail.png").unwrap();
        ThemeStore::insert(self, &theme).await.unwrap()
    }

    pub async fn seed_member(&self, name: &str, email: &str) -> Member {
        let member = Member::new(
            UserName::new(name).unwrap(),
            Email::new(email).unwrap(),
            "hashed".to_string(),
        );
        MemberStore::insert(self, &member).await.unwrap()
    }

    /// 서비스를 거치지 않고 예약을 저장합니다.
    pub async fn seed_reservation(
        &self,
        date: NaiveDate,
        time: &ReservationTime,
        theme: &Theme,
        member: &Member,
    ) -> Reservation {
        let candidate = Reservation::new(date, time.clone(), theme.clone(), member.clone()).unwrap();
        match ReservationStore::insert(self, &candidate).await.unwrap() {
            InsertOutcome::Inserted(saved) => saved,
            InsertOutcome::UniquenessViolation => panic!("seed slot already booked"),
        }
    }

    pub fn reservation_count(&self) -> usize {
        self.state().map(|state| state.reservations.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TimeCatalog for InMemoryStore {
    async fn load_all(&self) -> AppResult<Vec<ReservationTime>> {
        let mut times: Vec<ReservationTime> = self.state()?.times.values().cloned().collect();
        times.sort_by_key(|time| time.start_at());
        Ok(times)
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<ReservationTime>> {
        Ok(self.state()?.times.get(&id).cloned())
    }

    async fn insert(&self, time: &ReservationTime) -> AppResult<ReservationTime> {
        let mut state = self.state()?;
        if state.times.values().any(|existing| existing.start_at() == time.start_at()) {
            return Err(AppError::ConflictError(format!(
                "{}은 이미 등록된 예약 시간입니다.",
                time.start_at().format("%H:%M")
            )));
        }

        let id = state.issue_id();
        let saved = time.clone().assigned(id);
        state.times.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        Ok(self.state()?.times.remove(&id).map_or(0, |_| 1))
    }

    async fn restore(&self, time: &ReservationTime) -> AppResult<()> {
        let id = time.id()
            .ok_or_else(|| AppError::InternalError("식별자가 없는 예약 시간은 되돌릴 수 없습니다".to_string()))?;
        self.state()?.times.insert(id, time.clone());
        Ok(())
    }
}

#[async_trait]
impl ThemeStore for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Theme>> {
        Ok(self.state()?.themes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Theme>> {
        Ok(self.state()?.themes.get(&id).cloned())
    }

    async fn insert(&self, theme: &Theme) -> AppResult<Theme> {
        let mut state = self.state()?;
        let id = state.issue_id();
        let saved = theme.clone().assigned(id);
        state.themes.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        Ok(self.state()?.themes.remove(&id).map_or(0, |_| 1))
    }

    async fn restore(&self, theme: &Theme) -> AppResult<()> {
        let id = theme.id()
            .ok_or_else(|| AppError::InternalError("식별자가 없는 테마는 되돌릴 수 없습니다".to_string()))?;
        self.state()?.themes.insert(id, theme.clone());
        Ok(())
    }

    async fn top_reserved_in_window(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        limit: usize,
    ) -> AppResult<Vec<ThemeRanking>> {
        let state = self.state()?;

        let mut counts: BTreeMap<EntityId, u64> = BTreeMap::new();
        for reservation in state.reservations.values() {
            let date = reservation.date();
            if date < window_start || date > window_end {
                continue;
            }
            if let Some(theme_id) = reservation.theme().id() {
                *counts.entry(theme_id).or_default() += 1;
            }
        }

        let mut rankings: Vec<ThemeRanking> = counts
            .into_iter()
            .filter_map(|(theme_id, reservation_count)| {
                state.themes.get(&theme_id).map(|theme| ThemeRanking {
                    theme: theme.clone(),
                    reservation_count,
                })
            })
            .collect();

        rankings.sort_by(|a, b| {
            b.reservation_count
                .cmp(&a.reservation_count)
                .then_with(|| a.theme.id().cmp(&b.theme.id()))
        });
        rankings.truncate(limit);

        Ok(rankings)
    }
}

#[async_trait]
impl MemberStore for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Member>> {
        Ok(self.state()?.members.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Member>> {
        Ok(self.state()?.members.get(&id).cloned())
    }

    async fn insert(&self, member: &Member) -> AppResult<Member> {
        let mut state = self.state()?;
        if state.members.values().any(|existing| existing.email() == member.email()) {
            return Err(AppError::ConflictError(format!(
                "{}은 이미 가입된 이메일입니다.",
                member.email()
            )));
        }

        let id = state.issue_id();
        let saved = member.clone().assigned(id);
        state.members.insert(id, saved.clone());
        Ok(saved)
    }
}

#[async_trait]
impl ReservationStore for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.state()?.reservations.values().cloned().collect())
    }

    async fn find_by_date_and_theme(&self, date: NaiveDate, theme_id: EntityId) -> AppResult<Vec<Reservation>> {
        Ok(self.state()?
            .reservations
            .values()
            .filter(|reservation| reservation.date() == date && reservation.theme().id() == Some(theme_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, candidate: &Reservation) -> AppResult<InsertOutcome> {
        let slot = candidate.slot()
            .ok_or_else(|| AppError::InternalError("식별자가 없는 참조를 가진 예약은 저장할 수 없습니다".to_string()))?;

        // 확인과 삽입을 같은 잠금 안에서 수행
        let mut state = self.state()?;
        if state.reservations.values().any(|existing| existing.slot() == Some(slot)) {
            return Ok(InsertOutcome::UniquenessViolation);
        }

        let id = state.issue_id();
        let saved = candidate.clone().assigned(id);
        state.reservations.insert(id, saved.clone());
        Ok(InsertOutcome::Inserted(saved))
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        Ok(self.state()?.reservations.remove(&id).map_or(0, |_| 1))
    }

    async fn exists_by_time_id(&self, time_id: EntityId) -> AppResult<bool> {
        Ok(self.state()?
            .reservations
            .values()
            .any(|reservation| reservation.time().id() == Some(time_id)))
    }

    async fn exists_by_theme_id(&self, theme_id: EntityId) -> AppResult<bool> {
        Ok(self.state()?
            .reservations
            .values()
            .any(|reservation| reservation.theme().id() == Some(theme_id)))
    }
}

/// 키-값 맵 위의 랭킹 캐시 (TTL 없음)
#[derive(Default)]
pub struct InMemoryHotThemeCache {
    entries: Mutex<HashMap<String, Vec<CachedRanking>>>,
}

impl InMemoryHotThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> AppResult<MutexGuard<'_, HashMap<String, Vec<CachedRanking>>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::RedisError("인메모리 캐시 잠금 실패".to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries().map(|entries| entries.len()).unwrap_or_default()
    }
}

#[async_trait]
impl HotThemeCache for InMemoryHotThemeCache {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<CachedRanking>>> {
        Ok(self.entries()?.get(key).cloned())
    }

    async fn put(&self, key: &str, rankings: &[CachedRanking]) -> AppResult<()> {
        self.entries()?.insert(key.to_string(), rankings.to_vec());
        Ok(())
    }

    async fn invalidate_all(&self) -> AppResult<usize> {
        let mut entries = self.entries()?;
        let count = entries.len();
        entries.clear();
        Ok(count)
    }
}

/// 첫 번째 참조 확인에만 "참조 없음"으로 답하는 예약 저장소
///
/// 삭제 전 참조 확인과 실제 삭제 사이에 예약이 끼어든 상황을 재현합니다.
pub struct StaleReferenceCheck {
    inner: Arc<InMemoryStore>,
    answered: AtomicBool,
}

impl StaleReferenceCheck {
    pub fn new(inner: Arc<InMemoryStore>) -> Self {
        Self { inner, answered: AtomicBool::new(false) }
    }

    fn first_check(&self) -> bool {
        !self.answered.swap(true, Ordering::SeqCst)
    }
}

#[async_trait]
impl ReservationStore for StaleReferenceCheck {
    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        ReservationStore::find_all(self.inner.as_ref()).await
    }

    async fn find_by_date_and_theme(&self, date: NaiveDate, theme_id: EntityId) -> AppResult<Vec<Reservation>> {
        self.inner.find_by_date_and_theme(date, theme_id).await
    }

    async fn insert(&self, candidate: &Reservation) -> AppResult<InsertOutcome> {
        ReservationStore::insert(self.inner.as_ref(), candidate).await
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        ReservationStore::delete_by_id(self.inner.as_ref(), id).await
    }

    async fn exists_by_time_id(&self, time_id: EntityId) -> AppResult<bool> {
        if self.first_check() {
            return Ok(false);
        }
        self.inner.exists_by_time_id(time_id).await
    }

    async fn exists_by_theme_id(&self, theme_id: EntityId) -> AppResult<bool> {
        if self.first_check() {
            return Ok(false);
        }
        self.inner.exists_by_theme_id(theme_id).await
    }
}

/// 첫 조회 직후 테마가 삭제된 것처럼 동작하는 테마 저장소
///
/// 예약 생성이 테마를 확인한 뒤 저장하기 전에 테마가 삭제된 상황을 재현합니다.
pub struct ThemeDeletedAfterLookup {
    inner: Arc<InMemoryStore>,
    looked_up: AtomicBool,
}

impl ThemeDeletedAfterLookup {
    pub fn new(inner: Arc<InMemoryStore>) -> Self {
        Self { inner, looked_up: AtomicBool::new(false) }
    }
}

#[async_trait]
impl ThemeStore for ThemeDeletedAfterLookup {
    async fn find_all(&self) -> AppResult<Vec<Theme>> {
        ThemeStore::find_all(self.inner.as_ref()).await
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Theme>> {
        let found = ThemeStore::find_by_id(self.inner.as_ref(), id).await?;
        if self.looked_up.swap(true, Ordering::SeqCst) {
            ThemeStore::delete_by_id(self.inner.as_ref(), id).await?;
            return Ok(None);
        }
        Ok(found)
    }

    async fn insert(&self, theme: &Theme) -> AppResult<Theme> {
        ThemeStore::insert(self.inner.as_ref(), theme).await
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<u64> {
        ThemeStore::delete_by_id(self.inner.as_ref(), id).await
    }

    async fn restore(&self, theme: &Theme) -> AppResult<()> {
        ThemeStore::restore(self.inner.as_ref(), theme).await
    }

    async fn top_reserved_in_window(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        limit: usize,
    ) -> AppResult<Vec<ThemeRanking>> {
        self.inner.top_reserved_in_window(window_start, window_end, limit).await
    }
}
