//! In-memory [`CampRepository`].
//!
//! Useful for development and for exercising the HTTP layer without a
//! database. Mirrors the PostgreSQL store's observable behaviour: ordering,
//! the unique moniker constraint, and talk cascade on delete.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use codecamp_core::types::{DbId, EventDate};
use tokio::sync::RwLock;

use super::{CampRepository, Change, ChangeSet};
use crate::models::camp::Camp;
use crate::DbError;

#[derive(Debug, Default)]
struct Store {
    next_id: DbId,
    camps: BTreeMap<DbId, Camp>,
}

impl Store {
    fn moniker_taken(&self, moniker: &str, except: Option<DbId>) -> bool {
        self.camps
            .values()
            .any(|c| c.moniker == moniker && Some(c.id) != except)
    }

    fn insert(&mut self, mut camp: Camp) -> DbId {
        self.next_id += 1;
        camp.id = self.next_id;
        self.camps.insert(camp.id, camp);
        self.next_id
    }
}

/// Thread-safe camp store backed by a `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCampRepo {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCampRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a camp (talks included) directly, bypassing the change set.
    ///
    /// Returns the assigned id.
    pub async fn seed(&self, camp: Camp) -> DbId {
        self.store.write().await.insert(camp)
    }

    /// Number of stored camps.
    pub async fn len(&self) -> usize {
        self.store.read().await.camps.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn project(camp: &Camp, include_talks: bool) -> Camp {
        let mut camp = camp.clone();
        if !include_talks {
            camp.talks.clear();
        }
        camp
    }

    /// Newest event date first, ties broken by newest id.
    fn sorted(mut camps: Vec<Camp>) -> Vec<Camp> {
        camps.sort_by(|a, b| b.event_date.cmp(&a.event_date).then(b.id.cmp(&a.id)));
        camps
    }
}

#[async_trait]
impl CampRepository for InMemoryCampRepo {
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DbError> {
        let store = self.store.read().await;
        let camps = store
            .camps
            .values()
            .map(|c| Self::project(c, include_talks))
            .collect();
        Ok(Self::sorted(camps))
    }

    async fn get_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, DbError> {
        let store = self.store.read().await;
        Ok(store
            .camps
            .values()
            .find(|c| c.moniker == moniker)
            .map(|c| Self::project(c, include_talks)))
    }

    async fn get_camps_by_event_date(
        &self,
        date: EventDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DbError> {
        let store = self.store.read().await;
        let camps = store
            .camps
            .values()
            .filter(|c| c.event_date == date)
            .map(|c| Self::project(c, include_talks))
            .collect();
        Ok(Self::sorted(camps))
    }

    async fn save_changes(&self, changes: ChangeSet) -> Result<bool, DbError> {
        let mut store = self.store.write().await;

        // Apply against a scratch copy so a rejected change leaves the
        // store untouched, like a rolled-back transaction.
        let mut scratch = Store {
            next_id: store.next_id,
            camps: store.camps.clone(),
        };
        let mut affected = 0u64;
        for change in changes.into_changes() {
            match change {
                Change::Add(camp) => {
                    if scratch.moniker_taken(&camp.moniker, None) {
                        return Err(DbError::Unavailable(format!(
                            "duplicate moniker '{}'",
                            camp.moniker
                        )));
                    }
                    scratch.insert(camp);
                    affected += 1;
                }
                Change::Modify(mut camp) => {
                    if scratch.moniker_taken(&camp.moniker, Some(camp.id)) {
                        return Err(DbError::Unavailable(format!(
                            "duplicate moniker '{}'",
                            camp.moniker
                        )));
                    }
                    if let Some(existing) = scratch.camps.get_mut(&camp.id) {
                        // Talks are not part of the camp row.
                        camp.talks = std::mem::take(&mut existing.talks);
                        *existing = camp;
                        affected += 1;
                    }
                }
                Change::Delete(camp) => {
                    if scratch.camps.remove(&camp.id).is_some() {
                        affected += 1;
                    }
                }
            }
        }
        *store = scratch;

        tracing::debug!(affected, "Saved camp changes");
        Ok(affected > 0)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
