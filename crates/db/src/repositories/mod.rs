//! Repository layer.
//!
//! [`CampRepository`] is the port the API handlers depend on. Reads are
//! immediate; writes are staged in a [`ChangeSet`] and applied together by
//! [`CampRepository::save_changes`].

use async_trait::async_trait;
use codecamp_core::types::EventDate;

use crate::models::camp::Camp;
use crate::DbError;

pub mod camp_repo;
pub mod change_set;
pub mod in_memory;

pub use camp_repo::PgCampRepo;
pub use change_set::{Change, ChangeSet};
pub use in_memory::InMemoryCampRepo;

/// Async access to the camp store.
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// All camps, newest event date first.
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DbError>;

    /// The camp with the given moniker, if any.
    async fn get_camp(&self, moniker: &str, include_talks: bool)
        -> Result<Option<Camp>, DbError>;

    /// Camps whose event date falls on `date`.
    async fn get_camps_by_event_date(
        &self,
        date: EventDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DbError>;

    /// Apply every staged change as one unit.
    ///
    /// Returns `true` if at least one row was affected.
    async fn save_changes(&self, changes: ChangeSet) -> Result<bool, DbError>;

    /// Verify the underlying store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
