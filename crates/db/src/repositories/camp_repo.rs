//! PostgreSQL-backed [`CampRepository`].

use std::collections::HashMap;

use async_trait::async_trait;
use codecamp_core::types::{DbId, EventDate};
use sqlx::{PgConnection, PgPool};

use super::{CampRepository, Change, ChangeSet};
use crate::models::camp::Camp;
use crate::models::talk::{Talk, TalkRow};
use crate::DbError;

/// Column list shared across camp queries to avoid repetition.
const COLUMNS: &str = "id, name, moniker, event_date, length, venue, address1, address2, \
     address3, city_town, state_province, postal_code, country";

/// Talk columns joined with their (optional) speaker.
const TALK_COLUMNS: &str = "t.id, t.camp_id, t.title, t.abstract_text, t.level, \
     s.id AS speaker_id, s.first_name, s.middle_name, s.last_name, s.company, \
     s.company_url, s.blog_url, s.twitter, s.github";

/// Camp repository over a shared connection pool.
#[derive(Debug, Clone)]
pub struct PgCampRepo {
    pool: PgPool,
}

impl PgCampRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the talks of every camp in `camps` and attach them in place.
    async fn attach_talks(&self, camps: &mut [Camp]) -> Result<(), sqlx::Error> {
        if camps.is_empty() {
            return Ok(());
        }
        let ids: Vec<DbId> = camps.iter().map(|c| c.id).collect();
        let query = format!(
            "SELECT {TALK_COLUMNS}
             FROM talks t
             LEFT JOIN speakers s ON s.id = t.speaker_id
             WHERE t.camp_id = ANY($1)
             ORDER BY t.id"
        );
        let rows = sqlx::query_as::<_, TalkRow>(&query)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await?;

        let mut by_camp: HashMap<DbId, Vec<Talk>> = HashMap::new();
        for row in rows {
            by_camp.entry(row.camp_id).or_default().push(Talk::from(row));
        }
        for camp in camps.iter_mut() {
            camp.talks = by_camp.remove(&camp.id).unwrap_or_default();
        }
        Ok(())
    }
}

#[async_trait]
impl CampRepository for PgCampRepo {
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM camps ORDER BY event_date DESC, id DESC");
        let mut camps = sqlx::query_as::<_, Camp>(&query)
            .fetch_all(&self.pool)
            .await?;
        if include_talks {
            self.attach_talks(&mut camps).await?;
        }
        Ok(camps)
    }

    async fn get_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM camps WHERE moniker = $1");
        let camp = sqlx::query_as::<_, Camp>(&query)
            .bind(moniker)
            .fetch_optional(&self.pool)
            .await?;
        match camp {
            Some(camp) if include_talks => {
                let mut camps = [camp];
                self.attach_talks(&mut camps).await?;
                let [camp] = camps;
                Ok(Some(camp))
            }
            other => Ok(other),
        }
    }

    async fn get_camps_by_event_date(
        &self,
        date: EventDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM camps WHERE event_date = $1 ORDER BY event_date DESC, id DESC"
        );
        let mut camps = sqlx::query_as::<_, Camp>(&query)
            .bind(date)
            .fetch_all(&self.pool)
            .await?;
        if include_talks {
            self.attach_talks(&mut camps).await?;
        }
        Ok(camps)
    }

    async fn save_changes(&self, changes: ChangeSet) -> Result<bool, DbError> {
        if changes.is_empty() {
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;
        let mut affected = 0u64;
        for change in changes.into_changes() {
            affected += match change {
                Change::Add(camp) => insert_camp(&mut *tx, &camp).await?,
                Change::Modify(camp) => update_camp(&mut *tx, &camp).await?,
                Change::Delete(camp) => delete_camp(&mut *tx, camp.id).await?,
            };
        }
        tx.commit().await?;

        tracing::debug!(affected, "Saved camp changes");
        Ok(affected > 0)
    }

    async fn ping(&self) -> Result<(), DbError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

async fn insert_camp(conn: &mut PgConnection, camp: &Camp) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO camps (name, moniker, event_date, length, venue, address1, address2,
                            address3, city_town, state_province, postal_code, country)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
    )
    .bind(&camp.name)
    .bind(&camp.moniker)
    .bind(camp.event_date)
    .bind(camp.length)
    .bind(&camp.venue)
    .bind(&camp.address1)
    .bind(&camp.address2)
    .bind(&camp.address3)
    .bind(&camp.city_town)
    .bind(&camp.state_province)
    .bind(&camp.postal_code)
    .bind(&camp.country)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

async fn update_camp(conn: &mut PgConnection, camp: &Camp) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE camps SET
            name = $2,
            moniker = $3,
            event_date = $4,
            length = $5,
            venue = $6,
            address1 = $7,
            address2 = $8,
            address3 = $9,
            city_town = $10,
            state_province = $11,
            postal_code = $12,
            country = $13
         WHERE id = $1",
    )
    .bind(camp.id)
    .bind(&camp.name)
    .bind(&camp.moniker)
    .bind(camp.event_date)
    .bind(camp.length)
    .bind(&camp.venue)
    .bind(&camp.address1)
    .bind(&camp.address2)
    .bind(&camp.address3)
    .bind(&camp.city_town)
    .bind(&camp.state_province)
    .bind(&camp.postal_code)
    .bind(&camp.country)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// Talks go with the camp through `ON DELETE CASCADE`.
async fn delete_camp(conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM camps WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
