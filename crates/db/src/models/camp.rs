//! Camp entity and DTO.

use codecamp_core::types::{DbId, EventDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::talk::{Talk, TalkModel};

/// A camp row from the `camps` table.
///
/// `talks` is never read from the row itself; repositories populate it
/// only when talks were requested.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Camp {
    pub id: DbId,
    pub name: Option<String>,
    pub moniker: String,
    pub event_date: EventDate,
    pub length: i32,
    pub venue: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    #[sqlx(skip)]
    pub talks: Vec<Talk>,
}

/// Wire shape of a camp for request and response bodies.
///
/// Location fields are flattened with a `location` prefix. `talks` is
/// output-only: it is ignored when a `CampModel` is mapped onto an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampModel {
    #[serde(default)]
    pub name: Option<String>,
    pub moniker: String,
    pub event_date: EventDate,
    #[serde(default)]
    pub length: Option<i32>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub location_address1: Option<String>,
    #[serde(default)]
    pub location_address2: Option<String>,
    #[serde(default)]
    pub location_address3: Option<String>,
    #[serde(default)]
    pub location_city_town: Option<String>,
    #[serde(default)]
    pub location_state_province: Option<String>,
    #[serde(default)]
    pub location_postal_code: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,
    #[serde(default)]
    pub talks: Vec<TalkModel>,
}
