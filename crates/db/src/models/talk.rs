//! Talk and speaker entities, the joined talk row, and their DTOs.

use codecamp_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A talk belonging to a camp.
#[derive(Debug, Clone, PartialEq)]
pub struct Talk {
    pub id: DbId,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    pub speaker: Option<Speaker>,
}

/// A speaker row from the `speakers` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Speaker {
    pub id: DbId,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

/// A `talks` row left-joined with its speaker.
///
/// Speaker columns are all `NULL` when the talk has no speaker.
#[derive(Debug, Clone, FromRow)]
pub struct TalkRow {
    pub id: DbId,
    pub camp_id: DbId,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    pub speaker_id: Option<DbId>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl From<TalkRow> for Talk {
    fn from(row: TalkRow) -> Self {
        let speaker = row.speaker_id.map(|id| Speaker {
            id,
            first_name: row.first_name.unwrap_or_default(),
            middle_name: row.middle_name,
            last_name: row.last_name.unwrap_or_default(),
            company: row.company,
            company_url: row.company_url,
            blog_url: row.blog_url,
            twitter: row.twitter,
            github: row.github,
        });
        Talk {
            id: row.id,
            title: row.title,
            abstract_text: row.abstract_text,
            level: row.level,
            speaker,
        }
    }
}

/// Wire shape of a talk nested inside a camp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkModel {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub level: i32,
    #[serde(default)]
    pub speaker: Option<SpeakerModel>,
}

/// Wire shape of a talk's speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerModel {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub blog_url: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default, rename = "gitHub")]
    pub github: Option<String>,
}
