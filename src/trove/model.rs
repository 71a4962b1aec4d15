//! # Domain Model: Records and Validated Drafts
//!
//! This module defines the two core data structures: [`Record`] and
//! [`Draft`].
//!
//! ## Input Normalization
//!
//! Users submit titles and descriptions with stray whitespace. All input
//! passes through [`Draft::parse`], which trims both fields and refuses an
//! empty post-trim title. Holding a `Draft` therefore means holding input
//! that is safe to store; the repository never re-validates.
//!
//! ## Record Identity
//!
//! Ids are plain integers handed out by the repository's monotonic counter.
//! They are assigned once at creation and never change; updates replace
//! `title`/`description` in place.
//!
//! ## Legacy Data
//!
//! Snapshots written by earlier tooling carry only `id`, `title` and
//! `description`. A custom deserializer backfills the timestamps with the
//! Unix epoch so such snapshots still load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Custom deserializer to handle legacy snapshots where the timestamps are
// missing. If absent, both default to the Unix epoch.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = RecordHelper::deserialize(deserializer)?;

        let created_at = helper.created_at.unwrap_or(DateTime::UNIX_EPOCH);
        Ok(Record {
            id: helper.id,
            title: helper.title,
            description: helper.description,
            created_at,
            updated_at: helper.updated_at.unwrap_or(created_at),
        })
    }
}

#[derive(Deserialize)]
struct RecordHelper {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl Record {
    pub fn new(id: u64, draft: Draft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the record's fields with the draft's, bumping `updated_at`.
    /// Id and creation time are preserved.
    pub fn apply(&mut self, draft: Draft) {
        self.title = draft.title;
        self.description = draft.description;
        self.updated_at = Utc::now();
    }
}

/// Validated input for creating or updating a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    /// Trims both fields and returns `None` if the title is empty after
    /// trimming. This is the only data-integrity rule in the system and the
    /// single place it is enforced.
    pub fn parse(title: &str, description: &str) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
        })
    }
}
