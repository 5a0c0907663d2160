//! Row models for the Ludex API and push feeds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A game row as served by `/api/games`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRow {
    pub id: u64,
    pub name: String,
    pub genre: String,
    pub year: u16,
    #[serde(default)]
    pub rating: Option<f32>,
}

/// A bundle row. New bundles are also pushed over the `bundles` topic,
/// with the row itself as the envelope payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleRow {
    pub id: u64,
    pub name: String,
    pub game_count: u32,
    pub added_at: DateTime<Utc>,
}

/// A processing-queue row. The `queues` topic pushes bare queue ids
/// meaning "this queue changed, refetch it".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueRow {
    pub id: u64,
    pub name: String,
    pub pending: u32,
    pub updated_at: DateTime<Utc>,
}
