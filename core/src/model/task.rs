use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

// Records predating the half_life field were weekly-ish chores; backfill
// with 7 days, not the 1-day default used for newly created tasks.
fn default_half_life() -> f64 {
    7.0
}

fn default_difficulty() -> u32 {
    1
}

/// A chore. Priority is derived from `created_at` and `half_life` at read
/// time and never persisted; see `service::task_service`.
///
/// The serde defaults on `half_life`, `difficulty` and `is_recurrent` are
/// deliberate: records written by older versions may lack these fields, and
/// decoding backfills them instead of failing. The backfilled value is
/// persisted the next time the record is rewritten.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub name: String,

    /// Days until the task's priority reaches 50. Clamped to >= 0.1 in the
    /// scoring path, not here, so the stored value stays what the user set.
    #[serde(default = "default_half_life")]
    pub half_life: f64,

    /// Stars awarded to the daily ledger on completion.
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,

    /// Recurrent tasks are reset (created_at = now) on completion instead
    /// of deleted, so their priority decay restarts from zero.
    #[serde(default)]
    pub is_recurrent: bool,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub hashtag: Option<String>,
}

impl Task {
    pub fn new(
        name: String,
        half_life: f64,
        difficulty: u32,
        is_recurrent: bool,
        hashtag: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            half_life,
            difficulty,
            is_recurrent,
            created_at: Utc::now(),
            hashtag,
        }
    }
}
