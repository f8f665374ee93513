use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Append-only record of a single completion event. There is no update or
/// delete path; the task name is copied out because the task itself may be
/// gone by the time anyone reads this.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub name: String,
    pub difficulty: u32,
    pub completed_at: DateTime<Utc>,
}
