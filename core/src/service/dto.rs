use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use crate::model::task::Task;

/// Task as presented to the UI: the entity plus its derived priority.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskDto {
    pub id: Uuid,
    pub name: String,
    pub half_life: f64,
    pub difficulty: u32,
    pub is_recurrent: bool,
    pub created_at: DateTime<Utc>,
    pub hashtag: Option<String>,

    // Derived 0-100 urgency score, computed at read time
    pub priority: f64,
}

impl TaskDto {
    pub fn from_entity(task: Task, priority: f64) -> Self {
        Self {
            id: task.id,
            name: task.name,
            half_life: task.half_life,
            difficulty: task.difficulty,
            is_recurrent: task.is_recurrent,
            created_at: task.created_at,
            hashtag: task.hashtag,
            priority,
        }
    }
}

/// One day of the trailing stats window. `day_name` is derived from the
/// date, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyStat {
    pub date: String,     // YYYY-MM-DD
    pub day_name: String, // Mon, Tue...
    pub total: u32,
}

impl DailyStat {
    pub fn for_date(date: NaiveDate, total: u32) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            day_name: date.format("%a").to_string(),
            total,
        }
    }
}
