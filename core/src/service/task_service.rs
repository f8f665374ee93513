use crate::model::task::Task;
use crate::repository::traits::TaskRepository;
use crate::service::dto::TaskDto;
use anyhow::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

const MAX_PRIORITY: f64 = 100.0;
const MIN_HALF_LIFE_DAYS: f64 = 0.1;
// Below this exponent e^x underflows to 0 anyway; short-circuit instead of
// relying on float underflow.
const UNDERFLOW_EXPONENT: f64 = -700.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All tasks, highest urgency first, with the derived priority attached.
    pub fn list_tasks(&self) -> Result<Vec<TaskDto>> {
        let mut tasks = self.repo.list()?;
        let now = Utc::now();
        rank_tasks(&mut tasks, now);

        let dtos = tasks
            .into_iter()
            .map(|t| {
                let priority = priority_at(t.created_at, t.half_life, now);
                TaskDto::from_entity(t, priority)
            })
            .collect();
        Ok(dtos)
    }

    pub fn add_task(
        &self,
        name: String,
        half_life: f64,
        difficulty: u32,
        is_recurrent: bool,
        hashtag: Option<String>,
    ) -> Result<TaskDto> {
        let created = self
            .repo
            .create(Task::new(name, half_life, difficulty, is_recurrent, hashtag))?;
        // A task created this instant has decayed nothing yet.
        Ok(TaskDto::from_entity(created, 0.0))
    }

    /// Rewrites the user-editable fields. `created_at` is untouched so the
    /// decay clock keeps running. Returns false for an unknown id.
    pub fn update_task(
        &self,
        id: &Uuid,
        name: String,
        half_life: f64,
        difficulty: u32,
        is_recurrent: bool,
        hashtag: Option<String>,
    ) -> Result<bool> {
        let Some(mut task) = self.repo.get(id)? else {
            return Ok(false);
        };
        task.name = name;
        task.half_life = half_life;
        task.difficulty = difficulty;
        task.is_recurrent = is_recurrent;
        task.hashtag = hashtag;
        self.repo.update(&task)
    }

    pub fn delete_task(&self, id: &Uuid) -> Result<bool> {
        self.repo.delete(id)
    }
}

// Standalone functions for pure logic

/// Urgency of a task as of `now`, in [0, 100].
///
/// Exponential decay toward full urgency: 0 at creation, ~50 after one
/// half-life, asymptotically 100 as the task ages. A future-dated
/// `created_at` scores 0 rather than going negative.
pub fn priority_at(created_at: DateTime<Utc>, half_life: f64, now: DateTime<Utc>) -> f64 {
    let days_elapsed = (now - created_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
    if days_elapsed <= 0.0 {
        return 0.0;
    }

    let effective_half_life = half_life.max(MIN_HALF_LIFE_DAYS);
    let exponent = -days_elapsed * std::f64::consts::LN_2 / effective_half_life;
    if exponent < UNDERFLOW_EXPONENT {
        return MAX_PRIORITY;
    }

    MAX_PRIORITY * (1.0 - exponent.exp())
}

/// `priority_at` anchored to the wall clock.
pub fn calculate_priority(created_at: DateTime<Utc>, half_life: f64) -> f64 {
    priority_at(created_at, half_life, Utc::now())
}

/// Sorts by priority descending. Ties break on `created_at` ascending
/// (the task that has waited longer wins), then on id, so the ordering is
/// deterministic.
pub fn rank_tasks(tasks: &mut Vec<Task>, now: DateTime<Utc>) {
    tasks.sort_by(|a, b| {
        let score_a = priority_at(a.created_at, a.half_life, now);
        let score_b = priority_at(b.created_at, b.half_life, now);
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}
