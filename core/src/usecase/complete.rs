use crate::model::history::HistoryEntry;
use crate::repository::traits::{HistoryRepository, StatsRepository, TaskRepository};
use crate::service::stats_service::StatsService;
use anyhow::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Task-completion lifecycle. One completion event fans out to three
/// collaborators in order: credit the daily star ledger, append a history
/// entry, then reset the task (recurrent) or delete it (one-shot).
///
/// The steps are not wrapped in a transaction; a failure mid-sequence can
/// leave the ledger credited without a history entry. The file store offers
/// no multi-collection transaction, and the sequence is short enough that
/// this stays acceptable for a single-user tracker.
pub struct CompleteTask<'a, T, S, H>
where
    T: TaskRepository,
    S: StatsRepository,
    H: HistoryRepository,
{
    tasks: &'a T,
    stats: &'a StatsService<S>,
    history: &'a H,
}

impl<'a, T, S, H> CompleteTask<'a, T, S, H>
where
    T: TaskRepository,
    S: StatsRepository,
    H: HistoryRepository,
{
    pub fn new(tasks: &'a T, stats: &'a StatsService<S>, history: &'a H) -> Self {
        Self {
            tasks,
            stats,
            history,
        }
    }

    pub fn complete(&self, id: &Uuid) -> Result<bool> {
        self.complete_at(id, Utc::now())
    }

    /// Returns Ok(false) when the task does not exist, which makes
    /// completing an already-completed one-shot task a harmless no-op.
    pub fn complete_at(&self, id: &Uuid, now: DateTime<Utc>) -> Result<bool> {
        let Some(mut task) = self.tasks.get(id)? else {
            return Ok(false);
        };

        // Decode defaults already backfill missing difficulty to 1; the
        // floor also covers a hand-edited zero.
        let difficulty = task.difficulty.max(1);

        self.stats.record_completion(now.date_naive(), difficulty)?;

        self.history.append(HistoryEntry {
            name: task.name.clone(),
            difficulty,
            completed_at: now,
        })?;

        if task.is_recurrent {
            // Same identity, same fields; only the decay clock restarts.
            task.created_at = now;
            self.tasks.update(&task)?;
        } else {
            self.tasks.delete(id)?;
        }

        Ok(true)
    }
}
