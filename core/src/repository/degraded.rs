use anyhow::Result;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::history::HistoryEntry;
use crate::model::shopping::ShoppingItem;
use crate::model::task::Task;
use crate::repository::traits::{
    HistoryRepository, ShoppingRepository, StatsRepository, TaskRepository,
};

/// Fallback store used when the real one cannot be opened. Reads come back
/// empty and writes are accepted and dropped, so the process keeps serving
/// instead of aborting at startup.
#[derive(Clone, Copy, Default)]
pub struct DegradedStore;

impl TaskRepository for DegradedStore {
    fn create(&self, task: Task) -> Result<Task> {
        Ok(task)
    }

    fn list(&self) -> Result<Vec<Task>> {
        Ok(Vec::new())
    }

    fn get(&self, _id: &Uuid) -> Result<Option<Task>> {
        Ok(None)
    }

    fn update(&self, _task: &Task) -> Result<bool> {
        Ok(false)
    }

    fn delete(&self, _id: &Uuid) -> Result<bool> {
        Ok(false)
    }
}

impl StatsRepository for DegradedStore {
    fn add_stars(&self, _date: NaiveDate, _delta: u32) -> Result<()> {
        Ok(())
    }

    fn stars_on(&self, _date: NaiveDate) -> Result<u32> {
        Ok(0)
    }
}

impl HistoryRepository for DegradedStore {
    fn append(&self, _entry: HistoryEntry) -> Result<()> {
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        Ok(Vec::new())
    }
}

impl ShoppingRepository for DegradedStore {
    fn create(&self, item: ShoppingItem) -> Result<ShoppingItem> {
        Ok(item)
    }

    fn list(&self) -> Result<Vec<ShoppingItem>> {
        Ok(Vec::new())
    }

    fn update(&self, _item: &ShoppingItem) -> Result<bool> {
        Ok(false)
    }

    fn delete(&self, _id: &Uuid) -> Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use chrono::Utc;

    #[test]
    fn test_reads_come_back_empty() {
        let store = DegradedStore;
        assert!(TaskRepository::list(&store).unwrap().is_empty());
        assert!(ShoppingRepository::list(&store).unwrap().is_empty());
        assert!(HistoryRepository::list(&store).unwrap().is_empty());
        assert_eq!(store.stars_on(Utc::now().date_naive()).unwrap(), 0);
        assert!(TaskRepository::get(&store, &Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_writes_are_accepted_and_dropped() {
        let store = DegradedStore;
        let now = Utc::now();

        let task = Task::new("into the void".to_string(), 1.0, 1, false, None);
        let id = task.id;
        assert!(TaskRepository::create(&store, task).is_ok());
        assert!(TaskRepository::get(&store, &id).unwrap().is_none());

        assert!(store.add_stars(now.date_naive(), 5).is_ok());
        assert_eq!(store.stars_on(now.date_naive()).unwrap(), 0);

        assert!(store
            .append(HistoryEntry {
                name: "into the void".to_string(),
                difficulty: 1,
                completed_at: now,
            })
            .is_ok());
        assert!(HistoryRepository::list(&store).unwrap().is_empty());

        let item = ShoppingRepository::create(&store, ShoppingItem::new("milk".to_string()));
        assert!(item.is_ok());
        assert!(ShoppingRepository::list(&store).unwrap().is_empty());
    }

    #[test]
    fn test_targeted_mutations_report_not_found() {
        let store = DegradedStore;
        let task = Task::new("ghost".to_string(), 1.0, 1, false, None);
        assert!(!TaskRepository::update(&store, &task).unwrap());
        assert!(!TaskRepository::delete(&store, &Uuid::new_v4()).unwrap());
        assert!(!ShoppingRepository::update(&store, &ShoppingItem::new("ghost".to_string())).unwrap());
        assert!(!ShoppingRepository::delete(&store, &Uuid::new_v4()).unwrap());
    }
}
