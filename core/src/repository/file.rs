use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json;
use uuid::Uuid;

use crate::model::history::HistoryEntry;
use crate::model::shopping::ShoppingItem;
use crate::model::stats::StarBucket;
use crate::model::task::Task;
use crate::repository::traits::{
    HistoryRepository, ShoppingRepository, StatsRepository, TaskRepository,
};

const TASKS_FILE: &str = "tasks.json";
const STATS_FILE: &str = "daily_stats.json";
const HISTORY_FILE: &str = "history.json";
const SHOPPING_FILE: &str = "shopping_list.json";

/// Document store backed by one JSON file per collection under a single
/// data directory. Clones share the same directory and the same stats lock,
/// so every service can own a handle.
#[derive(Clone)]
pub struct FileStore {
    base_dir: PathBuf,
    // Serializes add_stars across cloned handles. The other collections get
    // by with last-write-wins; the ledger is the one accumulator where a
    // racing read-modify-write would drop stars.
    stats_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn open(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".minuit")
            }
        };
        fs::create_dir_all(&path)?;

        let store = FileStore {
            base_dir: path,
            stats_lock: Arc::new(Mutex::new(())),
        };
        for name in [TASKS_FILE, STATS_FILE, HISTORY_FILE, SHOPPING_FILE] {
            store.ensure_collection(name)?;
        }
        Ok(store)
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn ensure_collection(&self, name: &str) -> Result<()> {
        let path = self.collection_path(name);
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<serde_json::Value>::new())?;
            writer.flush()?;
        }
        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let file = File::open(self.collection_path(name))?;
        let reader = BufReader::new(file);
        let items = serde_json::from_reader(reader)?;
        Ok(items)
    }

    fn write_collection<T: Serialize>(&self, name: &str, items: &[T]) -> Result<()> {
        let file = File::create(self.collection_path(name))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, items)?;
        writer.flush()?;
        Ok(())
    }
}

impl TaskRepository for FileStore {
    fn create(&self, task: Task) -> Result<Task> {
        let mut tasks: Vec<Task> = self.read_collection(TASKS_FILE)?;
        tasks.push(task.clone());
        self.write_collection(TASKS_FILE, &tasks)?;
        Ok(task)
    }

    fn list(&self) -> Result<Vec<Task>> {
        self.read_collection(TASKS_FILE)
    }

    fn get(&self, id: &Uuid) -> Result<Option<Task>> {
        let tasks: Vec<Task> = self.read_collection(TASKS_FILE)?;
        Ok(tasks.into_iter().find(|t| t.id == *id))
    }

    fn update(&self, task: &Task) -> Result<bool> {
        let mut tasks: Vec<Task> = self.read_collection(TASKS_FILE)?;
        if let Some(pos) = tasks.iter().position(|t| t.id == task.id) {
            tasks[pos] = task.clone();
            self.write_collection(TASKS_FILE, &tasks)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn delete(&self, id: &Uuid) -> Result<bool> {
        let mut tasks: Vec<Task> = self.read_collection(TASKS_FILE)?;
        let initial_len = tasks.len();
        tasks.retain(|t| t.id != *id);
        if tasks.len() == initial_len {
            return Ok(false);
        }
        self.write_collection(TASKS_FILE, &tasks)?;
        Ok(true)
    }
}

impl StatsRepository for FileStore {
    fn add_stars(&self, date: NaiveDate, delta: u32) -> Result<()> {
        let _guard = self
            .stats_lock
            .lock()
            .map_err(|_| anyhow!("stats lock poisoned"))?;

        let mut buckets: Vec<StarBucket> = self.read_collection(STATS_FILE)?;
        if let Some(bucket) = buckets.iter_mut().find(|b| b.date == date) {
            bucket.total_stars += delta;
        } else {
            buckets.push(StarBucket::new(date, delta));
        }
        self.write_collection(STATS_FILE, &buckets)?;
        Ok(())
    }

    fn stars_on(&self, date: NaiveDate) -> Result<u32> {
        let buckets: Vec<StarBucket> = self.read_collection(STATS_FILE)?;
        Ok(buckets
            .iter()
            .find(|b| b.date == date)
            .map(|b| b.total_stars)
            .unwrap_or(0))
    }
}

impl HistoryRepository for FileStore {
    fn append(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries: Vec<HistoryEntry> = self.read_collection(HISTORY_FILE)?;
        entries.push(entry);
        self.write_collection(HISTORY_FILE, &entries)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        self.read_collection(HISTORY_FILE)
    }
}

impl ShoppingRepository for FileStore {
    fn create(&self, item: ShoppingItem) -> Result<ShoppingItem> {
        let mut items: Vec<ShoppingItem> = self.read_collection(SHOPPING_FILE)?;
        items.push(item.clone());
        self.write_collection(SHOPPING_FILE, &items)?;
        Ok(item)
    }

    fn list(&self) -> Result<Vec<ShoppingItem>> {
        self.read_collection(SHOPPING_FILE)
    }

    fn update(&self, item: &ShoppingItem) -> Result<bool> {
        let mut items: Vec<ShoppingItem> = self.read_collection(SHOPPING_FILE)?;
        if let Some(pos) = items.iter().position(|i| i.id == item.id) {
            items[pos] = item.clone();
            self.write_collection(SHOPPING_FILE, &items)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn delete(&self, id: &Uuid) -> Result<bool> {
        let mut items: Vec<ShoppingItem> = self.read_collection(SHOPPING_FILE)?;
        let initial_len = items.len();
        items.retain(|i| i.id != *id);
        if items.len() == initial_len {
            return Ok(false);
        }
        self.write_collection(SHOPPING_FILE, &items)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn temp_store() -> (FileStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("minuit-test-{}", Uuid::new_v4()));
        let store = FileStore::open(Some(dir.clone())).unwrap();
        (store, dir)
    }

    #[test]
    fn test_task_roundtrip_and_delete() {
        let (store, dir) = temp_store();

        let task = Task::new("vacuum".to_string(), 2.0, 3, true, None);
        let id = task.id;
        TaskRepository::create(&store, task).unwrap();

        let fetched = TaskRepository::get(&store, &id).unwrap().unwrap();
        assert_eq!(fetched.name, "vacuum");
        assert_eq!(fetched.difficulty, 3);

        assert!(TaskRepository::delete(&store, &id).unwrap());
        assert!(!TaskRepository::delete(&store, &id).unwrap());
        assert!(TaskRepository::get(&store, &id).unwrap().is_none());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_add_stars_accumulates_per_date() {
        let (store, dir) = temp_store();
        let today = Utc::now().date_naive();

        store.add_stars(today, 2).unwrap();
        store.add_stars(today, 3).unwrap();
        assert_eq!(store.stars_on(today).unwrap(), 5);

        let other = today.pred_opt().unwrap();
        assert_eq!(store.stars_on(other).unwrap(), 0);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_update_missing_task_reports_false() {
        let (store, dir) = temp_store();

        let task = Task::new("ghost".to_string(), 1.0, 1, false, None);
        assert!(!TaskRepository::update(&store, &task).unwrap());

        fs::remove_dir_all(dir).unwrap();
    }
}
