use crate::model::history::HistoryEntry;
use crate::model::shopping::ShoppingItem;
use crate::model::task::Task;
use anyhow::Result;
use chrono::NaiveDate;
use uuid::Uuid;

/// A missing id is a benign condition everywhere in these traits: lookups
/// return `Option`, mutations return `false`. `Err` is reserved for the
/// store itself misbehaving (I/O, corrupt JSON).
pub trait TaskRepository {
    fn create(&self, task: Task) -> Result<Task>;
    fn list(&self) -> Result<Vec<Task>>;
    fn get(&self, id: &Uuid) -> Result<Option<Task>>;
    fn update(&self, task: &Task) -> Result<bool>;
    fn delete(&self, id: &Uuid) -> Result<bool>;
}

pub trait StatsRepository {
    /// Adds `delta` stars to the bucket for `date`, creating the bucket if
    /// absent. This is the store's atomic-increment primitive: concurrent
    /// calls for the same date must not lose stars, so callers never do a
    /// read-then-write themselves.
    fn add_stars(&self, date: NaiveDate, delta: u32) -> Result<()>;

    /// Stars recorded for `date`; 0 when no bucket exists.
    fn stars_on(&self, date: NaiveDate) -> Result<u32>;
}

pub trait HistoryRepository {
    fn append(&self, entry: HistoryEntry) -> Result<()>;
    fn list(&self) -> Result<Vec<HistoryEntry>>;
}

pub trait ShoppingRepository {
    fn create(&self, item: ShoppingItem) -> Result<ShoppingItem>;
    fn list(&self) -> Result<Vec<ShoppingItem>>;
    fn update(&self, item: &ShoppingItem) -> Result<bool>;
    fn delete(&self, id: &Uuid) -> Result<bool>;
}
