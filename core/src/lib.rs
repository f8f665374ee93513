pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use model::history::HistoryEntry;
pub use model::shopping::ShoppingItem;
pub use model::stats::StarBucket;
pub use model::task::Task;
pub use repository::{
    DegradedStore, FileStore, HistoryRepository, ShoppingRepository, StatsRepository,
    TaskRepository,
};
pub use service::dto::{DailyStat, TaskDto};
pub use service::shopping_service::{ShoppingService, RETENTION_HOURS};
pub use service::stats_service::{StatsService, DEFAULT_WINDOW_DAYS};
pub use service::task_service::{calculate_priority, priority_at, rank_tasks, TaskService};
pub use usecase::complete::CompleteTask;
