pub mod degraded;
pub mod file;
pub mod traits;

// Re-export
pub use degraded::DegradedStore;
pub use file::FileStore;
pub use traits::{HistoryRepository, ShoppingRepository, StatsRepository, TaskRepository};
