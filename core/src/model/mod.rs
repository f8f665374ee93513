pub mod history;
pub mod shopping;
pub mod stats;
pub mod task;

pub use history::HistoryEntry;
pub use shopping::ShoppingItem;
pub use stats::StarBucket;
pub use task::Task;
