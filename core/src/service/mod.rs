pub mod dto;
pub mod shopping_service;
pub mod stats_service;
pub mod task_service;
