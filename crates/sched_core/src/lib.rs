pub mod config;
pub mod due;
pub mod error;
pub mod model;
pub mod rank;
pub mod storage;
pub mod task_api;
