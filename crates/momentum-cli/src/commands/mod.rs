pub mod category;
pub mod config;
pub mod day;
pub mod stats;
pub mod task;
