//! # Momentum Core Library
//!
//! This library provides the core business logic for the Momentum daily
//! productivity tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI being
//! a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Task Model**: Tasks belong to a single calendar day, carry a
//!   completion status, and are classified on the Eisenhower matrix
//!   (urgency x importance)
//! - **Scoring Engine**: Pure functions computing daily completion scores,
//!   monthly/trailing aggregates, and consecutive-day streaks
//! - **Storage**: SQLite-based task/category repository and TOML-based
//!   configuration
//! - **Service**: The [`Tracker`] facade handed to UI/CLI callers, owning
//!   the repository and configuration lifecycle
//!
//! ## Key Components
//!
//! - [`Task`], [`Category`]: Core records
//! - [`stats`]: Daily score, aggregation, and streak computation
//! - [`Database`]: Task and category persistence
//! - [`Tracker`]: Service layer wiring storage to the scoring engine

pub mod error;
pub mod service;
pub mod stats;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, DatabaseError, Result};
pub use service::{DaySummary, NewTask, Tracker};
pub use stats::{DayScore, StreakSummary};
pub use storage::{Config, Database};
pub use task::{Category, Importance, Quadrant, Task, TaskStatus, Urgency};
