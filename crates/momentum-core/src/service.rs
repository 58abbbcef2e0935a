//! Service layer wiring storage to the scoring engine.
//!
//! [`Tracker`] is the object handed to UI/CLI callers: an explicit
//! repository plus configuration with its own open/load lifecycle, instead
//! of ambient global state. All statistics are recomputed from the stored
//! snapshot on each call; only the longest streak is persisted.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::stats::{
    current_streak, daily_score, month_scores, trailing_scores, DayScore, StreakSummary,
};
use crate::storage::{Config, Database};
use crate::task::{Category, Importance, Task, TaskStatus, Urgency};

/// Caller-supplied fields for task creation.
///
/// Identity and timestamps are stamped by the service; status starts
/// as pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub importance: Importance,
    pub date: NaiveDate,
}

/// One day's tasks together with their score breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummary {
    pub score: DayScore,
    pub tasks: Vec<Task>,
}

/// Facade over the repository, configuration, and scoring engine.
pub struct Tracker {
    db: Database,
    config: Config,
}

impl Tracker {
    /// Open the tracker against the on-disk database and configuration.
    ///
    /// Seeds the default categories on first use when configured to.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or seeded.
    pub fn open() -> Result<Self> {
        let db = Database::open()?;
        let config = Config::load_or_default();
        Self::new(db, config)
    }

    /// Build a tracker from explicit parts (used by tests and embedders).
    pub fn new(db: Database, config: Config) -> Result<Self> {
        if config.tracker.seed_default_categories {
            db.seed_default_categories()?;
        }
        Ok(Self { db, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    // === Task operations ===

    /// Create a task with a fresh id, pending status, and current timestamps.
    pub fn add_task(&self, new: NewTask) -> Result<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            notes: new.notes,
            category_id: new.category_id,
            status: TaskStatus::Pending,
            urgency: new.urgency,
            importance: new.importance,
            date: new.date,
            created_at: now,
            updated_at: now,
        };
        self.db.create_task(&task)?;
        Ok(task)
    }

    /// Get a task by id.
    pub fn get_task(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.db.get_task(id)?)
    }

    /// Change a task's status, stamping `updated_at`.
    pub fn set_status(&self, id: &str, status: TaskStatus) -> Result<Task> {
        let mut task = self.db.get_task(id)?.ok_or_else(|| CoreError::NotFound {
            kind: "task",
            id: id.to_string(),
        })?;
        task.status = status;
        task.updated_at = Utc::now();
        self.db.update_task(&task)?;
        Ok(task)
    }

    /// Persist caller-side edits to a task, stamping `updated_at`.
    pub fn update_task(&self, task: &mut Task) -> Result<()> {
        task.updated_at = Utc::now();
        self.db.update_task(task)?;
        Ok(())
    }

    /// Delete a task.
    pub fn delete_task(&self, id: &str) -> Result<()> {
        self.db.delete_task(id)?;
        Ok(())
    }

    /// All tasks, oldest first.
    pub fn tasks(&self) -> Result<Vec<Task>> {
        Ok(self.db.list_tasks()?)
    }

    /// Tasks for one calendar day.
    pub fn tasks_for_date(&self, date: NaiveDate) -> Result<Vec<Task>> {
        Ok(self.db.list_tasks_for_date(date)?)
    }

    // === Category operations ===

    /// All categories.
    pub fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.db.list_categories()?)
    }

    /// Create a category with a fresh id.
    pub fn add_category(&self, name: &str, color: &str, icon: &str) -> Result<Category> {
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        };
        self.db.create_category(&category)?;
        Ok(category)
    }

    /// Persist edits to a category.
    pub fn update_category(&self, category: &Category) -> Result<()> {
        self.db.update_category(category)?;
        Ok(())
    }

    /// Delete a category, detaching (not deleting) its tasks.
    ///
    /// Returns the number of detached tasks.
    pub fn delete_category(&self, id: &str) -> Result<usize> {
        Ok(self.db.delete_category(id)?)
    }

    /// Materialize one pending task per category for a day that has none.
    ///
    /// A no-op returning an empty vector when the day already has tasks.
    pub fn seed_day(&self, date: NaiveDate) -> Result<Vec<Task>> {
        if !self.db.list_tasks_for_date(date)?.is_empty() {
            return Ok(Vec::new());
        }
        let mut created = Vec::new();
        for category in self.db.list_categories()? {
            created.push(self.add_task(NewTask {
                name: category.name.clone(),
                notes: None,
                category_id: Some(category.id),
                urgency: Urgency::NotUrgent,
                importance: Importance::NotImportant,
                date,
            })?);
        }
        Ok(created)
    }

    // === Statistics ===

    /// Score and tasks for one calendar day.
    pub fn day_summary(&self, date: NaiveDate) -> Result<DaySummary> {
        let tasks = self.db.list_tasks_for_date(date)?;
        Ok(DaySummary {
            score: daily_score(&tasks, date),
            tasks,
        })
    }

    /// One score per calendar day of a (1-based) month, ascending.
    pub fn month_summary(&self, year: i32, month: u32) -> Result<Vec<DayScore>> {
        let tasks = self.db.list_tasks()?;
        Ok(month_scores(&tasks, year, month))
    }

    /// Scores for the most recent days ending at `end`, oldest to newest.
    ///
    /// `days` falls back to the configured trailing window when `None`.
    pub fn trailing_summary(&self, end: NaiveDate, days: Option<u32>) -> Result<Vec<DayScore>> {
        let days = days.unwrap_or(self.config.tracker.trailing_window_days);
        let tasks = self.db.list_tasks()?;
        Ok(trailing_scores(&tasks, end, days))
    }

    /// Current streak walking back from `reference`, plus the longest streak.
    ///
    /// The longest streak is a running maximum folded into the repository's
    /// kv store on every call, so it survives across sessions even when the
    /// current streak later resets. With `streak.persist_longest` disabled
    /// nothing is written and `longest` equals the current streak.
    pub fn streak(&self, reference: NaiveDate) -> Result<StreakSummary> {
        let tasks = self.db.list_tasks()?;
        let current = current_streak(&tasks, reference);

        if !self.config.streak.persist_longest {
            return Ok(StreakSummary {
                current,
                longest: current,
            });
        }

        let stored = self.db.longest_streak()?;
        let longest = stored.max(current);
        if longest > stored {
            self.db.set_longest_streak(longest)?;
        }
        Ok(StreakSummary { current, longest })
    }
}
