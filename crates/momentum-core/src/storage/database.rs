//! SQLite-based storage for tasks and categories.
//!
//! This is the explicit repository object handed to the service layer;
//! there is no ambient global state. It also holds a small key-value table
//! used to persist the longest streak across sessions.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, migrations};
use crate::error::{CoreError, DatabaseError, Result};
use crate::task::{default_categories, Category, Importance, Task, TaskStatus, Urgency};

const LONGEST_STREAK_KEY: &str = "longest_streak";

// === Helper Functions ===

/// Parse task status from database string
fn parse_task_status(status_str: &str) -> TaskStatus {
    match status_str {
        "in_progress" | "partial" => TaskStatus::InProgress,
        "completed" => TaskStatus::Completed,
        "skipped" => TaskStatus::Skipped,
        _ => TaskStatus::Pending,
    }
}

/// Format task status for database storage
fn format_task_status(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Completed => "completed",
        TaskStatus::Skipped => "skipped",
    }
}

/// Parse urgency from database string
fn parse_urgency(urgency_str: &str) -> Urgency {
    match urgency_str {
        "urgent" => Urgency::Urgent,
        _ => Urgency::NotUrgent,
    }
}

/// Format urgency for database storage
fn format_urgency(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Urgent => "urgent",
        Urgency::NotUrgent => "not_urgent",
    }
}

/// Parse importance from database string
fn parse_importance(importance_str: &str) -> Importance {
    match importance_str {
        "important" => Importance::Important,
        _ => Importance::NotImportant,
    }
}

/// Format importance for database storage
fn format_importance(importance: Importance) -> &'static str {
    match importance {
        Importance::Important => "important",
        Importance::NotImportant => "not_important",
    }
}

/// Parse calendar date from `YYYY-MM-DD` with fallback to today
fn parse_date_fallback(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Build a Task from a database row
fn row_to_task(row: &rusqlite::Row) -> std::result::Result<Task, rusqlite::Error> {
    let status_str: String = row.get(4)?;
    let urgency_str: String = row.get(5)?;
    let importance_str: String = row.get(6)?;
    let date_str: String = row.get(7)?;
    let created_at_str: String = row.get(8)?;
    let updated_at_str: String = row.get(9)?;

    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        notes: row.get(2)?,
        category_id: row.get(3)?,
        status: parse_task_status(&status_str),
        urgency: parse_urgency(&urgency_str),
        importance: parse_importance(&importance_str),
        date: parse_date_fallback(&date_str),
        created_at: parse_datetime_fallback(&created_at_str),
        updated_at: parse_datetime_fallback(&updated_at_str),
    })
}

/// Build a Category from a database row
fn row_to_category(row: &rusqlite::Row) -> std::result::Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        icon: row.get(3)?,
    })
}

const TASK_COLUMNS: &str =
    "id, name, notes, category_id, status, urgency, importance, date, created_at, updated_at";

/// SQLite database for task and category storage.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/momentum/momentum.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("momentum.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        // Base tables (v1 schema); the Eisenhower columns arrive with the
        // versioned migrations below.
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id          TEXT PRIMARY KEY,
                    name        TEXT NOT NULL,
                    notes       TEXT,
                    category_id TEXT,
                    status      TEXT NOT NULL DEFAULT 'pending',
                    date        TEXT NOT NULL,
                    created_at  TEXT NOT NULL,
                    updated_at  TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS categories (
                    id    TEXT PRIMARY KEY,
                    name  TEXT NOT NULL,
                    color TEXT NOT NULL,
                    icon  TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_tasks_date ON tasks(date);
                CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category_id);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        migrations::migrate(&self.conn)
            .map_err(|e| CoreError::from(DatabaseError::MigrationFailed(e.to_string())))?;

        Ok(())
    }

    // === Task CRUD ===

    /// Create a new task.
    pub fn create_task(&self, task: &Task) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO tasks (id, name, notes, category_id, status, urgency, importance, date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                task.id,
                task.name,
                task.notes,
                task.category_id,
                format_task_status(task.status),
                format_urgency(task.urgency),
                format_importance(task.importance),
                task.date.format("%Y-%m-%d").to_string(),
                task.created_at.to_rfc3339(),
                task.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a task by ID.
    pub fn get_task(&self, id: &str) -> std::result::Result<Option<Task>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"))?;
        stmt.query_row(params![id], row_to_task).optional()
    }

    /// List all tasks, oldest first.
    pub fn list_tasks(&self) -> std::result::Result<Vec<Task>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at ASC"
        ))?;
        let tasks = stmt.query_map([], row_to_task)?;
        tasks.collect()
    }

    /// List tasks for one calendar day, oldest first.
    pub fn list_tasks_for_date(
        &self,
        date: NaiveDate,
    ) -> std::result::Result<Vec<Task>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE date = ?1 ORDER BY created_at ASC"
        ))?;
        let tasks = stmt.query_map(params![date.format("%Y-%m-%d").to_string()], row_to_task)?;
        tasks.collect()
    }

    /// Update an existing task.
    pub fn update_task(&self, task: &Task) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute(
            "UPDATE tasks
             SET name = ?1, notes = ?2, category_id = ?3, status = ?4, urgency = ?5,
                 importance = ?6, date = ?7, updated_at = ?8
             WHERE id = ?9",
            params![
                task.name,
                task.notes,
                task.category_id,
                format_task_status(task.status),
                format_urgency(task.urgency),
                format_importance(task.importance),
                task.date.format("%Y-%m-%d").to_string(),
                task.updated_at.to_rfc3339(),
                task.id,
            ],
        )?;
        Ok(())
    }

    /// Delete a task.
    pub fn delete_task(&self, id: &str) -> std::result::Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(())
    }

    // === Category CRUD ===

    /// Create a new category.
    pub fn create_category(&self, category: &Category) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO categories (id, name, color, icon) VALUES (?1, ?2, ?3, ?4)",
            params![category.id, category.name, category.color, category.icon],
        )?;
        Ok(())
    }

    /// Get a category by ID.
    pub fn get_category(&self, id: &str) -> std::result::Result<Option<Category>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color, icon FROM categories WHERE id = ?1")?;
        stmt.query_row(params![id], row_to_category).optional()
    }

    /// List all categories.
    pub fn list_categories(&self) -> std::result::Result<Vec<Category>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color, icon FROM categories ORDER BY rowid ASC")?;
        let categories = stmt.query_map([], row_to_category)?;
        categories.collect()
    }

    /// Update a category.
    pub fn update_category(&self, category: &Category) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute(
            "UPDATE categories SET name = ?1, color = ?2, icon = ?3 WHERE id = ?4",
            params![category.name, category.color, category.icon, category.id],
        )?;
        Ok(())
    }

    /// Delete a category, detaching its tasks.
    ///
    /// Tasks referencing the category are kept and their `category_id` is
    /// cleared in the same transaction. Returns the number of detached tasks.
    pub fn delete_category(&self, id: &str) -> std::result::Result<usize, rusqlite::Error> {
        self.conn.execute_batch("BEGIN IMMEDIATE TRANSACTION;")?;
        let result: std::result::Result<usize, rusqlite::Error> = (|| {
            let detached = self.conn.execute(
                "UPDATE tasks SET category_id = NULL WHERE category_id = ?1",
                params![id],
            )?;
            self.conn
                .execute("DELETE FROM categories WHERE id = ?1", params![id])?;
            Ok(detached)
        })();
        match result {
            Ok(detached) => {
                self.conn.execute_batch("COMMIT;")?;
                Ok(detached)
            }
            Err(err) => {
                let _ = self.conn.execute_batch("ROLLBACK;");
                Err(err)
            }
        }
    }

    /// Insert the default category set if no categories exist yet.
    ///
    /// Returns the number of categories inserted (0 when already seeded).
    pub fn seed_default_categories(&self) -> std::result::Result<usize, rusqlite::Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }
        let defaults = default_categories();
        for category in &defaults {
            self.create_category(category)?;
        }
        Ok(defaults.len())
    }

    // === Streak persistence ===

    /// Read the persisted longest streak (0 when never recorded).
    pub fn longest_streak(&self) -> std::result::Result<u32, rusqlite::Error> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![LONGEST_STREAK_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.and_then(|v| v.parse().ok()).unwrap_or(0))
    }

    /// Persist the longest streak.
    pub fn set_longest_streak(&self, value: u32) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![LONGEST_STREAK_KEY, value.to_string()],
        )?;
        Ok(())
    }
}
