//! Task and category types for the daily tracker.
//!
//! A task belongs to exactly one calendar day (`date`, no time-of-day
//! component) and is classified on the Eisenhower matrix by two independent
//! axes, urgency and importance. Status transitions are free: any status may
//! follow any other.

pub mod filter;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Completion status of a task.
///
/// This is the single closed vocabulary for task progress. Earlier data
/// sources disagreed between `partial`/`skipped` and `in_progress`/`pending`;
/// both map onto this enum, with [`TaskStatus::weight`] as the one canonical
/// mapping to scoring credit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started (initial status at creation)
    Pending,
    /// Partially done; earns half credit
    InProgress,
    /// Fully done; earns full credit
    Completed,
    /// Deliberately not done for the day; earns no credit
    Skipped,
}

impl TaskStatus {
    /// Scoring credit for this status: 1.0, 0.5, or 0.0.
    pub fn weight(self) -> f64 {
        match self {
            TaskStatus::Completed => 1.0,
            TaskStatus::InProgress => 0.5,
            TaskStatus::Pending | TaskStatus::Skipped => 0.0,
        }
    }

    /// Whether the task reached at least partial completion.
    ///
    /// This is the predicate a day must satisfy for every one of its tasks
    /// in order to count toward a streak.
    pub fn at_least_partial(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::InProgress)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// Urgency axis of the Eisenhower matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Urgent,
    NotUrgent,
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::NotUrgent
    }
}

/// Importance axis of the Eisenhower matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Important,
    NotImportant,
}

impl Default for Importance {
    fn default() -> Self {
        Importance::NotImportant
    }
}

/// Eisenhower quadrant derived from the (urgency, importance) pair.
///
/// The four quadrants partition any task set: every task falls in exactly
/// one quadrant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Urgent and important
    Do,
    /// Important but not urgent
    Schedule,
    /// Urgent but not important
    Delegate,
    /// Neither urgent nor important
    Eliminate,
}

impl Quadrant {
    /// Classify an (urgency, importance) pair.
    pub fn from_axes(urgency: Urgency, importance: Importance) -> Self {
        match (urgency, importance) {
            (Urgency::Urgent, Importance::Important) => Quadrant::Do,
            (Urgency::NotUrgent, Importance::Important) => Quadrant::Schedule,
            (Urgency::Urgent, Importance::NotImportant) => Quadrant::Delegate,
            (Urgency::NotUrgent, Importance::NotImportant) => Quadrant::Eliminate,
        }
    }

    /// The (urgency, importance) pair selecting this quadrant.
    pub fn axes(self) -> (Urgency, Importance) {
        match self {
            Quadrant::Do => (Urgency::Urgent, Importance::Important),
            Quadrant::Schedule => (Urgency::NotUrgent, Importance::Important),
            Quadrant::Delegate => (Urgency::Urgent, Importance::NotImportant),
            Quadrant::Eliminate => (Urgency::NotUrgent, Importance::NotImportant),
        }
    }

    /// All four quadrants in matrix order.
    pub fn all() -> [Quadrant; 4] {
        [
            Quadrant::Do,
            Quadrant::Schedule,
            Quadrant::Delegate,
            Quadrant::Eliminate,
        ]
    }
}

/// A tracked task for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task name
    pub name: String,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// Owning category; `None` means uncategorized
    pub category_id: Option<String>,
    /// Completion status
    pub status: TaskStatus,
    /// Urgency axis
    pub urgency: Urgency,
    /// Importance axis
    pub importance: Importance,
    /// Calendar day the task belongs to
    pub date: NaiveDate,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// The Eisenhower quadrant this task falls in.
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_axes(self.urgency, self.importance)
    }
}

/// A user-defined grouping of tasks.
///
/// Categories are independent of dates. Deleting a category never deletes
/// tasks; referencing tasks are detached (see the storage layer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Color token for the UI layer
    pub color: String,
    /// Icon token for the UI layer
    pub icon: String,
}

/// Default categories seeded on first use.
pub fn default_categories() -> Vec<Category> {
    let seeds = [
        ("DSA", "emerald", "Code2"),
        ("Data Science/ML", "blue", "Brain"),
        ("Competitive Programming", "purple", "Trophy"),
        ("Academic Studies", "orange", "GraduationCap"),
        ("Statistics", "pink", "BarChart3"),
        ("CAT Preparation", "cyan", "Target"),
    ];
    seeds
        .iter()
        .enumerate()
        .map(|(i, (name, color, icon))| Category {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
            color: (*color).to_string(),
            icon: (*icon).to_string(),
        })
        .collect()
}
