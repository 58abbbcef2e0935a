//! Predicate-based task selection helpers.
//!
//! All filters are pure, preserve the relative order of the input slice,
//! and borrow rather than clone.

use chrono::NaiveDate;

use super::{Quadrant, Task};

/// Tasks belonging to one calendar day.
pub fn for_date(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.date == date).collect()
}

/// Tasks in a category. `None` selects uncategorized tasks.
pub fn in_category<'a>(tasks: &'a [Task], category_id: Option<&str>) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.category_id.as_deref() == category_id)
        .collect()
}

/// Tasks in one Eisenhower quadrant.
pub fn in_quadrant(tasks: &[Task], quadrant: Quadrant) -> Vec<&Task> {
    tasks.iter().filter(|t| t.quadrant() == quadrant).collect()
}
