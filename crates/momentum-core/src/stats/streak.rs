//! Consecutive-day streak computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Current and longest consecutive-day streaks.
///
/// `current` is recomputed from the task snapshot on every call;
/// `longest` is a running maximum maintained by the service layer and
/// persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Count consecutive qualifying days walking backward from `reference`.
///
/// A day qualifies when it has at least one task and every task for that
/// day reached at least partial completion. The walk stops at the first
/// day with no tasks or with an unfinished task; that day is excluded.
/// An empty snapshot yields 0.
pub fn current_streak(tasks: &[Task], reference: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = reference;
    loop {
        let mut any = false;
        let mut all_partial = true;
        for task in tasks.iter().filter(|t| t.date == day) {
            any = true;
            if !task.status.at_least_partial() {
                all_partial = false;
                break;
            }
        }
        if !any || !all_partial {
            break;
        }
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Importance, TaskStatus, Urgency};
    use chrono::Utc;

    fn task(date: &str, status: TaskStatus) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            name: "task".to_string(),
            notes: None,
            category_id: None,
            status,
            urgency: Urgency::NotUrgent,
            importance: Importance::NotImportant,
            date: date.parse().unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_snapshot_yields_zero() {
        assert_eq!(current_streak(&[], date("2024-03-15")), 0);
    }

    #[test]
    fn two_fully_completed_days() {
        // Today and yesterday done, nothing two days ago.
        let tasks = vec![
            task("2024-03-15", TaskStatus::Completed),
            task("2024-03-14", TaskStatus::Completed),
        ];
        assert_eq!(current_streak(&tasks, date("2024-03-15")), 2);
    }

    #[test]
    fn in_progress_keeps_the_streak_alive() {
        let tasks = vec![
            task("2024-03-15", TaskStatus::InProgress),
            task("2024-03-14", TaskStatus::Completed),
            task("2024-03-14", TaskStatus::InProgress),
        ];
        assert_eq!(current_streak(&tasks, date("2024-03-15")), 2);
    }

    #[test]
    fn pending_task_breaks_the_streak() {
        let tasks = vec![
            task("2024-03-15", TaskStatus::Completed),
            task("2024-03-14", TaskStatus::Completed),
            task("2024-03-14", TaskStatus::Pending),
            task("2024-03-13", TaskStatus::Completed),
        ];
        // 2024-03-14 has an unfinished task, so only today counts.
        assert_eq!(current_streak(&tasks, date("2024-03-15")), 1);
    }

    #[test]
    fn skipped_task_breaks_the_streak() {
        let tasks = vec![task("2024-03-15", TaskStatus::Skipped)];
        assert_eq!(current_streak(&tasks, date("2024-03-15")), 0);
    }

    #[test]
    fn gap_day_ends_the_streak() {
        let tasks = vec![
            task("2024-03-15", TaskStatus::Completed),
            // no tasks on 2024-03-14
            task("2024-03-13", TaskStatus::Completed),
        ];
        assert_eq!(current_streak(&tasks, date("2024-03-15")), 1);
    }

    #[test]
    fn unfinished_reference_day_yields_zero() {
        let tasks = vec![
            task("2024-03-15", TaskStatus::Pending),
            task("2024-03-14", TaskStatus::Completed),
        ];
        assert_eq!(current_streak(&tasks, date("2024-03-15")), 0);
    }

    #[test]
    fn streak_spans_month_boundary() {
        let tasks = vec![
            task("2024-03-01", TaskStatus::Completed),
            task("2024-02-29", TaskStatus::Completed),
            task("2024-02-28", TaskStatus::Completed),
        ];
        assert_eq!(current_streak(&tasks, date("2024-03-01")), 3);
    }

    #[test]
    fn computation_does_not_mutate_input() {
        let tasks = vec![
            task("2024-03-15", TaskStatus::Completed),
            task("2024-03-14", TaskStatus::Completed),
        ];
        let first = current_streak(&tasks, date("2024-03-15"));
        let second = current_streak(&tasks, date("2024-03-15"));
        assert_eq!(first, second);
    }
}
