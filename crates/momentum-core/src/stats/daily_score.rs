//! Daily completion score and calendar aggregation.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// Score breakdown for one calendar day.
///
/// `other_count` covers tasks that earned no credit (pending or skipped).
/// The counts always satisfy
/// `completed_count + partial_count + other_count == total_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayScore {
    /// Calendar day the score belongs to
    pub date: NaiveDate,
    /// Tasks with full credit
    pub completed_count: u32,
    /// Tasks with half credit (in progress)
    pub partial_count: u32,
    /// Tasks with no credit (pending or skipped)
    pub other_count: u32,
    /// Total tasks for the day
    pub total_count: u32,
    /// Integer percentage in [0, 100]; 0 for a day with no tasks
    pub score: u8,
}

impl DayScore {
    /// Zero-valued score for a day without tasks.
    fn empty(date: NaiveDate) -> Self {
        DayScore {
            date,
            completed_count: 0,
            partial_count: 0,
            other_count: 0,
            total_count: 0,
            score: 0,
        }
    }
}

/// Compute the completion score for one calendar day.
///
/// Only tasks whose `date` equals `date` contribute. Completed tasks earn
/// full credit, in-progress tasks half credit; the score is the credit
/// fraction as an integer percentage, rounded half-up. A day with no tasks
/// scores 0.
pub fn daily_score(tasks: &[Task], date: NaiveDate) -> DayScore {
    let mut entry = DayScore::empty(date);
    let mut credit = 0.0;
    for task in tasks.iter().filter(|t| t.date == date) {
        entry.total_count += 1;
        credit += task.status.weight();
        match task.status {
            TaskStatus::Completed => entry.completed_count += 1,
            TaskStatus::InProgress => entry.partial_count += 1,
            TaskStatus::Pending | TaskStatus::Skipped => entry.other_count += 1,
        }
    }
    if entry.total_count > 0 {
        entry.score = ((credit / f64::from(entry.total_count)) * 100.0).round() as u8;
    }
    entry
}

/// Compute one [`DayScore`] per requested date, in the given order.
pub fn range_scores(tasks: &[Task], dates: &[NaiveDate]) -> Vec<DayScore> {
    dates.iter().map(|&d| daily_score(tasks, d)).collect()
}

/// Compute one [`DayScore`] per calendar day of a month, ascending.
///
/// `month` is 1-based (1 = January). Returns 28-31 entries depending on the
/// month and leap year, or an empty vector for an invalid year/month pair.
pub fn month_scores(tasks: &[Task], year: i32, month: u32) -> Vec<DayScore> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|d| daily_score(tasks, d))
        .collect()
}

/// Compute scores for the `days` most recent days ending at `end`,
/// oldest to newest.
pub fn trailing_scores(tasks: &[Task], end: NaiveDate, days: u32) -> Vec<DayScore> {
    if days == 0 {
        return Vec::new();
    }
    let start = end
        .checked_sub_days(Days::new(u64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| daily_score(tasks, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Importance, TaskStatus, Urgency};
    use chrono::Utc;
    use proptest::prelude::*;

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
    fn empty_day_scores_zero() {
        let entry = daily_score(&[], date("2024-03-15"));
        assert_eq!(entry.score, 0);
        assert_eq!(entry.total_count, 0);
    }

    #[test]
    fn all_completed_scores_hundred() {
        let tasks = vec![
            task("2024-03-15", TaskStatus::Completed),
            task("2024-03-15", TaskStatus::Completed),
            task("2024-03-15", TaskStatus::Completed),
        ];
        assert_eq!(daily_score(&tasks, date("2024-03-15")).score, 100);
    }

    #[test]
    fn partial_earns_half_credit() {
        // round(((1 + 0.5) / 2) * 100) = 75
        let tasks = vec![
            task("2024-03-15", TaskStatus::Completed),
            task("2024-03-15", TaskStatus::InProgress),
        ];
        let entry = daily_score(&tasks, date("2024-03-15"));
        assert_eq!(entry.completed_count, 1);
        assert_eq!(entry.partial_count, 1);
        assert_eq!(entry.score, 75);
    }

    #[test]
    fn rounding_is_half_up() {
        // 0.5 / 3 * 100 = 16.66.. -> 17; 2.5 / 4 * 100 = 62.5 -> 63
        let tasks = vec![
            task("2024-03-15", TaskStatus::InProgress),
            task("2024-03-15", TaskStatus::Pending),
            task("2024-03-15", TaskStatus::Skipped),
        ];
        assert_eq!(daily_score(&tasks, date("2024-03-15")).score, 17);

        let tasks = vec![
            task("2024-03-16", TaskStatus::Completed),
            task("2024-03-16", TaskStatus::Completed),
            task("2024-03-16", TaskStatus::InProgress),
            task("2024-03-16", TaskStatus::Pending),
        ];
        assert_eq!(daily_score(&tasks, date("2024-03-16")).score, 63);
    }

    #[test]
    fn other_days_do_not_contribute() {
        let tasks = vec![
            task("2024-03-15", TaskStatus::Completed),
            task("2024-03-16", TaskStatus::Pending),
        ];
        let entry = daily_score(&tasks, date("2024-03-15"));
        assert_eq!(entry.total_count, 1);
        assert_eq!(entry.score, 100);
    }

    #[test]
    fn skipped_counts_toward_total_but_not_credit() {
        let tasks = vec![
            task("2024-03-15", TaskStatus::Completed),
            task("2024-03-15", TaskStatus::Skipped),
        ];
        let entry = daily_score(&tasks, date("2024-03-15"));
        assert_eq!(entry.other_count, 1);
        assert_eq!(entry.score, 50);
    }

    #[test]
    fn range_scores_follow_input_order() {
        let tasks = vec![task("2024-03-15", TaskStatus::Completed)];
        let dates = [date("2024-03-16"), date("2024-03-15")];
        let entries = range_scores(&tasks, &dates);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, dates[0]);
        assert_eq!(entries[0].score, 0);
        assert_eq!(entries[1].score, 100);
    }

    #[test]
    fn month_scores_leap_february() {
        let entries = month_scores(&[], 2024, 2);
        assert_eq!(entries.len(), 29);
        assert_eq!(entries[0].date, date("2024-02-01"));
        assert_eq!(entries[28].date, date("2024-02-29"));
    }

    #[test]
    fn month_scores_common_february_and_long_months() {
        assert_eq!(month_scores(&[], 2023, 2).len(), 28);
        assert_eq!(month_scores(&[], 2024, 1).len(), 31);
        assert_eq!(month_scores(&[], 2024, 4).len(), 30);
    }

    #[test]
    fn month_scores_invalid_month_is_empty() {
        assert!(month_scores(&[], 2024, 13).is_empty());
        assert!(month_scores(&[], 2024, 0).is_empty());
    }

    #[test]
    fn trailing_scores_oldest_to_newest() {
        let entries = trailing_scores(&[], date("2024-03-15"), 7);
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].date, date("2024-03-09"));
        assert_eq!(entries[6].date, date("2024-03-15"));
        assert!(trailing_scores(&[], date("2024-03-15"), 0).is_empty());
    }

    fn status_strategy() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::Pending),
            Just(TaskStatus::InProgress),
            Just(TaskStatus::Completed),
            Just(TaskStatus::Skipped),
        ]
    }

    proptest! {
        #[test]
        fn score_is_bounded_and_counts_partition(statuses in prop::collection::vec(status_strategy(), 0..40)) {
            let tasks: Vec<Task> = statuses
                .iter()
                .map(|&s| task("2024-03-15", s))
                .collect();
            let entry = daily_score(&tasks, date("2024-03-15"));
            prop_assert!(entry.score <= 100);
            prop_assert_eq!(
                entry.completed_count + entry.partial_count + entry.other_count,
                entry.total_count
            );
            prop_assert_eq!(entry.total_count as usize, tasks.len());
        }

        #[test]
        fn daily_score_is_idempotent(statuses in prop::collection::vec(status_strategy(), 0..40)) {
            let tasks: Vec<Task> = statuses
                .iter()
                .map(|&s| task("2024-03-15", s))
                .collect();
            let first = daily_score(&tasks, date("2024-03-15"));
            let second = daily_score(&tasks, date("2024-03-15"));
            prop_assert_eq!(first, second);
        }
    }
}
