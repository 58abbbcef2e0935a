//! Scoring and streak engine.
//!
//! Pure functions over an in-memory task snapshot: a daily completion score,
//! monthly/trailing aggregates, and consecutive-day streaks. Every function
//! here is deterministic and side-effect free; persistence of the longest
//! streak lives in the service layer.

mod daily_score;
mod streak;

pub use daily_score::{daily_score, month_scores, range_scores, trailing_scores, DayScore};
pub use streak::{current_streak, StreakSummary};
