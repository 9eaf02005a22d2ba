//! Daily activity streak computation.
//!
//! A streak is the length of the maximal run of consecutive calendar days,
//! ending today or yesterday, on which the user completed at least one
//! experiment. Yesterday acts as a grace day: a user who was active
//! yesterday but has not opened the app today still sees their streak.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::attempt::ExperimentAttempt;

/// Count consecutive active days walking backward from `today`.
///
/// Only completed attempts count, and only their calendar date matters;
/// multiple completions on one day are one active day. A gap of more than
/// one day before `today` breaks the streak to 0.
pub fn compute_streak(attempts: &[ExperimentAttempt], today: NaiveDate) -> u32 {
    let active_days: HashSet<NaiveDate> = attempts
        .iter()
        .filter(|a| a.is_completed())
        .filter_map(|a| a.completed_on())
        .collect();

    if active_days.is_empty() {
        return 0;
    }

    let anchor = if active_days.contains(&today) {
        today
    } else {
        let Some(yesterday) = today.pred_opt() else {
            return 0;
        };
        if !active_days.contains(&yesterday) {
            return 0;
        }
        yesterday
    };

    let mut streak = 0u32;
    let mut cursor = anchor;
    while active_days.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}
