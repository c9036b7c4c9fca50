//! Aggregate statistics over a period-filtered index.

use chrono::NaiveDate;
use serde::Serialize;

use super::ActivityIndex;

/// Totals for the selected period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodStats {
    /// Sum of all counts
    pub total_count: u64,
    /// Number of dates with an entry, including zero-count entries
    pub active_days: u64,
    /// Longest run of consecutive dates with an entry
    pub max_streak: u64,
}

impl PeriodStats {
    /// Compute the totals for an already-filtered index.
    pub fn compute(index: &ActivityIndex) -> Self {
        Self {
            total_count: total_count(index),
            active_days: index.len() as u64,
            max_streak: max_streak(index),
        }
    }
}

/// Sum of all counts in `index`, saturating at `u64::MAX`.
pub fn total_count(index: &ActivityIndex) -> u64 {
    index
        .iter()
        .fold(0u64, |total, (_, count)| total.saturating_add(count))
}

/// First and last date of a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StreakRange {
    /// Days covered, both ends included.
    pub fn day_count(&self) -> u64 {
        ((self.end - self.start).num_days() + 1) as u64
    }
}

/// Length of the longest run of calendar-consecutive dates in `index`.
///
/// Presence is what counts: an entry with a zero count still extends a run.
pub fn max_streak(index: &ActivityIndex) -> u64 {
    longest_streak(index).map_or(0, |range| range.day_count())
}

/// The earliest of the longest runs of consecutive dates in `index`.
pub fn longest_streak(index: &ActivityIndex) -> Option<StreakRange> {
    let mut dates = index.dates();
    let first = dates.next()?;

    let mut best = StreakRange {
        start: first,
        end: first,
    };
    let mut current = best;

    for date in dates {
        if (date - current.end).num_days() == 1 {
            current.end = date;
        } else {
            current = StreakRange {
                start: date,
                end: date,
            };
        }
        if current.day_count() > best.day_count() {
            best = current;
        }
    }

    Some(best)
}

/// Length of the run that reaches `today`.
///
/// A day without an entry yet does not break the run, so a streak that ended
/// yesterday still counts as current.
pub fn current_streak(index: &ActivityIndex, today: NaiveDate) -> u64 {
    let mut expected = if index.contains(today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let start = expected;
    let mut streak = 0u64;
    for date in index.dates().rev().skip_while(move |date| *date > start) {
        if date != expected {
            break;
        }
        streak += 1;
        match date.pred_opt() {
            Some(prev) => expected = prev,
            None => break,
        }
    }

    streak
}
