//! Secondary statistics shown alongside the heat-map.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::stats::{current_streak, longest_streak, total_count, StreakRange};
use super::{ActivityIndex, Period};

/// Extra detail about the selected period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodInsights {
    /// Run of consecutive days ending today (or yesterday)
    pub current_streak: u64,
    /// Where the longest streak sits
    pub longest_streak: Option<StreakRange>,
    /// Weekday with the highest summed count (0 = Sunday)
    pub busiest_weekday: Option<u8>,
    /// Highest-count day, earliest on ties
    pub peak_day: Option<PeakDay>,
    /// Calendar days in the period window
    pub total_days: i64,
    /// Comparison with the preceding period
    pub trend: Option<TrendComparison>,
}

/// The single busiest day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakDay {
    pub date: NaiveDate,
    pub count: u64,
}

/// Total-count change against the preceding period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrendComparison {
    pub previous_total: u64,
    pub delta_pct: f64,
}

impl TrendComparison {
    /// Calculate delta percentage between two values.
    pub fn calc_delta(current: u64, previous: u64) -> f64 {
        if previous == 0 {
            if current == 0 {
                0.0
            } else {
                100.0 // Growth from nothing shown as 100%
            }
        } else {
            (current as f64 - previous as f64) / previous as f64 * 100.0
        }
    }
}

impl PeriodInsights {
    /// Compute insights for `period`.
    ///
    /// `filtered` is the index restricted to the period; `full` is the whole
    /// index, used to total up the preceding period.
    pub fn compute(
        full: &ActivityIndex,
        filtered: &ActivityIndex,
        period: Period,
        today: NaiveDate,
    ) -> Self {
        let total = total_count(filtered);

        let trend = period
            .previous_bounds(today)
            .map(|(start, end)| full.range(start, end))
            .filter(|previous| !previous.is_empty())
            .map(|previous| {
                let previous_total = total_count(&previous);
                TrendComparison {
                    previous_total,
                    delta_pct: TrendComparison::calc_delta(total, previous_total),
                }
            });

        Self {
            current_streak: current_streak(filtered, today),
            longest_streak: longest_streak(filtered),
            busiest_weekday: busiest_weekday(filtered),
            peak_day: peak_day(filtered),
            total_days: period.total_days(today),
            trend,
        }
    }

    /// Share of the period's days that have an entry.
    pub fn activity_percentage(&self, active_days: u64) -> f64 {
        if self.total_days <= 0 {
            0.0
        } else {
            (active_days as f64 / self.total_days as f64) * 100.0
        }
    }
}

fn busiest_weekday(index: &ActivityIndex) -> Option<u8> {
    let mut totals = [0u64; 7];
    for (date, count) in index.iter() {
        let slot = &mut totals[date.weekday().num_days_from_sunday() as usize];
        *slot = slot.saturating_add(count);
    }

    // max_by_key keeps the last maximum; reverse so ties go to the earlier day
    totals
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, &count)| count > 0)
        .max_by_key(|(_, &count)| count)
        .map(|(day, _)| day as u8)
}

fn peak_day(index: &ActivityIndex) -> Option<PeakDay> {
    index
        .iter()
        .rev()
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(_, count)| *count)
        .map(|(date, count)| PeakDay { date, count })
}
