//! The full summarizer pipeline: records → index → period → summary.

use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::{month_windows, MonthWindow};
use super::index::build_index;
use super::insights::PeriodInsights;
use super::stats::PeriodStats;
use super::{ActivityIndex, Period};
use crate::types::ActivityRecord;

/// Everything a front-end needs to draw the heat-map for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    /// Period these numbers cover, as its selector value ("current" or a year)
    #[serde(serialize_with = "serialize_period")]
    pub period: Period,
    pub today: NaiveDate,
    #[serde(flatten)]
    pub stats: PeriodStats,
    pub insights: PeriodInsights,
    /// Twelve windows, oldest first
    pub month_windows: Vec<MonthWindow>,
}

fn serialize_period<S: serde::Serializer>(period: &Period, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(period)
}

/// Summarize an already-built index.
pub fn summarize_index(index: &ActivityIndex, period: Period, today: NaiveDate) -> ActivitySummary {
    let filtered = period.filter(index, today);
    let stats = PeriodStats::compute(&filtered);
    let insights = PeriodInsights::compute(index, &filtered, period, today);
    let month_windows = month_windows(&filtered, period, today);

    tracing::debug!(
        period = %period,
        %today,
        total_count = stats.total_count,
        active_days = stats.active_days,
        max_streak = stats.max_streak,
        "Summarized activity"
    );

    ActivitySummary {
        period,
        today,
        stats,
        insights,
        month_windows,
    }
}

/// Summarize raw records for `period` as of `today`.
pub fn summarize(records: &[ActivityRecord], period: Period, today: NaiveDate) -> ActivitySummary {
    summarize_index(&build_index(records), period, today)
}

/// Holds the record index and the selected period between recomputations.
///
/// The index is rebuilt only when records are replaced; everything derived
/// from it is recomputed on each [`Summarizer::summary`] call.
#[derive(Debug, Clone)]
pub struct Summarizer {
    index: ActivityIndex,
    period: Period,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self {
            index: ActivityIndex::default(),
            period: Period::Rolling12Months,
        }
    }
}

impl Summarizer {
    /// Start with `records` and the rolling period selected.
    pub fn new(records: &[ActivityRecord]) -> Self {
        Self {
            index: build_index(records),
            ..Default::default()
        }
    }

    /// Replace the records and rebuild the index.
    pub fn set_records(&mut self, records: &[ActivityRecord]) {
        self.index = build_index(records);
    }

    /// Select a period. Any period can follow any other.
    pub fn select(&mut self, period: Period) {
        if self.period != period {
            tracing::debug!(from = %self.period, to = %period, "Period selected");
        }
        self.period = period;
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn index(&self) -> &ActivityIndex {
        &self.index
    }

    /// Summary of the selected period as of `today`.
    pub fn summary(&self, today: NaiveDate) -> ActivitySummary {
        summarize_index(&self.index, self.period, today)
    }
}
