//! Month windows: the twelve calendar grids of the heat-map.
//!
//! Each window lists its cells in reading order for a 7-row grid where row 0
//! is Sunday. Leading placeholders shift day 1 onto its weekday row; days
//! after "today" are left out entirely.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::{ActivityIndex, IntensityBucket, Period};
use crate::format;

/// Number of month windows in a heat-map.
pub const WINDOW_COUNT: usize = 12;

/// Rows in the weekday grid.
pub const DAYS_PER_WEEK: usize = 7;

/// One position in a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayCell {
    /// Padding before day 1
    Placeholder,
    /// A past or present day
    Day {
        date: NaiveDate,
        count: u64,
        bucket: IntensityBucket,
        tooltip: String,
    },
}

impl DayCell {
    fn for_day(date: NaiveDate, count: u64) -> Self {
        DayCell::Day {
            date,
            count,
            bucket: IntensityBucket::for_count(count),
            tooltip: format::day_tooltip(count, date),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DayCell::Placeholder)
    }

    pub fn bucket(&self) -> Option<IntensityBucket> {
        match self {
            DayCell::Placeholder => None,
            DayCell::Day { bucket, .. } => Some(*bucket),
        }
    }
}

/// A single calendar month of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    /// Month name, e.g. "Mar"
    pub label: String,
    /// First day of the month
    pub first_day: NaiveDate,
    pub cells: Vec<DayCell>,
}

impl MonthWindow {
    /// Build the window for the month starting at `first_day`.
    ///
    /// Counts come from `index`; dates missing from it render as zero.
    pub fn build(first_day: NaiveDate, index: &ActivityIndex, today: NaiveDate) -> Self {
        let padding = first_day.weekday().num_days_from_sunday() as usize;
        let month = first_day.month();

        let days = first_day
            .iter_days()
            .take_while(|date| date.month() == month && *date <= today)
            .map(|date| DayCell::for_day(date, index.count_on(date)));

        let cells = std::iter::repeat(DayCell::Placeholder)
            .take(padding)
            .chain(days)
            .collect();

        Self {
            label: format::month_label(first_day),
            first_day,
            cells,
        }
    }

    /// Number of leading placeholders.
    pub fn leading_placeholders(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_placeholder()).count()
    }

    /// Day cells only, without padding.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| !c.is_placeholder())
    }

    /// Number of grid columns (weeks) the cells span.
    pub fn week_count(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }

    /// Cell at `weekday` row (0 = Sunday) of `week` column.
    pub fn cell_at(&self, weekday: usize, week: usize) -> Option<&DayCell> {
        self.cells.get(week * DAYS_PER_WEEK + weekday)
    }
}

/// First day of the month shown in window `idx`.
///
/// The rolling period runs oldest to newest and ends on the current month in
/// window 11. A calendar year maps window `idx` to month `11 - idx` counted
/// from zero, so it runs December (window 0) back to January (window 11).
pub fn window_anchor(period: Period, idx: usize, today: NaiveDate) -> Option<NaiveDate> {
    if idx >= WINDOW_COUNT {
        return None;
    }
    match period {
        Period::Rolling12Months => {
            let this_month = today.with_day(1)?;
            let months_back = (WINDOW_COUNT - 1 - idx) as u32;
            this_month.checked_sub_months(Months::new(months_back))
        }
        Period::CalendarYear(year) => {
            NaiveDate::from_ymd_opt(year, (WINDOW_COUNT - idx) as u32, 1)
        }
    }
}

/// Build the twelve month windows for `period` in window order.
///
/// `index` should already be filtered to the period. Years outside chrono's
/// date range produce no windows.
pub fn month_windows(index: &ActivityIndex, period: Period, today: NaiveDate) -> Vec<MonthWindow> {
    (0..WINDOW_COUNT)
        .filter_map(|idx| window_anchor(period, idx, today))
        .map(|first_day| MonthWindow::build(first_day, index, today))
        .collect()
}
