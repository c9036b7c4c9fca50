//! Period selection: rolling 12 months or a calendar year.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};

use super::ActivityIndex;
use crate::error::Error;

/// Number of calendar years offered besides the rolling window.
pub const YEAR_LOOKBACK: i32 = 5;

/// Time window the heat-map covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// The year ending on (and including) today
    Rolling12Months,
    /// Every date in one calendar year
    CalendarYear(i32),
}

impl Period {
    /// The periods a user can pick from: the rolling window, then the current
    /// year and the four before it.
    pub fn selectable(today: NaiveDate) -> Vec<Period> {
        let year = today.year();
        std::iter::once(Period::Rolling12Months)
            .chain((0..YEAR_LOOKBACK).map(|offset| Period::CalendarYear(year - offset)))
            .collect()
    }

    /// Whether this period is one of [`Period::selectable`] for `today`.
    pub fn is_selectable(&self, today: NaiveDate) -> bool {
        Self::selectable(today).contains(self)
    }

    /// First and last date (inclusive) covered by this period.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Period::Rolling12Months => (rolling_start(today), today),
            Period::CalendarYear(year) => year_bounds(*year),
        }
    }

    /// Number of calendar days the period spans.
    pub fn total_days(&self, today: NaiveDate) -> i64 {
        let (start, end) = self.bounds(today);
        (end - start).num_days() + 1
    }

    /// Bounds of the period immediately before this one, for trend comparison.
    ///
    /// The rolling window compares against the year ending the day before it
    /// starts; a calendar year against the year before.
    pub fn previous_bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Period::Rolling12Months => {
                let end = rolling_start(today).pred_opt()?;
                Some((rolling_start(end), end))
            }
            Period::CalendarYear(year) => Some(year_bounds(year.checked_sub(1)?)),
        }
    }

    /// Restrict `index` to the dates this period covers.
    pub fn filter(&self, index: &ActivityIndex, today: NaiveDate) -> ActivityIndex {
        match self {
            Period::Rolling12Months => index.range(rolling_start(today), today),
            Period::CalendarYear(year) => index.filter(|date| date.year() == *year),
        }
    }

    /// Get display name for this period.
    pub fn display_name(&self) -> String {
        match self {
            Period::Rolling12Months => "Last 12 months".to_string(),
            Period::CalendarYear(year) => format!("{}", year),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Rolling12Months => f.write_str("current"),
            Period::CalendarYear(year) => write!(f, "{}", year),
        }
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("current") {
            return Ok(Period::Rolling12Months);
        }
        s.parse::<i32>()
            .ok()
            .filter(|year| NaiveDate::from_ymd_opt(*year, 1, 1).is_some())
            .map(Period::CalendarYear)
            .ok_or_else(|| Error::InvalidPeriod(format!("expected \"current\" or a year, got {:?}", s)))
    }
}

/// First day of the rolling window ending on `today`: the same calendar day
/// one year earlier, plus one day.
///
/// When that day does not exist (today is Feb 29) chrono clamps to Feb 28,
/// so the window starts on Mar 1.
pub fn rolling_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(12))
        .and_then(|d| d.succ_opt())
        .unwrap_or(NaiveDate::MIN)
}

fn year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rolling_window_edges() {
        let today = date(2024, 3, 15);
        let index: ActivityIndex = [
            (date(2023, 3, 15), 1),
            (date(2023, 3, 16), 2),
            (date(2024, 3, 15), 3),
            (date(2024, 3, 16), 4),
        ]
        .into_iter()
        .collect();

        let filtered = Period::Rolling12Months.filter(&index, today);
        assert!(!filtered.contains(date(2023, 3, 15)));
        assert!(filtered.contains(date(2023, 3, 16)));
        assert!(filtered.contains(date(2024, 3, 15)));
        assert!(!filtered.contains(date(2024, 3, 16)));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_calendar_year_filter() {
        let index: ActivityIndex = [
            (date(2022, 12, 31), 1),
            (date(2023, 1, 1), 2),
            (date(2023, 12, 31), 3),
            (date(2024, 1, 1), 4),
        ]
        .into_iter()
        .collect();

        let filtered = Period::CalendarYear(2023).filter(&index, date(2024, 6, 1));
        let entries: Vec<_> = filtered.iter().collect();
        assert_eq!(entries, vec![(date(2023, 1, 1), 2), (date(2023, 12, 31), 3)]);
    }

    #[test]
    fn test_filter_is_subset() {
        let index: ActivityIndex = (1..=28).map(|d| (date(2024, 2, d), d as u64)).collect();
        let filtered = Period::Rolling12Months.filter(&index, date(2024, 2, 10));

        for (day, count) in filtered.iter() {
            assert_eq!(index.get(day), Some(count));
        }
        assert_eq!(filtered.len(), 10);
    }

    #[test]
    fn test_rolling_start_leap_day() {
        assert_eq!(rolling_start(date(2024, 3, 15)), date(2023, 3, 16));
        assert_eq!(rolling_start(date(2024, 2, 29)), date(2023, 3, 1));
        assert_eq!(rolling_start(date(2025, 3, 1)), date(2024, 3, 2));
        assert_eq!(rolling_start(date(2024, 1, 1)), date(2023, 1, 2));
    }

    #[test]
    fn test_total_days() {
        assert_eq!(Period::Rolling12Months.total_days(date(2024, 3, 15)), 366);
        assert_eq!(Period::Rolling12Months.total_days(date(2023, 3, 15)), 365);
        assert_eq!(Period::CalendarYear(2024).total_days(date(2024, 3, 15)), 366);
        assert_eq!(Period::CalendarYear(2023).total_days(date(2024, 3, 15)), 365);
    }

    #[test]
    fn test_previous_bounds() {
        let today = date(2024, 3, 15);
        assert_eq!(
            Period::CalendarYear(2023).previous_bounds(today),
            Some((date(2022, 1, 1), date(2022, 12, 31)))
        );
        assert_eq!(
            Period::Rolling12Months.previous_bounds(today),
            Some((date(2022, 3, 16), date(2023, 3, 15)))
        );
    }

    #[test]
    fn test_selectable_periods() {
        let options = Period::selectable(date(2024, 7, 4));
        assert_eq!(
            options,
            vec![
                Period::Rolling12Months,
                Period::CalendarYear(2024),
                Period::CalendarYear(2023),
                Period::CalendarYear(2022),
                Period::CalendarYear(2021),
                Period::CalendarYear(2020),
            ]
        );
        let labels: Vec<String> = options.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["current", "2024", "2023", "2022", "2021", "2020"]);

        assert!(Period::CalendarYear(2020).is_selectable(date(2024, 7, 4)));
        assert!(!Period::CalendarYear(2019).is_selectable(date(2024, 7, 4)));
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("current".parse::<Period>().unwrap(), Period::Rolling12Months);
        assert_eq!("CURRENT".parse::<Period>().unwrap(), Period::Rolling12Months);
        assert_eq!(" 2022 ".parse::<Period>().unwrap(), Period::CalendarYear(2022));
        assert!(matches!(
            "last-year".parse::<Period>(),
            Err(Error::InvalidPeriod(_))
        ));
        assert!("".parse::<Period>().is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Period::Rolling12Months.display_name(), "Last 12 months");
        assert_eq!(Period::CalendarYear(2024).display_name(), "2024");
    }
}
