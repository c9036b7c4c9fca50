//! Formatting helpers shared across front-ends.

use chrono::NaiveDate;

/// `"s"` unless `count` is exactly one.
pub fn plural_suffix(count: u64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Long human-readable date, e.g. "Friday, March 15, 2024".
pub fn full_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Short month label, e.g. "Mar".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Hover text for a heat-map day.
pub fn day_tooltip(count: u64, date: NaiveDate) -> String {
    format!(
        "{} submission{} on {}",
        count,
        plural_suffix(count),
        full_date(date)
    )
}

/// Get day name from index (0 = Sunday).
pub fn day_name(day: u8) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Unknown",
    }
}

/// Format a delta percentage for display (e.g., "+23%" or "-15%").
pub fn format_delta(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{:.0}%", delta)
    } else {
        format!("{:.0}%", delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tooltip_pluralization() {
        let day = date(2024, 3, 15);
        assert_eq!(
            day_tooltip(1, day),
            "1 submission on Friday, March 15, 2024"
        );
        assert_eq!(
            day_tooltip(0, day),
            "0 submissions on Friday, March 15, 2024"
        );
        assert_eq!(
            day_tooltip(12, date(2024, 3, 1)),
            "12 submissions on Friday, March 1, 2024"
        );
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(date(2024, 1, 1)), "Jan");
        assert_eq!(month_label(date(2024, 12, 1)), "Dec");
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(0), "Sunday");
        assert_eq!(day_name(6), "Saturday");
        assert_eq!(day_name(7), "Unknown");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(23.0), "+23%");
        assert_eq!(format_delta(-15.4), "-15%");
        assert_eq!(format_delta(0.0), "+0%");
    }
}
