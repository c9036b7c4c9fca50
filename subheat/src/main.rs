//! subheat - calendar heat-map of daily submissions
//!
//! Reads date/count records and prints a GitHub-style activity summary for
//! the last 12 months or a calendar year.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use subheat_core::activity::{summarize, ActivitySummary, DayCell, MonthWindow, Period};
use subheat_core::format::{day_name, format_delta, plural_suffix};
use subheat_core::{load_records, parse_date, Config, IntensityBucket};

/// Glyphs for None, Low, Medium, High, VeryHigh.
const DEFAULT_GLYPHS: &str = "·░▒▓█";

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Parser, Debug)]
#[command(name = "subheat")]
#[command(about = "Calendar heat-map of daily submissions")]
#[command(version)]
struct Args {
    /// Record file (.json or .jsonl); defaults to heatmap.records_path from config
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Period to show: "current" (last 12 months) or a year
    #[arg(short, long)]
    period: Option<String>,

    /// Reference date (YYYY-MM-DD) instead of today's local date
    #[arg(long)]
    today: Option<String>,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,

    /// Print the selectable periods and exit
    #[arg(long)]
    list_periods: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = subheat_core::logging::init(&config.logging).ok();

    let today = match &args.today {
        Some(s) => parse_date(s)
            .with_context(|| format!("Invalid --today date {:?}. Use YYYY-MM-DD", s))?,
        None => Local::now().date_naive(),
    };

    if args.list_periods {
        for period in Period::selectable(today) {
            println!("{}", period);
        }
        return Ok(());
    }

    let period = match &args.period {
        Some(s) => s.parse::<Period>().context("Invalid --period")?,
        None => config
            .heatmap
            .period()
            .context("Invalid heatmap.default_period")?,
    };
    if !period.is_selectable(today) {
        let options: Vec<String> = Period::selectable(today)
            .iter()
            .map(|p| p.to_string())
            .collect();
        anyhow::bail!(
            "Period {} is not available. Choose one of: {}",
            period,
            options.join(", ")
        );
    }

    let input = args
        .input
        .clone()
        .or_else(|| config.heatmap.records_path.clone())
        .context("No record file. Pass --input or set heatmap.records_path in the config")?;

    let records = load_records(&input)
        .with_context(|| format!("failed to load records from {}", input.display()))?;

    tracing::info!(
        period = %period,
        %today,
        records = records.len(),
        "Rendering heat-map"
    );

    let summary = summarize(&records, period, today);

    match args.export.as_deref() {
        Some("json") => print_json(&summary)?,
        Some("md") => print_markdown(&summary),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => {
            let glyphs: Vec<char> = config
                .heatmap
                .glyphs
                .as_deref()
                .unwrap_or(DEFAULT_GLYPHS)
                .chars()
                .collect();
            print_terminal(&summary, &glyphs);
        }
    }

    Ok(())
}

fn print_terminal(summary: &ActivitySummary, glyphs: &[char]) {
    let title = format!("SUBMISSIONS: {}", summary.period.display_name());

    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    let stats = &summary.stats;
    let insights = &summary.insights;

    println!("SUMMARY");
    println!(
        "   Total:    {:<12} Active days: {}",
        stats.total_count, stats.active_days
    );
    println!(
        "   Longest:  {:<12} Current: {} day{}",
        format!("{} day{}", stats.max_streak, plural_suffix(stats.max_streak)),
        insights.current_streak,
        plural_suffix(insights.current_streak)
    );
    println!(
        "   Active:   {} of {} days ({:.0}%)",
        stats.active_days,
        insights.total_days,
        insights.activity_percentage(stats.active_days)
    );
    if let Some(day) = insights.busiest_weekday {
        println!("   Busiest:  {}", day_name(day));
    }
    if let Some(peak) = &insights.peak_day {
        println!(
            "   Peak:     {} ({} submission{})",
            peak.date.format("%b %d, %Y"),
            peak.count,
            plural_suffix(peak.count)
        );
    }
    if let Some(trend) = &insights.trend {
        println!(
            "   Trend:    {} vs previous period ({})",
            format_delta(trend.delta_pct),
            trend.previous_total
        );
    }
    println!();

    println!("ACTIVITY");
    for line in heatmap_lines(&summary.month_windows, glyphs) {
        println!("   {}", line.trim_end());
    }
    println!();

    let legend: Vec<String> = IntensityBucket::ALL
        .iter()
        .map(|b| format!("{} {}", glyph(*b, glyphs), b.range_label()))
        .collect();
    println!("   {}", legend.join("  "));
    println!();
}

/// Header plus one line per weekday, months side by side.
fn heatmap_lines(windows: &[MonthWindow], glyphs: &[char]) -> Vec<String> {
    let mut header = String::from("    ");
    let mut rows: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{} ", label))
        .collect();

    for window in windows {
        let width = window.week_count().max(window.label.chars().count());
        header.push_str(&format!("{:<width$} ", window.label, width = width));

        for (weekday, row) in rows.iter_mut().enumerate() {
            for week in 0..width {
                let ch = match window.cell_at(weekday, week) {
                    Some(cell) => cell.bucket().map_or(' ', |b| glyph(b, glyphs)),
                    None => ' ',
                };
                row.push(ch);
            }
            row.push(' ');
        }
    }

    std::iter::once(header).chain(rows).collect()
}

fn glyph(bucket: IntensityBucket, glyphs: &[char]) -> char {
    glyphs.get(bucket.level()).copied().unwrap_or('?')
}

fn print_markdown(summary: &ActivitySummary) {
    let stats = &summary.stats;
    let insights = &summary.insights;

    println!("# Submissions: {}", summary.period.display_name());
    println!();
    println!("## Summary");
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!("| Total submissions | {} |", stats.total_count);
    println!("| Active days | {} |", stats.active_days);
    println!("| Longest streak | {} |", stats.max_streak);
    println!("| Current streak | {} |", insights.current_streak);
    println!(
        "| Activity | {:.0}% of {} days |",
        insights.activity_percentage(stats.active_days),
        insights.total_days
    );
    if let Some(trend) = &insights.trend {
        println!("| vs previous period | {} |", format_delta(trend.delta_pct));
    }
    println!();

    println!("## Months");
    println!();
    println!("| Month | Days with submissions | Submissions |");
    println!("|-------|-----------------------|-------------|");
    for window in &summary.month_windows {
        let (active, total) = window.days().fold((0u64, 0u64), |(active, total), cell| {
            match cell {
                DayCell::Day { count, .. } if *count > 0 => (active + 1, total + count),
                _ => (active, total),
            }
        });
        println!(
            "| {} {} | {} | {} |",
            window.label,
            window.first_day.format("%Y"),
            active,
            total
        );
    }
    println!();
    println!("---");
    println!("*Generated by subheat on {}*", format_date(summary.today));
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn print_json(summary: &ActivitySummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
