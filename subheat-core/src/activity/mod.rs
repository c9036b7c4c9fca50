//! Activity summarizer
//!
//! Turns daily submission records into heat-map data in three steps:
//! - **Index** ([`index`]): records keyed by date, last write wins
//! - **Period** ([`period`]): restrict the index to the rolling 12 months or
//!   one calendar year
//! - **Statistics and buckets** ([`stats`], [`bucket`], [`calendar`]): totals,
//!   streaks, per-day intensity and the twelve month grids
//!
//! Every step is a pure function of its inputs. "Today" is always passed in;
//! nothing here reads the clock.

pub mod bucket;
pub mod calendar;
pub mod index;
pub mod insights;
pub mod period;
pub mod stats;
pub mod summary;

pub use bucket::IntensityBucket;
pub use calendar::{month_windows, window_anchor, DayCell, MonthWindow, WINDOW_COUNT};
pub use index::{build_index, ActivityIndex};
pub use insights::{PeakDay, PeriodInsights, TrendComparison};
pub use period::{rolling_start, Period};
pub use stats::{current_streak, longest_streak, max_streak, total_count, PeriodStats, StreakRange};
pub use summary::{summarize, summarize_index, ActivitySummary, Summarizer};
