//! # subheat-core
//!
//! Core library for subheat - a calendar heat-map of daily submissions.
//!
//! This library provides:
//! - Activity records and record file loading
//! - The activity summarizer: date index, period selection, statistics,
//!   intensity buckets and month grids
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use subheat_core::activity::{summarize, Period};
//! use subheat_core::ActivityRecord;
//!
//! let records = vec![
//!     ActivityRecord::from_date_str("2024-01-01", 2),
//!     ActivityRecord::from_date_str("2024-01-02", 7),
//! ];
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//!
//! let summary = summarize(&records, Period::Rolling12Months, today);
//! assert_eq!(summary.stats.total_count, 9);
//! assert_eq!(summary.stats.max_streak, 2);
//! assert_eq!(summary.month_windows.len(), 12);
//! ```

// Re-export commonly used items at the crate root
pub use activity::{ActivityIndex, ActivitySummary, IntensityBucket, Period, Summarizer};
pub use config::Config;
pub use error::{Error, Result};
pub use records::load_records;
pub use types::*;

// Public modules
pub mod activity;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod records;
pub mod types;
