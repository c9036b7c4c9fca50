//! Date-keyed index of activity records.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::ActivityRecord;

/// Submission counts keyed by calendar date.
///
/// Each date appears at most once. Iteration is in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityIndex {
    days: BTreeMap<NaiveDate, u64>,
}

impl ActivityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a date, replacing any previous value.
    pub fn insert(&mut self, date: NaiveDate, count: u64) -> Option<u64> {
        self.days.insert(date, count)
    }

    /// Count recorded for `date`, if the date is present.
    pub fn get(&self, date: NaiveDate) -> Option<u64> {
        self.days.get(&date).copied()
    }

    /// Count for `date`, zero when absent.
    pub fn count_on(&self, date: NaiveDate) -> u64 {
        self.get(date).unwrap_or(0)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, u64)> + '_ {
        self.days.iter().map(|(date, count)| (*date, *count))
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Entries with `start <= date <= end`.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            return Self::default();
        }
        Self {
            days: self
                .days
                .range(start..=end)
                .map(|(date, count)| (*date, *count))
                .collect(),
        }
    }

    /// Entries whose date satisfies `keep`.
    pub fn filter(&self, mut keep: impl FnMut(NaiveDate) -> bool) -> Self {
        Self {
            days: self
                .days
                .iter()
                .filter(|(date, _)| keep(**date))
                .map(|(date, count)| (*date, *count))
                .collect(),
        }
    }
}

impl FromIterator<(NaiveDate, u64)> for ActivityIndex {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, u64)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (date, count) in iter {
            index.insert(date, count);
        }
        index
    }
}

/// Build an index from records in caller order.
///
/// Later records overwrite earlier ones for the same date. Records without a
/// date are skipped.
pub fn build_index<'a, I>(records: I) -> ActivityIndex
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut index = ActivityIndex::new();
    let mut skipped = 0usize;

    for record in records {
        match record.date {
            Some(date) => {
                index.insert(date, record.count);
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped records without a date");
    }

    index
}
