//! Intensity buckets for heat-map cells.

use serde::Serialize;

/// Visual weight of a day, from no submissions to very many.
///
/// The scale is fixed: `0`, `1-5`, `6-12`, `13-20`, `21+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBucket {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl IntensityBucket {
    /// All buckets in ascending order.
    pub const ALL: [IntensityBucket; 5] = [
        IntensityBucket::None,
        IntensityBucket::Low,
        IntensityBucket::Medium,
        IntensityBucket::High,
        IntensityBucket::VeryHigh,
    ];

    /// Classify a day's count.
    pub fn for_count(count: u64) -> Self {
        match count {
            0 => IntensityBucket::None,
            1..=5 => IntensityBucket::Low,
            6..=12 => IntensityBucket::Medium,
            13..=20 => IntensityBucket::High,
            _ => IntensityBucket::VeryHigh,
        }
    }

    /// Position on the scale, 0 for `None` through 4 for `VeryHigh`.
    pub fn level(&self) -> usize {
        *self as usize
    }

    /// Inclusive count range for display in legends.
    pub fn range_label(&self) -> &'static str {
        match self {
            IntensityBucket::None => "0",
            IntensityBucket::Low => "1-5",
            IntensityBucket::Medium => "6-12",
            IntensityBucket::High => "13-20",
            IntensityBucket::VeryHigh => "21+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(IntensityBucket::for_count(0), IntensityBucket::None);
        assert_eq!(IntensityBucket::for_count(1), IntensityBucket::Low);
        assert_eq!(IntensityBucket::for_count(5), IntensityBucket::Low);
        assert_eq!(IntensityBucket::for_count(6), IntensityBucket::Medium);
        assert_eq!(IntensityBucket::for_count(12), IntensityBucket::Medium);
        assert_eq!(IntensityBucket::for_count(13), IntensityBucket::High);
        assert_eq!(IntensityBucket::for_count(20), IntensityBucket::High);
        assert_eq!(IntensityBucket::for_count(21), IntensityBucket::VeryHigh);
        assert_eq!(IntensityBucket::for_count(u64::MAX), IntensityBucket::VeryHigh);
    }

    #[test]
    fn test_bucket_is_monotonic() {
        let mut previous = IntensityBucket::None;
        for count in 0..100 {
            let bucket = IntensityBucket::for_count(count);
            assert!(bucket >= previous);
            previous = bucket;
        }
    }

    #[test]
    fn test_levels() {
        let levels: Vec<usize> = IntensityBucket::ALL.iter().map(|b| b.level()).collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4]);
    }
}
