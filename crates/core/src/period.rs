//! Calendar periods used for filtering dated entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive, date-only period. Open ends are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn inclusive_on_both_ends() {
        let range = DateRange::new(Some(day(5)), Some(day(9)));
        assert!(!range.contains(day(4)));
        assert!(range.contains(day(5)));
        assert!(range.contains(day(9)));
        assert!(!range.contains(day(10)));
        assert!(range.is_bounded());
    }

    #[test]
    fn open_ends_are_unbounded() {
        assert!(DateRange::all().contains(day(1)));
        assert!(!DateRange::all().is_bounded());
        assert!(DateRange::new(None, Some(day(2))).contains(day(1)));
        assert!(!DateRange::new(Some(day(2)), None).contains(day(1)));
    }
}
