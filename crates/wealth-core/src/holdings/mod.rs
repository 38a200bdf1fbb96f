pub mod asset;
pub mod liability;
pub mod net_worth;
pub mod valuation;

use chrono::{Datelike, NaiveDate};

/// Whole calendar months from `start` to `end`; a month counts once its
/// day-of-month is reached. Zero when `end` is not after `start`.
pub(crate) fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_whole_months_between() {
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 3, 15)), 2);
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 3, 14)), 1);
        assert_eq!(whole_months_between(date(2023, 11, 30), date(2024, 2, 29)), 2);
        assert_eq!(whole_months_between(date(2024, 5, 1), date(2024, 4, 1)), 0);
    }
}
