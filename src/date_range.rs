use crate::date::{parse_date, DateParseError};
use chrono::NaiveDate;

/// An ordered pair of dates. No ordering is enforced; a reversed pair simply
/// yields no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: &str, end: &str) -> Result<Self, DateParseError> {
        Ok(DateRange {
            start: parse_date(start)?,
            end: parse_date(end)?,
        })
    }

    /// Calendar days from `start` up to but excluding `end`, one day apart.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn excludes_the_end_date() {
        let range = DateRange::new("2024-01-01", "2024-02-01").unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 31);
        assert_eq!(days.first(), Some(&date(2024, 1, 1)));
        assert_eq!(days.last(), Some(&date(2024, 1, 31)));
        assert!(!days.contains(&range.end));
    }

    #[test]
    fn steps_by_exactly_one_day() {
        let range = DateRange::new("2024-01-01", "2024-03-01").unwrap();
        let days: Vec<_> = range.days().collect();
        for pair in days.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn empty_when_start_is_not_before_end() {
        let same = DateRange::new("2024-01-01", "2024-01-01").unwrap();
        assert_eq!(same.days().count(), 0);

        let reversed = DateRange::new("2024-01-02", "2024-01-01").unwrap();
        assert_eq!(reversed.days().count(), 0);
    }

    #[test]
    fn rolls_over_leap_day() {
        let leap = DateRange::new("2024-02-28", "2024-03-01").unwrap();
        let days: Vec<_> = leap.days().collect();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29)]);

        let common = DateRange::new("2023-02-28", "2023-03-01").unwrap();
        let days: Vec<_> = common.days().collect();
        assert_eq!(days, vec![date(2023, 2, 28)]);
    }

    #[test]
    fn rolls_over_year_boundary() {
        let range = DateRange::new("2023-12-31", "2024-01-02").unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![date(2023, 12, 31), date(2024, 1, 1)]);
    }

    #[test]
    fn reports_the_offending_input() {
        let err = DateRange::new("2024-01-01", "bogus").unwrap_err();
        assert_eq!(err, DateParseError("bogus".to_string()));
    }
}
