//! Calendar periods: ISO weeks and calendar quarters
//!
//! The diary links every daily note into a week, every week into a quarter,
//! and every quarter into a year, so the period arithmetic here has to agree
//! with ISO-8601 week numbering exactly: weeks start on Monday and week 1 is
//! the week containing the year's first Thursday.
//!
//! Quarters are calendar-month aligned (Q1 = Jan-Mar .. Q4 = Oct-Dec), not
//! ISO-week aligned, which is why mapping a week to its quarter needs the
//! boundary correction in [`Week::quarter`].

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{Result, WikiError};

// =============================================================================
// Week
// =============================================================================

/// An ISO-8601 week: Monday-start, identified by ISO year and week number.
///
/// Only representable weeks can be constructed: `Week::new(2019, 53)` fails
/// because ISO year 2019 has 52 weeks, while `Week::new(2020, 53)` succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    year: i32,
    week_no: u32,
}

impl Week {
    /// Create a week, validating the week number against the ISO calendar.
    pub fn new(year: i32, week_no: u32) -> Result<Self> {
        if NaiveDate::from_isoywd_opt(year, week_no, Weekday::Mon).is_none() {
            return Err(WikiError::invalid_period(format!("{year} W{week_no}")));
        }
        Ok(Self { year, week_no })
    }

    /// The ISO week containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week_no: iso.week(),
        }
    }

    /// ISO year of this week (may differ from the calendar year of its days).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Week number, 1..=52 or 53 in long years.
    pub fn week_no(&self) -> u32 {
        self.week_no
    }

    /// The i-th day of the week, 0-indexed from Monday.
    pub fn day(&self, i: u32) -> NaiveDate {
        self.first_day() + Duration::days(i64::from(i))
    }

    /// Monday of this week.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week_no, Weekday::Mon)
            .expect("week number validated at construction")
    }

    /// Sunday of this week.
    pub fn last_day(&self) -> NaiveDate {
        self.day(6)
    }

    /// All seven dates of the week, Monday first.
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..7).map(|i| self.day(i)).collect()
    }

    /// Monday through Friday.
    pub fn working_days(&self) -> Vec<NaiveDate> {
        (0..5).map(|i| self.day(i)).collect()
    }

    /// The following ISO week, rolling across year boundaries.
    pub fn next(&self) -> Week {
        Week::from_date(self.last_day() + Duration::days(1))
    }

    /// The preceding ISO week, rolling across year boundaries.
    pub fn prev(&self) -> Week {
        Week::from_date(self.first_day() - Duration::days(1))
    }

    /// The quarter this week belongs to.
    ///
    /// Normally the quarter containing the week's Monday. Weeks numbered in
    /// the new ISO year whose Monday still falls in late December would land
    /// in the old year's Q4; those are bumped forward so that e.g. 2020 W1
    /// (Monday 2019-12-30) stays inside 2020 Q1.
    pub fn quarter(&self) -> Quarter {
        let q = Quarter::from_date(self.first_day());
        if q.year() < self.year {
            return q.next();
        }
        q
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W{}", self.year, self.week_no)
    }
}

impl FromStr for Week {
    type Err = WikiError;

    /// Parse the wiki-link form `"<year> W<week_no>"`, e.g. `"2020 W1"`.
    fn from_str(s: &str) -> Result<Self> {
        let year: i32 = s
            .get(..4)
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| WikiError::invalid_period(s))?;
        let week_no: u32 = s
            .split_once('W')
            .and_then(|(_, w)| w.parse().ok())
            .ok_or_else(|| WikiError::invalid_period(s))?;
        Week::new(year, week_no)
    }
}

// =============================================================================
// Quarter
// =============================================================================

/// A calendar quarter of a year, `quarter` in 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    year: i32,
    quarter: u32,
}

impl Quarter {
    /// Create a quarter, rejecting values outside 1..=4.
    pub fn new(year: i32, quarter: u32) -> Result<Self> {
        if !(1..=4).contains(&quarter) {
            return Err(WikiError::invalid_period(format!("{year} Q{quarter}")));
        }
        Ok(Self { year, quarter })
    }

    /// The quarter containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: date.month0() / 3 + 1,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter_no(&self) -> u32 {
        self.quarter
    }

    /// The preceding quarter, rolling across year boundaries.
    pub fn prev(&self) -> Quarter {
        if self.quarter == 1 {
            return Quarter {
                year: self.year - 1,
                quarter: 4,
            };
        }
        Quarter {
            year: self.year,
            quarter: self.quarter - 1,
        }
    }

    /// The following quarter, rolling across year boundaries.
    pub fn next(&self) -> Quarter {
        if self.quarter == 4 {
            return Quarter {
                year: self.year + 1,
                quarter: 1,
            };
        }
        Quarter {
            year: self.year,
            quarter: self.quarter + 1,
        }
    }

    /// First calendar day of the quarter.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, 1 + 3 * (self.quarter - 1), 1)
            .expect("quarter validated at construction")
    }

    /// Last calendar day of the quarter.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// The distinct ISO weeks overlapping `[first_day, last_day)`,
    /// ascending, deduplicated.
    pub fn weeks(&self) -> Vec<Week> {
        let mut weeks: Vec<Week> = iter_dates(self.first_day(), self.last_day())
            .map(Week::from_date)
            .collect();
        weeks.sort();
        weeks.dedup();
        weeks
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Q{}", self.year, self.quarter)
    }
}

impl FromStr for Quarter {
    type Err = WikiError;

    /// Parse the wiki-link form `"<year> Q<quarter>"`, e.g. `"2020 Q1"`.
    fn from_str(s: &str) -> Result<Self> {
        let year: i32 = s
            .get(..4)
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| WikiError::invalid_period(s))?;
        let quarter: u32 = s
            .split_once('Q')
            .and_then(|(_, q)| q.parse().ok())
            .ok_or_else(|| WikiError::invalid_period(s))?;
        Quarter::new(year, quarter)
    }
}

// =============================================================================
// Date helpers
// =============================================================================

/// Iterate over all dates from `start` up to but not including `end`.
pub fn iter_dates(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt()).take_while(move |d| *d < end)
}

/// The working day before `date`: the previous date, or the prior Friday
/// when `date` is a Monday. Weekend inputs are not defined for this rule.
pub fn prev_working_day(date: NaiveDate) -> NaiveDate {
    if date.weekday() == Weekday::Mon {
        return date - Duration::days(3);
    }
    date - Duration::days(1)
}

/// The working day after `date`: the next date, or the following Monday
/// when `date` is a Friday. Weekend inputs are not defined for this rule.
pub fn next_working_day(date: NaiveDate) -> NaiveDate {
    if date.weekday() == Weekday::Fri {
        return date + Duration::days(3);
    }
    date + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_contains_its_dates() {
        let d = date(2020, 5, 6);
        let w = Week::from_date(d);
        assert!(w.days().contains(&d));
    }

    #[test]
    fn test_week_day_indexing() {
        let w = Week::new(2020, 19).unwrap();
        assert_eq!(w.day(0), date(2020, 5, 4));
        assert_eq!(w.day(4), date(2020, 5, 8));
        assert_eq!(w.last_day(), date(2020, 5, 10));
    }

    #[test]
    fn test_week_rejects_out_of_range() {
        assert!(Week::new(2020, 0).is_err());
        assert!(Week::new(2020, 54).is_err());
        // 2020 is a long ISO year, 2019 is not
        assert!(Week::new(2020, 53).is_ok());
        assert!(Week::new(2019, 53).is_err());
    }

    #[test]
    fn test_quarter_rejects_out_of_range() {
        assert!(Quarter::new(2020, 0).is_err());
        assert!(Quarter::new(2020, 5).is_err());
    }

    #[test]
    fn test_week_quarter_bump_at_year_edge() {
        // Monday of 2020 W1 is 2019-12-30, which sits in 2019 Q4
        let w = Week::new(2020, 1).unwrap();
        assert_eq!(w.first_day(), date(2019, 12, 30));
        assert_eq!(w.quarter(), Quarter::new(2020, 1).unwrap());
    }

    #[test]
    fn test_ordering() {
        let mut weeks = vec![
            Week::new(2020, 10).unwrap(),
            Week::new(2019, 52).unwrap(),
            Week::new(2020, 2).unwrap(),
        ];
        weeks.sort();
        assert_eq!(
            weeks,
            vec![
                Week::new(2019, 52).unwrap(),
                Week::new(2020, 2).unwrap(),
                Week::new(2020, 10).unwrap(),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("W1".parse::<Week>().is_err());
        assert!("2020 X1".parse::<Week>().is_err());
        assert!("2020 W0".parse::<Week>().is_err());
        assert!("2020 Q5".parse::<Quarter>().is_err());
        assert!("20".parse::<Quarter>().is_err());
    }
}
