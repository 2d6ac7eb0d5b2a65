use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Project workday calendar: Monday through Friday, minus an explicit set of
/// exception dates (rain days and similar). Exceptions are plain calendar
/// dates with no time-of-day component; an exception landing on a weekend has
/// no additional effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayCalendar {
    exceptions: HashSet<NaiveDate>,
}

impl WorkdayCalendar {
    pub fn new() -> Self {
        Self {
            exceptions: HashSet::new(),
        }
    }

    pub fn from_exceptions<I>(exceptions: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            exceptions: exceptions.into_iter().collect(),
        }
    }

    /// Mark a single date as non-workable
    pub fn add_exception(&mut self, date: NaiveDate) {
        self.exceptions.insert(date);
    }

    /// Clear a previously marked exception
    pub fn remove_exception(&mut self, date: NaiveDate) {
        self.exceptions.remove(&date);
    }

    /// Flip an exception on or off; returns true when the date is an
    /// exception after the call
    pub fn toggle_exception(&mut self, date: NaiveDate) -> bool {
        if self.exceptions.remove(&date) {
            false
        } else {
            self.exceptions.insert(date);
            true
        }
    }

    pub fn is_exception(&self, date: NaiveDate) -> bool {
        self.exceptions.contains(&date)
    }

    /// Exception dates in sorted order, for display and serialization
    pub fn exceptions(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.exceptions.iter().copied().collect();
        dates.sort();
        dates
    }

    /// Check if a date is available for scheduling
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            && !self.exceptions.contains(&date)
    }

    /// Earliest workday on or after `from`; identity when `from` already
    /// qualifies
    pub fn next_workday(&self, from: NaiveDate) -> NaiveDate {
        let mut current = from;
        while !self.is_workday(current) {
            current = current + Duration::days(1);
        }
        current
    }

    /// Count workdays in `[start, end]` inclusive; 0 when `start > end`
    pub fn count_workdays(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let mut count = 0;
        let mut current = start;

        while current <= end {
            if self.is_workday(current) {
                count += 1;
            }
            current = current + Duration::days(1);
        }
        count
    }

    /// Date reached after `days` workdays have elapsed, counting the start
    /// date (snapped forward to a workday if needed) as day 1. For
    /// `days <= 1` the result is the snapped start.
    pub fn advance_by_workdays(&self, start: NaiveDate, days: i64) -> NaiveDate {
        let mut current = self.next_workday(start);
        let mut counted = 1;

        while counted < days {
            current = current + Duration::days(1);
            if self.is_workday(current) {
                counted += 1;
            }
        }
        current
    }

    /// All workdays in a date range, used for bar rendering
    pub fn workdays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = start;

        while current <= end {
            if self.is_workday(current) {
                days.push(current);
            }
            current = current + Duration::days(1);
        }
        days
    }
}
