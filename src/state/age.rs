//! Age calculation

use chrono::{Datelike, Local, NaiveDate};

/// Source of the current calendar date
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Number of complete years between `dob` and `today`.
///
/// One year is subtracted when this year's birthday has not happened yet.
pub fn calculate_age(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}
