//! Gregorian date arithmetic based on absolute day numbers.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::{
    ANCHOR_DATE, CalError, CalendarDate, DAYS_BEFORE_MONTH, FIRST_DAY, LayoutState,
    MONTHS_PER_YEAR, MonthLayout,
};

/// Check if a year is a leap year: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Absolute number of days between two dates, in either order.
pub fn days_between(a: CalendarDate, b: CalendarDate) -> u64 {
    a.day_number().abs_diff(b.day_number())
}

impl CalendarDate {
    /// Build a date, rejecting components that do not name a real day.
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self, CalError> {
        let valid = year >= 1
            && (1..=MONTHS_PER_YEAR).contains(&month)
            && (1..=days_in_month(year, month)).contains(&day);
        if !valid {
            return Err(CalError::InvalidDate { year, month, day });
        }
        Ok(CalendarDate { year, month, day })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Day count since the proleptic epoch, where 0001-01-01 is day 1.
    pub fn day_number(&self) -> u64 {
        let y = u64::from(self.year - 1);
        let days_before_year = y * 365 + y / 4 - y / 100 + y / 400;

        let mut days_before_month = u64::from(DAYS_BEFORE_MONTH[(self.month - 1) as usize]);
        if self.month > 2 && is_leap_year(self.year) {
            days_before_month += 1;
        }

        days_before_year + days_before_month + u64::from(self.day)
    }

    /// Weekday of this date, counted from the Sunday anchor.
    pub fn weekday(&self) -> Weekday {
        let offset = (self.day_number() as i64 - ANCHOR_DATE.day_number() as i64).rem_euclid(7);
        // offset: 0=Sun, 1=Mon, 2=Tue, 3=Wed, 4=Thu, 5=Fri, 6=Sat
        match offset {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => unreachable!(),
        }
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = CalError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        i32::try_from(date.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, date.month, date.day))
            .ok_or(CalError::InvalidDate {
                year: date.year,
                month: date.month,
                day: date.day,
            })
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u32::try_from(date.year()).map_err(|_| CalError::InvalidDate {
            year: 0,
            month: date.month(),
            day: date.day(),
        })?;
        CalendarDate::new(year, date.month(), date.day())
    }
}

impl MonthLayout {
    /// Build the printer state for a month, starting at day 1.
    pub fn new(year: u32, month: u32) -> Result<Self, CalError> {
        let first = CalendarDate::new(year, month, FIRST_DAY)?;
        Ok(MonthLayout {
            year: first.year,
            month: first.month,
            last_day: days_in_month(year, month),
            next_day: first.day,
        })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Last day of the month: 28-31 per the month and leap-year rule.
    pub fn last_day(&self) -> u32 {
        self.last_day
    }

    pub fn state(&self) -> LayoutState {
        if self.next_day > self.last_day {
            LayoutState::Done
        } else if self.next_day == FIRST_DAY {
            LayoutState::HeaderPending
        } else {
            LayoutState::PrintingWeeks
        }
    }

    /// Column (0 = Sunday) that day 1 falls into.
    pub fn first_weekday_column(&self) -> usize {
        let first = CalendarDate {
            year: self.year,
            month: self.month,
            day: FIRST_DAY,
        };
        first.weekday().num_days_from_sunday() as usize
    }
}
