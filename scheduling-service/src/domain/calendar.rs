use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("malformed month string: {0}, expected YYYY-MM")]
    BadMonthString(String),
}

/// Expands a `YYYY-MM` month string into its inclusive day range and
/// classifies each day as weekday or holiday.
pub struct CalendarModel {
    pub start: NaiveDate,
    pub end: NaiveDate,
    weekend_as_holiday: bool,
    holiday_dates: HashSet<NaiveDate>,
}

impl CalendarModel {
    pub fn parse(
        month: &str,
        weekend_as_holiday: bool,
        holiday_dates: HashSet<NaiveDate>,
    ) -> Result<Self, CalendarError> {
        let mut parts = month.splitn(2, '-');
        let year_str = parts.next().unwrap_or_default();
        let month_str = parts.next().unwrap_or_default();

        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(CalendarError::BadMonthString(month.to_string()));
        }

        let year: i32 = year_str
            .parse()
            .map_err(|_| CalendarError::BadMonthString(month.to_string()))?;
        let month_num: u32 = month_str
            .parse()
            .map_err(|_| CalendarError::BadMonthString(month.to_string()))?;

        let start = NaiveDate::from_ymd_opt(year, month_num, 1)
            .ok_or_else(|| CalendarError::BadMonthString(month.to_string()))?;

        let (next_year, next_month) = if month_num == 12 {
            (year + 1, 1)
        } else {
            (year, month_num + 1)
        };
        let next_start = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or_else(|| CalendarError::BadMonthString(month.to_string()))?;
        let end = next_start
            .pred_opt()
            .ok_or_else(|| CalendarError::BadMonthString(month.to_string()))?;

        Ok(Self {
            start,
            end,
            weekend_as_holiday,
            holiday_dates,
        })
    }

    /// Ascending, inclusive iteration over the days in range.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let mut cursor = Some(self.start);
        let end = self.end;
        std::iter::from_fn(move || {
            let day = cursor?;
            if day > end {
                return None;
            }
            cursor = day.succ_opt().filter(|d| *d <= end);
            Some(day)
        })
    }

    pub fn is_holiday(&self, day: NaiveDate) -> bool {
        self.holiday_dates.contains(&day)
            || (self.weekend_as_holiday
                && matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
    }
}
