use crate::domain::entities::{EVENING_CODE, MORNING_CODE, NIGHT_CODE};
use crate::domain::params::GenerateParams;

/// Maps (day-class, shift-code) to required headcount.
pub struct DemandTable {
    weekday: [(&'static str, i32); 3],
    holiday: [(&'static str, i32); 3],
}

impl DemandTable {
    pub fn new(params: &GenerateParams) -> Self {
        Self {
            weekday: [
                (MORNING_CODE, params.weekday_morning),
                (EVENING_CODE, params.weekday_evening),
                (NIGHT_CODE, params.weekday_night),
            ],
            holiday: [
                (MORNING_CODE, params.holiday_morning),
                (EVENING_CODE, params.holiday_evening),
                (NIGHT_CODE, params.holiday_night),
            ],
        }
    }

    pub fn required(&self, is_holiday: bool, code: &str) -> i32 {
        let table = if is_holiday { &self.holiday } else { &self.weekday };
        table
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, n)| (*n).max(0))
            .unwrap_or(0)
    }

    pub fn total_required(&self, is_holiday: bool) -> i32 {
        crate::domain::entities::WORK_CODES
            .iter()
            .map(|code| self.required(is_holiday, code))
            .sum()
    }
}
