use crate::domain::entities::{MORNING_CODE, NIGHT_CODE};

use super::{AssignmentContext, Rule};

/// The sequence (night, morning) never appears on consecutive days for the
/// same employee.
pub struct NightToMorningRule;

impl Rule for NightToMorningRule {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool {
        if ctx.code != MORNING_CODE {
            return true;
        }
        ctx.state
            .yesterday_work_code(ctx.employee.id, ctx.day)
            .as_deref()
            != Some(NIGHT_CODE)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::employee_state::EmployeeState;
    use crate::domain::entities::Employee;

    fn employee() -> Employee {
        Employee {
            id: 1,
            active: true,
            max_work_days_per_month: 0,
            max_consecutive_work_days: 0,
            can_work_night: true,
            night_only: false,
        }
    }

    #[test]
    fn rejects_morning_the_day_after_night() {
        let e = employee();
        let employees = vec![e.clone()];
        let mut state = EmployeeState::new(&employees);
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let d2 = d1.succ_opt().unwrap();
        state.mark_assigned(1, d1, NIGHT_CODE, false);

        let assigned_today = HashSet::new();
        let fixed_today = HashMap::new();
        let ctx = AssignmentContext {
            employee: &e,
            day: d2,
            code: MORNING_CODE,
            state: &state,
            assigned_today: &assigned_today,
            fixed_today: &fixed_today,
            global_max_consecutive_work_days: 6,
            min_rest_days_per_7: 2,
        };
        assert!(!NightToMorningRule.check(&ctx));
    }

    #[test]
    fn admits_evening_or_night_the_day_after_night() {
        let e = employee();
        let employees = vec![e.clone()];
        let mut state = EmployeeState::new(&employees);
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let d2 = d1.succ_opt().unwrap();
        state.mark_assigned(1, d1, NIGHT_CODE, false);

        let assigned_today = HashSet::new();
        let fixed_today = HashMap::new();
        let ctx = AssignmentContext {
            employee: &e,
            day: d2,
            code: NIGHT_CODE,
            state: &state,
            assigned_today: &assigned_today,
            fixed_today: &fixed_today,
            global_max_consecutive_work_days: 6,
            min_rest_days_per_7: 2,
        };
        assert!(NightToMorningRule.check(&ctx));
    }
}
