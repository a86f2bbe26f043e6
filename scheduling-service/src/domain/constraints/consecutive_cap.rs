use super::{AssignmentContext, Rule};

/// Caps contiguous work-day streaks. An employee's own cap wins when
/// positive; otherwise the global parameter applies.
pub struct ConsecutiveCapRule;

impl Rule for ConsecutiveCapRule {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool {
        let cap = if ctx.employee.max_consecutive_work_days > 0 {
            ctx.employee.max_consecutive_work_days
        } else {
            ctx.global_max_consecutive_work_days
        };
        ctx.state.get(ctx.employee.id).consecutive_work < cap
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::employee_state::EmployeeState;
    use crate::domain::entities::{Employee, MORNING_CODE};

    fn employee(max_consecutive_work_days: i32) -> Employee {
        Employee {
            id: 1,
            active: true,
            max_work_days_per_month: 0,
            max_consecutive_work_days,
            can_work_night: true,
            night_only: false,
        }
    }

    #[test]
    fn rejects_once_employee_cap_reached() {
        let e = employee(3);
        let employees = vec![e.clone()];
        let mut state = EmployeeState::new(&employees);
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for i in 0..3 {
            state.mark_assigned(1, d1 + chrono::Duration::days(i), MORNING_CODE, false);
        }
        let day4 = d1 + chrono::Duration::days(3);

        let assigned_today = HashSet::new();
        let fixed_today = HashMap::new();
        let ctx = AssignmentContext {
            employee: &e,
            day: day4,
            code: MORNING_CODE,
            state: &state,
            assigned_today: &assigned_today,
            fixed_today: &fixed_today,
            global_max_consecutive_work_days: 6,
            min_rest_days_per_7: 2,
        };
        assert!(!ConsecutiveCapRule.check(&ctx));
    }

    #[test]
    fn falls_back_to_global_cap_when_employee_cap_is_zero() {
        let e = employee(0);
        let employees = vec![e.clone()];
        let state = EmployeeState::new(&employees);
        let assigned_today = HashSet::new();
        let fixed_today = HashMap::new();
        let ctx = AssignmentContext {
            employee: &e,
            day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            code: MORNING_CODE,
            state: &state,
            assigned_today: &assigned_today,
            fixed_today: &fixed_today,
            global_max_consecutive_work_days: 6,
            min_rest_days_per_7: 2,
        };
        assert!(ConsecutiveCapRule.check(&ctx));
    }

    #[test]
    fn double_zero_cap_rejects_every_work_assignment() {
        let e = employee(0);
        let employees = vec![e.clone()];
        let state = EmployeeState::new(&employees);
        let assigned_today = HashSet::new();
        let fixed_today = HashMap::new();
        let ctx = AssignmentContext {
            employee: &e,
            day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            code: MORNING_CODE,
            state: &state,
            assigned_today: &assigned_today,
            fixed_today: &fixed_today,
            global_max_consecutive_work_days: 0,
            min_rest_days_per_7: 2,
        };
        assert!(!ConsecutiveCapRule.check(&ctx));
    }
}
