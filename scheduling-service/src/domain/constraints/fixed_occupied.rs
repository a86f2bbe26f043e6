use super::{AssignmentContext, Rule};

/// In preserve mode, rejects a candidate whose (day, employee) cell is
/// already occupied by a fixed (pre-existing) assignment.
pub struct FixedOccupiedRule;

impl Rule for FixedOccupiedRule {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool {
        !ctx.fixed_today.contains_key(&ctx.employee.id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::employee_state::EmployeeState;
    use crate::domain::entities::{Employee, MORNING_CODE};

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
    fn rejects_when_day_already_has_a_fixed_assignment_for_this_employee() {
        let e = employee();
        let employees = vec![e.clone()];
        let state = EmployeeState::new(&employees);
        let assigned_today = HashSet::new();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut fixed_today = HashMap::new();
        fixed_today.insert(1, MORNING_CODE.to_string());

        let ctx = AssignmentContext {
            employee: &e,
            day,
            code: MORNING_CODE,
            state: &state,
            assigned_today: &assigned_today,
            fixed_today: &fixed_today,
            global_max_consecutive_work_days: 6,
            min_rest_days_per_7: 2,
        };

        assert!(!FixedOccupiedRule.check(&ctx));
    }

    #[test]
    fn admits_when_no_fixed_entry_for_the_day() {
        let e = employee();
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

        assert!(FixedOccupiedRule.check(&ctx));
    }
}
