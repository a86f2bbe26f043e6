use super::{AssignmentContext, Rule};

/// Any sliding 7-day window (the 6 previously processed days plus the
/// candidate day) must contain at least `min_rest_days_per_7` rest days.
pub struct SlidingRestRule;

impl Rule for SlidingRestRule {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool {
        let min_rest = ctx.min_rest_days_per_7.clamp(0, 7);
        let max_work_in_7 = 7 - min_rest;
        if max_work_in_7 >= 7 {
            return true;
        }
        let worked_in_window = ctx
            .state
            .get(ctx.employee.id)
            .last6_work_flags
            .iter()
            .filter(|w| **w)
            .count() as i32;
        worked_in_window + 1 <= max_work_in_7
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

    fn ctx<'a>(
        e: &'a Employee,
        state: &'a EmployeeState,
        assigned_today: &'a HashSet<i64>,
        fixed_today: &'a HashMap<i64, String>,
        min_rest_days_per_7: i32,
    ) -> AssignmentContext<'a> {
        AssignmentContext {
            employee: e,
            day: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            code: MORNING_CODE,
            state,
            assigned_today,
            fixed_today,
            global_max_consecutive_work_days: 6,
            min_rest_days_per_7,
        }
    }

    #[test]
    fn zero_min_rest_disables_the_window_check() {
        let e = employee();
        let employees = vec![e.clone()];
        let mut state = EmployeeState::new(&employees);
        for _ in 0..6 {
            state.tick_history(1, MORNING_CODE);
        }
        let assigned_today = HashSet::new();
        let fixed_today = HashMap::new();
        let c = ctx(&e, &state, &assigned_today, &fixed_today, 0);
        assert!(SlidingRestRule.check(&c));
    }

    #[test]
    fn rejects_when_window_already_saturated_with_work() {
        let e = employee();
        let employees = vec![e.clone()];
        let mut state = EmployeeState::new(&employees);
        // min_rest_days_per_7 = 2 => max_work_in_7 = 5; 5 prior work days saturates it.
        for _ in 0..5 {
            state.tick_history(1, MORNING_CODE);
        }
        let assigned_today = HashSet::new();
        let fixed_today = HashMap::new();
        let c = ctx(&e, &state, &assigned_today, &fixed_today, 2);
        assert!(!SlidingRestRule.check(&c));
    }

    #[test]
    fn admits_when_window_has_room() {
        let e = employee();
        let employees = vec![e.clone()];
        let mut state = EmployeeState::new(&employees);
        for _ in 0..4 {
            state.tick_history(1, MORNING_CODE);
        }
        let assigned_today = HashSet::new();
        let fixed_today = HashMap::new();
        let c = ctx(&e, &state, &assigned_today, &fixed_today, 2);
        assert!(SlidingRestRule.check(&c));
    }
}
