use crate::domain::employee_state::EmployeeState;
use crate::domain::entities::Employee;
use crate::domain::params::GenerateParams;
use chrono::NaiveDate;

/// A candidate admitted by the [`crate::domain::constraints::ConstraintChecker`],
/// ready to be scored.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub employee_id: i64,
}

/// Lexicographic scoring over admitted candidates. Lower sorts first.
///
/// Both modes share the same shape of key (a tuple of `i64`s) so the two
/// branches can return homogeneous `Vec<i64>` keys and the caller sorts
/// generically; a fixed-width array would also work but the tuple-of-keys
/// form keeps each field's derivation next to its doc comment.
pub struct Ranker<'a> {
    params: &'a GenerateParams,
}

impl<'a> Ranker<'a> {
    pub fn new(params: &'a GenerateParams) -> Self {
        Self { params }
    }

    fn same_shift_penalty(&self, state: &EmployeeState, employee_id: i64, day: NaiveDate, code: &str) -> i64 {
        if !self.params.prefer_same_shift_within_block {
            return 0;
        }
        match state.yesterday_work_code(employee_id, day) {
            Some(ref prev) if prev == code => 0,
            Some(_) => 1,
            None => 0,
        }
    }

    fn key(
        &self,
        state: &EmployeeState,
        employee_id: i64,
        day: NaiveDate,
        code: &str,
        is_holiday: bool,
    ) -> Vec<i64> {
        let s = state.get(employee_id);
        let per_shift = *s.per_shift_count.get(code).unwrap_or(&0) as i64;
        let holiday_if_holiday = if is_holiday { s.holiday_work as i64 } else { 0 };
        let penalty = self.same_shift_penalty(state, employee_id, day, code);

        if self.params.prefer_clustered_work {
            let not_worked_yesterday = if state.worked_yesterday(employee_id, day) { 0 } else { 1 };
            vec![
                not_worked_yesterday,
                penalty,
                per_shift,
                -(s.consecutive_work as i64),
                s.total_work as i64,
                holiday_if_holiday,
                employee_id,
            ]
        } else {
            vec![
                s.consecutive_work as i64,
                penalty,
                per_shift,
                s.total_work as i64,
                holiday_if_holiday,
                employee_id,
            ]
        }
    }

    /// Filters `candidates` to those whose current block shift is
    /// compatible with `code`, falling back to the full set (and signalling
    /// that a forced shift change occurred) if the filter would otherwise
    /// empty it.
    pub fn filter_block_shift(
        &self,
        state: &EmployeeState,
        candidates: &[Candidate],
        code: &str,
    ) -> (Vec<Candidate>, bool) {
        if !self.params.prefer_same_shift_within_block {
            return (candidates.to_vec(), false);
        }
        let filtered: Vec<Candidate> = candidates
            .iter()
            .copied()
            .filter(|c| {
                let block = &state.get(c.employee_id).block_shift;
                block.is_none() || block.as_deref() == Some(code)
            })
            .collect();

        if filtered.is_empty() && !candidates.is_empty() {
            (candidates.to_vec(), true)
        } else {
            (filtered, false)
        }
    }

    /// Picks the best candidate by ascending lexicographic key, with the
    /// employee id as the final, deterministic tie-breaker.
    pub fn pick_best(
        &self,
        state: &EmployeeState,
        candidates: &[Candidate],
        day: NaiveDate,
        code: &str,
        is_holiday: bool,
    ) -> Option<Candidate> {
        candidates
            .iter()
            .min_by_key(|c| self.key(state, c.employee_id, day, code, is_holiday))
            .copied()
    }
}
