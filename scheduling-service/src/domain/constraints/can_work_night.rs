use crate::domain::entities::NIGHT_CODE;

use super::{AssignmentContext, Rule};

/// Night assignments require `can_work_night`.
pub struct CanWorkNightRule;

impl Rule for CanWorkNightRule {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool {
        ctx.code != NIGHT_CODE || ctx.employee.can_work_night
    }
}
