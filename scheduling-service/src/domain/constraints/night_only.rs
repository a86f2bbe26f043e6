use crate::domain::entities::NIGHT_CODE;

use super::{AssignmentContext, Rule};

/// A `night_only` employee may only ever be assigned the night code.
pub struct NightOnlyRule;

impl Rule for NightOnlyRule {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool {
        !ctx.employee.night_only || ctx.code == NIGHT_CODE
    }
}
