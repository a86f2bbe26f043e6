use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::entities::AssignmentView;

/// Assignment response for `GET /api/v1/schedule/assignments`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentSerialize {
    pub employee_id: i64,
    pub day: NaiveDate,
    pub shift_code: String,
}

impl From<AssignmentView> for AssignmentSerialize {
    fn from(view: AssignmentView) -> Self {
        Self {
            employee_id: view.employee_id,
            day: view.day,
            shift_code: view.shift_code,
        }
    }
}
