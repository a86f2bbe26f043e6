use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// The unique fact `(employee_id, day) -> shift_type_id`.
///
/// `(employee_id, day)` is a uniqueness key enforced by persistence; the
/// in-memory core relies on the repository to uphold it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: i64,
    pub employee_id: i64,
    pub day: NaiveDate,
    pub shift_type_id: i64,
    pub note: Option<String>,
}

/// Assignment joined with its shift code, for read-only inspection via the
/// `GET /api/v1/schedule/assignments` route.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentView {
    pub employee_id: i64,
    pub day: NaiveDate,
    pub shift_code: String,
}
