use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A roster member participating in schedule generation.
///
/// Loaded fresh at the start of every run; treated as immutable for the
/// duration of that run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: i64,
    pub active: bool,
    /// `0` means unlimited.
    pub max_work_days_per_month: i32,
    /// `0` means "defer to the global `max_consecutive_work_days` parameter".
    pub max_consecutive_work_days: i32,
    pub can_work_night: bool,
    pub night_only: bool,
}

impl Employee {
    /// Enforces the `night_only => can_work_night` coercion described for
    /// the persisted-row boundary. Called once per row as it is loaded;
    /// the constraint checker trusts the invariant already holds and does
    /// not re-derive it.
    pub fn normalize(mut self) -> Self {
        if self.night_only {
            self.can_work_night = true;
        }
        self
    }
}
