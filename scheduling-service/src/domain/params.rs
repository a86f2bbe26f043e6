use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_one() -> i32 {
    1
}

fn default_two() -> i32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_six() -> i32 {
    6
}

fn default_min_rest() -> i32 {
    2
}

/// The recognized knobs for a `generate` run.
///
/// Defaults below match the library default (`overwrite = true`); the HTTP
/// request DTO in [`crate::api::requests`] overrides `overwrite` to `false`
/// to make preserve mode the safer default over the network, matching the
/// original route's intentionally different default.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GenerateParams {
    #[serde(default = "default_one")]
    pub weekday_morning: i32,
    #[serde(default = "default_one")]
    pub weekday_evening: i32,
    #[serde(default = "default_one")]
    pub weekday_night: i32,
    #[serde(default = "default_two")]
    pub holiday_morning: i32,
    #[serde(default = "default_two")]
    pub holiday_evening: i32,
    #[serde(default = "default_one")]
    pub holiday_night: i32,
    #[serde(default = "default_true")]
    pub weekend_as_holiday: bool,
    pub holiday_dates: HashSet<NaiveDate>,
    #[serde(default = "default_true")]
    pub overwrite: bool,
    #[serde(default = "default_true")]
    pub trim_overstaff_to_off: bool,
    #[serde(default = "default_true")]
    pub prefer_clustered_work: bool,
    #[serde(default = "default_true")]
    pub prefer_same_shift_within_block: bool,
    #[serde(default = "default_six")]
    pub max_consecutive_work_days: i32,
    #[serde(default = "default_min_rest")]
    pub min_rest_days_per_7: i32,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            weekday_morning: 1,
            weekday_evening: 1,
            weekday_night: 1,
            holiday_morning: 2,
            holiday_evening: 2,
            holiday_night: 1,
            weekend_as_holiday: true,
            holiday_dates: HashSet::new(),
            overwrite: true,
            trim_overstaff_to_off: true,
            prefer_clustered_work: true,
            prefer_same_shift_within_block: true,
            max_consecutive_work_days: 6,
            min_rest_days_per_7: 2,
        }
    }
}

/// Result of a `generate` run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateResult {
    pub created: i64,
    pub deleted: i64,
    pub warnings: Vec<String>,
}

/// Result of a `fill_off` run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FillOffResult {
    pub created: i64,
    pub warnings: Vec<String>,
}
