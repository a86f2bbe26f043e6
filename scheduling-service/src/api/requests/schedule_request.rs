use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::params::GenerateParams;

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

/// Request body for `POST /api/v1/schedule/generate`.
///
/// Mirrors [`GenerateParams`] field-for-field but overrides `overwrite`'s
/// default to `false`: the library default favors regenerating a blank
/// month, but a network caller should have to opt in explicitly to
/// discarding assignments that already exist.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(default)]
pub struct GenerateRequest {
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

impl Default for GenerateRequest {
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
            overwrite: false,
            trim_overstaff_to_off: true,
            prefer_clustered_work: true,
            prefer_same_shift_within_block: true,
            max_consecutive_work_days: 6,
            min_rest_days_per_7: 2,
        }
    }
}

impl From<GenerateRequest> for GenerateParams {
    fn from(r: GenerateRequest) -> Self {
        Self {
            weekday_morning: r.weekday_morning,
            weekday_evening: r.weekday_evening,
            weekday_night: r.weekday_night,
            holiday_morning: r.holiday_morning,
            holiday_evening: r.holiday_evening,
            holiday_night: r.holiday_night,
            weekend_as_holiday: r.weekend_as_holiday,
            holiday_dates: r.holiday_dates,
            overwrite: r.overwrite,
            trim_overstaff_to_off: r.trim_overstaff_to_off,
            prefer_clustered_work: r.prefer_clustered_work,
            prefer_same_shift_within_block: r.prefer_same_shift_within_block,
            max_consecutive_work_days: r.max_consecutive_work_days,
            min_rest_days_per_7: r.min_rest_days_per_7,
        }
    }
}

/// Request body for `POST /api/v1/schedule/fill-off`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(default)]
pub struct FillOffRequest {
    pub active_only: bool,
}

impl Default for FillOffRequest {
    fn default() -> Self {
        Self { active_only: true }
    }
}
