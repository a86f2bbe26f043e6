use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::ApiResponse;
use utoipa::IntoParams;

use crate::api::requests::{FillOffRequest, GenerateRequest};
use crate::api::state::AppState;
use crate::domain::blank_fill;
use crate::domain::calendar::CalendarModel;
use crate::domain::entities::AssignmentView;
use crate::domain::params::{FillOffResult, GenerateParams, GenerateResult};
use crate::domain::repositories::SchedulingRepository;
use crate::domain::scheduler;
use crate::presentation::AssignmentSerialize;

#[derive(Debug, Deserialize, IntoParams)]
pub struct MonthQuery {
    /// Target month as `YYYY-MM`.
    pub month: String,
}

fn map_domain_error(err: shared::DomainError) -> (StatusCode, String) {
    use shared::DomainError::*;
    let status = match &err {
        NotFound(_) => StatusCode::NOT_FOUND,
        InvalidInput(_) => StatusCode::BAD_REQUEST,
        DatabaseError(_) | InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

/// Generate a month's schedule.
#[utoipa::path(
    post,
    path = "/api/v1/schedule/generate",
    params(MonthQuery),
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Schedule generated", body = ApiResponse<GenerateResult>),
        (status = 400, description = "Invalid month or parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedule"
)]
pub async fn generate_handler(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
    Json(request): Json<GenerateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut repo = state.repo_factory.begin().await.map_err(map_domain_error)?;

    let params: GenerateParams = request.into();
    let result = scheduler::generate(repo.as_mut(), &query.month, params)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("schedule generated", result)),
    ))
}

/// Fill every unoccupied day with an off assignment.
#[utoipa::path(
    post,
    path = "/api/v1/schedule/fill-off",
    params(MonthQuery),
    request_body = FillOffRequest,
    responses(
        (status = 200, description = "Off days filled", body = ApiResponse<FillOffResult>),
        (status = 400, description = "Invalid month"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedule"
)]
pub async fn fill_off_handler(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
    Json(request): Json<FillOffRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut repo = state.repo_factory.begin().await.map_err(map_domain_error)?;

    let result = blank_fill::fill_off(repo.as_mut(), &query.month, request.active_only)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("off days filled", result)),
    ))
}

/// List assignments for a month.
#[utoipa::path(
    get,
    path = "/api/v1/schedule/assignments",
    params(MonthQuery),
    responses(
        (status = 200, description = "Assignments for the month", body = ApiResponse<Vec<AssignmentSerialize>>),
        (status = 400, description = "Invalid month"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedule"
)]
pub async fn list_assignments_handler(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let calendar = CalendarModel::parse(&query.month, false, Default::default())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut repo = state.repo_factory.begin().await.map_err(map_domain_error)?;

    let shift_types = repo.list_shift_types().await.map_err(map_domain_error)?;
    let code_by_id: HashMap<i64, String> = shift_types
        .into_iter()
        .map(|s| (s.id, s.code))
        .collect();

    let mut assignments = repo
        .list_assignments_in(calendar.start, calendar.end)
        .await
        .map_err(map_domain_error)?;
    assignments.sort_by_key(|a| (a.day, a.employee_id));

    let views: Vec<AssignmentSerialize> = assignments
        .into_iter()
        .map(|a| {
            let shift_code = code_by_id
                .get(&a.shift_type_id)
                .cloned()
                .unwrap_or_default();
            AssignmentSerialize::from(AssignmentView {
                employee_id: a.employee_id,
                day: a.day,
                shift_code,
            })
        })
        .collect();

    let total = views.len() as u64;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_total("assignments retrieved", views, total)),
    ))
}
