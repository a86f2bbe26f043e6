use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::requests::{FillOffRequest, GenerateRequest};
use crate::api::state::AppState;
use crate::domain::params::{FillOffResult, GenerateResult};
use crate::presentation::AssignmentSerialize;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scheduling Service API",
        version = "1.0.0",
        description = "Monthly shift schedule generation API"
    ),
    paths(
        crate::api::handlers::schedule_handlers::generate_handler,
        crate::api::handlers::schedule_handlers::fill_off_handler,
        crate::api::handlers::schedule_handlers::list_assignments_handler,
    ),
    components(schemas(
        GenerateRequest,
        FillOffRequest,
        GenerateResult,
        FillOffResult,
        AssignmentSerialize,
        shared::ApiResponse<GenerateResult>,
        shared::ApiResponse<FillOffResult>,
        shared::ApiResponse<Vec<AssignmentSerialize>>,
    ))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/schedule/generate", post(handlers::generate_handler))
        .route("/schedule/fill-off", post(handlers::fill_off_handler))
        .route(
            "/schedule/assignments",
            get(handlers::list_assignments_handler),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
