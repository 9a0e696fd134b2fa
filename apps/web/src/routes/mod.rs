pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::directory::handlers as directory;
use crate::errors::AppError;
use crate::screening::handlers as screening;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(directory::dashboard_page))
        .route("/dashboard", get(directory::dashboard_page))
        .route("/job-postings", get(directory::job_postings_page))
        .route("/candidates", get(directory::candidates_page))
        .route("/ai-screening", get(screening::screening_page))
        .route("/settings", get(directory::settings_page))
        // Directory API
        .route("/api/v1/dashboard", get(directory::handle_dashboard))
        .route("/api/v1/jobs", get(directory::handle_list_jobs))
        .route("/api/v1/candidates", get(directory::handle_list_candidates))
        // Screening API
        .route("/api/v1/screening", get(screening::handle_get_state))
        .route("/api/v1/screening/jd", post(screening::handle_upload_jd))
        .route(
            "/api/v1/screening/resumes",
            post(screening::handle_upload_resumes),
        )
        .route(
            "/api/v1/screening/resumes/:index",
            delete(screening::handle_remove_resume),
        )
        .route("/api/v1/screening/analyze", post(screening::handle_analyze))
        .route("/api/v1/screening/reset", post(screening::handle_reset))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(screening::MAX_REQUEST_BYTES))
        .with_state(state)
}
