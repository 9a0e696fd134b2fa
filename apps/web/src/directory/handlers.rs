//! Handlers for the presentational pages and their JSON counterparts.

use askama::Template;
use axum::response::Html;
use axum::Json;
use serde::Serialize;

use super::catalog;
use crate::errors::AppError;
use crate::models::directory::{ActivityItem, Candidate, DashboardStat, JobPosting};
use crate::views::{CandidatesPage, DashboardPage, JobPostingsPage, SettingsPage};

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: Vec<DashboardStat>,
    pub recent_activity: Vec<ActivityItem>,
}

/// GET / and GET /dashboard
pub async fn dashboard_page() -> Result<Html<String>, AppError> {
    let page = DashboardPage {
        stats: catalog::dashboard_stats(),
        activity: catalog::recent_activity(),
    };
    Ok(Html(page.render()?))
}

/// GET /job-postings
pub async fn job_postings_page() -> Result<Html<String>, AppError> {
    let page = JobPostingsPage {
        jobs: catalog::job_postings(),
    };
    Ok(Html(page.render()?))
}

/// GET /candidates
pub async fn candidates_page() -> Result<Html<String>, AppError> {
    let page = CandidatesPage {
        candidates: catalog::candidates(),
    };
    Ok(Html(page.render()?))
}

/// GET /settings
pub async fn settings_page() -> Result<Html<String>, AppError> {
    let page = SettingsPage {
        profile: catalog::profile(),
        notifications: catalog::notification_prefs(),
    };
    Ok(Html(page.render()?))
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard() -> Json<DashboardResponse> {
    Json(DashboardResponse {
        stats: catalog::dashboard_stats(),
        recent_activity: catalog::recent_activity(),
    })
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs() -> Json<Vec<JobPosting>> {
    Json(catalog::job_postings())
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates() -> Json<Vec<Candidate>> {
    Json(catalog::candidates())
}
