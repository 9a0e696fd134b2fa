//! Axum route handlers for the screening tool: upload bookkeeping plus the
//! one submission cycle against the external analysis service.

use askama::Template;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::response::Html;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Serialize;
use tracing::{debug, info};

use super::batch::UploadedDoc;
use super::session::{ScreeningSession, SubmissionPhase, SubmitDecision};
use crate::errors::AppError;
use crate::models::screening::{DocSummary, ScreeningOutcome};
use crate::state::AppState;
use crate::views::ScreeningPage;

/// Ceiling for one multipart request; individual files are capped separately.
pub const MAX_REQUEST_BYTES: usize = 64 * 1024 * 1024;
const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;
const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Snapshot of one session, echoed back by every screening endpoint.
#[derive(Debug, Serialize)]
pub struct ScreeningState {
    pub phase: SubmissionPhase,
    pub job_description: Option<DocSummary>,
    pub resumes: Vec<DocSummary>,
    pub show_results: bool,
    pub outcome: Option<ScreeningOutcome>,
}

impl ScreeningState {
    pub fn of(session: &ScreeningSession) -> Self {
        ScreeningState {
            phase: session.phase(),
            job_description: session.batch().job_description().map(|d| d.summary()),
            resumes: session.batch().resumes().iter().map(|d| d.summary()).collect(),
            show_results: session.show_results(),
            outcome: session.outcome().cloned(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Display-side mirror of the submit gate; the session is authoritative.
    pub fn can_submit(&self) -> bool {
        self.job_description.is_some() && !self.resumes.is_empty() && !self.is_submitting()
    }
}

/// GET /ai-screening
pub async fn screening_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let (jar, session) = state.sessions.resolve(jar);
    let snapshot = {
        let session = session.lock().expect("session poisoned");
        ScreeningState::of(&session)
    };
    let page = ScreeningPage { state: snapshot };
    Ok((jar, Html(page.render()?)))
}

/// GET /api/v1/screening
pub async fn handle_get_state(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ScreeningState>) {
    let (jar, session) = state.sessions.resolve(jar);
    let session = session.lock().expect("session poisoned");
    (jar, Json(ScreeningState::of(&session)))
}

/// POST /api/v1/screening/jd
///
/// Accepts one document under the `jd` field; replaces any prior selection.
pub async fn handle_upload_jd(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Json<ScreeningState>), AppError> {
    let mut jd = None;
    while let Some(field) = next_field(&mut multipart).await? {
        match field.name().unwrap_or("") {
            "jd" => jd = Some(read_document(field).await?),
            _ => drain(field).await,
        }
    }
    let jd = jd.ok_or_else(|| AppError::Validation("missing 'jd' file field".to_string()))?;

    let (jar, session) = state.sessions.resolve(jar);
    let snapshot = {
        let mut session = session.lock().expect("session poisoned");
        info!("job description selected: {}", jd.name);
        session.set_job_description(jd);
        ScreeningState::of(&session)
    };
    Ok((jar, Json(snapshot)))
}

/// POST /api/v1/screening/resumes
///
/// Appends every file under the repeated `resumes` field. Never de-duplicates;
/// the same file name may appear at several positions.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Json<ScreeningState>), AppError> {
    let mut docs = Vec::new();
    while let Some(field) = next_field(&mut multipart).await? {
        match field.name().unwrap_or("") {
            "resumes" => docs.push(read_document(field).await?),
            _ => drain(field).await,
        }
    }
    if docs.is_empty() {
        return Err(AppError::Validation(
            "missing 'resumes' file field".to_string(),
        ));
    }

    let (jar, session) = state.sessions.resolve(jar);
    let snapshot = {
        let mut session = session.lock().expect("session poisoned");
        info!("added {} resumes to the batch", docs.len());
        session.add_resumes(docs);
        ScreeningState::of(&session)
    };
    Ok((jar, Json(snapshot)))
}

/// DELETE /api/v1/screening/resumes/:index
///
/// Out-of-range indexes are ignored; the list may have shifted under the UI.
pub async fn handle_remove_resume(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    jar: CookieJar,
) -> (CookieJar, Json<ScreeningState>) {
    let (jar, session) = state.sessions.resolve(jar);
    let mut session = session.lock().expect("session poisoned");
    match session.remove_resume(index) {
        Some(removed) => debug!("removed resume {} at index {index}", removed.name),
        None => debug!("remove_resume({index}) out of range, ignoring"),
    }
    (jar, Json(ScreeningState::of(&session)))
}

/// POST /api/v1/screening/analyze
///
/// Runs one submission cycle. With no job description or an empty resume list
/// the request is refused without an error and the state echoed back; same
/// while a submission is already in flight. Any upstream failure discards the
/// batch wholesale and nothing is retried.
pub async fn handle_analyze(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ScreeningState>), AppError> {
    let (jar, session) = state.sessions.resolve(jar);

    let (jd, resumes) = {
        let mut session = session.lock().expect("session poisoned");
        match session.begin_submission() {
            SubmitDecision::Accepted {
                job_description,
                resumes,
            } => (job_description, resumes),
            SubmitDecision::Refused => {
                debug!("analyze refused: job description or resumes missing");
                return Ok((jar, Json(ScreeningState::of(&session))));
            }
            SubmitDecision::AlreadyRunning => {
                debug!("analyze refused: a submission is already in flight");
                return Ok((jar, Json(ScreeningState::of(&session))));
            }
        }
    };

    info!("screening {} resumes against '{}'", resumes.len(), jd.name);

    // Lock released while the request is in flight; the session stays visible
    // in the Submitting phase and refuses further submissions.
    let result = state.screener.screen(&jd, &resumes).await;

    let mut session = session.lock().expect("session poisoned");
    match result {
        Ok(outcome) => {
            info!(
                "analysis complete: {} relevant, {} irrelevant",
                outcome.relevant.len(),
                outcome.irrelevant.len()
            );
            session.complete(outcome);
            Ok((jar, Json(ScreeningState::of(&session))))
        }
        Err(err) => {
            session.fail();
            Err(AppError::Screening(err))
        }
    }
}

/// POST /api/v1/screening/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ScreeningState>) {
    let (jar, session) = state.sessions.resolve(jar);
    let mut session = session.lock().expect("session poisoned");
    session.reset();
    (jar, Json(ScreeningState::of(&session)))
}

async fn next_field<'a>(
    multipart: &'a mut Multipart,
) -> Result<Option<Field<'a>>, AppError> {
    multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))
}

async fn drain(field: Field<'_>) {
    let _ = field.bytes().await;
}

/// Reads one file field, enforcing what the browser's accept filter only
/// hints at: document extensions, a per-file size cap, and non-empty content.
async fn read_document(field: Field<'_>) -> Result<UploadedDoc, AppError> {
    let name = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("failed to read '{name}': {e}")))?;

    let extension = std::path::Path::new(&name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF, DOC, DOCX files are allowed".to_string(),
        ));
    }
    if data.len() > MAX_FILE_BYTES {
        return Err(AppError::Validation(
            "File too large. Maximum size is 10MB".to_string(),
        ));
    }
    if data.is_empty() {
        return Err(AppError::Validation(format!("'{name}' is empty")));
    }

    Ok(UploadedDoc {
        name,
        content_type,
        data,
    })
}
