//! Per-browser screening state and the submission state machine.
//!
//! A session owns exactly one `UploadBatch` and at most one in-flight
//! submission. Locks are only taken for synchronous transitions; the network
//! call happens with the lock released, so other requests observe the
//! `Submitting` phase instead of blocking on it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;
use uuid::Uuid;

use super::batch::{UploadBatch, UploadedDoc};
use crate::models::screening::ScreeningOutcome;

const SESSION_COOKIE: &str = "tf_session";
const SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Lifecycle of one submission cycle. `Succeeded` and `Failed` are terminal
/// for the cycle; a new submission (or a reset) starts a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What `begin_submission` decided about a submit request.
#[derive(Debug)]
pub enum SubmitDecision {
    /// Preconditions hold. The caller owns the captured files and must finish
    /// the cycle with `complete` or `fail`.
    Accepted {
        job_description: UploadedDoc,
        resumes: Vec<UploadedDoc>,
    },
    /// No job description or no resumes; refused without surfacing an error.
    Refused,
    /// A submission is already in flight; only one is permitted at a time.
    AlreadyRunning,
}

/// Screening state for one browser session: the upload batch, the submission
/// phase, and the last received outcome.
#[derive(Debug)]
pub struct ScreeningSession {
    batch: UploadBatch,
    phase: SubmissionPhase,
    show_results: bool,
    outcome: Option<ScreeningOutcome>,
}

impl Default for ScreeningSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreeningSession {
    pub fn new() -> Self {
        ScreeningSession {
            batch: UploadBatch::new(),
            phase: SubmissionPhase::Idle,
            show_results: false,
            outcome: None,
        }
    }

    pub fn set_job_description(&mut self, doc: UploadedDoc) {
        self.batch.set_job_description(doc);
    }

    pub fn add_resumes(&mut self, docs: Vec<UploadedDoc>) {
        self.batch.add_resumes(docs);
    }

    pub fn remove_resume(&mut self, index: usize) -> Option<UploadedDoc> {
        self.batch.remove_resume(index)
    }

    /// Gate for Idle -> Submitting. On acceptance the results area opens
    /// immediately, before the request resolves.
    pub fn begin_submission(&mut self) -> SubmitDecision {
        if self.phase == SubmissionPhase::Submitting {
            return SubmitDecision::AlreadyRunning;
        }
        let Some(job_description) = self.batch.job_description().cloned() else {
            return SubmitDecision::Refused;
        };
        if self.batch.resumes().is_empty() {
            return SubmitDecision::Refused;
        }
        let resumes = self.batch.resumes().to_vec();

        self.phase = SubmissionPhase::Submitting;
        self.show_results = true;

        SubmitDecision::Accepted {
            job_description,
            resumes,
        }
    }

    /// Stores the outcome as received, replacing any prior one.
    pub fn complete(&mut self, outcome: ScreeningOutcome) {
        self.outcome = Some(outcome);
        self.phase = SubmissionPhase::Succeeded;
    }

    /// Failure path shared by transport, status and decode errors: discard
    /// all in-progress state so the next attempt starts from scratch.
    pub fn fail(&mut self) {
        self.batch.clear();
        self.outcome = None;
        self.show_results = false;
        self.phase = SubmissionPhase::Failed;
    }

    /// Clears the batch, outcome and flags, returning to the initial state.
    pub fn reset(&mut self) {
        self.batch.clear();
        self.outcome = None;
        self.show_results = false;
        self.phase = SubmissionPhase::Idle;
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn batch(&self) -> &UploadBatch {
        &self.batch
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    pub fn outcome(&self) -> Option<&ScreeningOutcome> {
        self.outcome.as_ref()
    }
}

pub type SessionHandle = Arc<Mutex<ScreeningSession>>;

struct Slot {
    last_seen: Instant,
    session: SessionHandle,
}

/// In-memory store of screening sessions keyed by a browser cookie. Sessions
/// idle for an hour are pruned on the next lookup; nothing is persisted.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Slot>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the session named by the request cookie, creating one (and
    /// adding the cookie to the jar) when absent or expired.
    pub fn resolve(&self, jar: CookieJar) -> (CookieJar, SessionHandle) {
        let mut sessions = self.inner.lock().expect("session store poisoned");
        sessions.retain(|_, slot| slot.last_seen.elapsed() < SESSION_TTL);

        if let Some(id) = jar
            .get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok())
        {
            if let Some(slot) = sessions.get_mut(&id) {
                slot.last_seen = Instant::now();
                return (jar, slot.session.clone());
            }
        }

        let id = Uuid::new_v4();
        let session: SessionHandle = Arc::new(Mutex::new(ScreeningSession::new()));
        sessions.insert(
            id,
            Slot {
                last_seen: Instant::now(),
                session: session.clone(),
            },
        );
        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .build();
        (jar.add(cookie), session)
    }
}
