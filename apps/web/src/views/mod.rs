//! Askama page templates. Layout stays deliberately plain; the pages exist
//! to put the directory content and the screening workflow on screen.

use askama::Template;

use crate::models::directory::{
    ActivityItem, Candidate, DashboardStat, HrProfile, JobPosting, NotificationPrefs,
};
use crate::screening::handlers::ScreeningState;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub stats: Vec<DashboardStat>,
    pub activity: Vec<ActivityItem>,
}

#[derive(Template)]
#[template(path = "job_postings.html")]
pub struct JobPostingsPage {
    pub jobs: Vec<JobPosting>,
}

#[derive(Template)]
#[template(path = "candidates.html")]
pub struct CandidatesPage {
    pub candidates: Vec<Candidate>,
}

#[derive(Template)]
#[template(path = "screening.html")]
pub struct ScreeningPage {
    pub state: ScreeningState,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsPage {
    pub profile: HrProfile,
    pub notifications: NotificationPrefs,
}
