//! Content types behind the presentational pages. These carry display-ready
//! strings; the pages render them as-is.

use serde::Serialize;

/// A single stat tile on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    /// Month-over-month change, already formatted ("+12%", "+3").
    pub change: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub action: String,
    /// The job or candidate the action refers to.
    pub subject: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    /// "Active" | "Draft" | "Closed"
    pub status: String,
    pub applicants: u32,
    pub posted: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub location: String,
    pub status: String,
    pub experience: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HrProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationPrefs {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_reports: bool,
}
