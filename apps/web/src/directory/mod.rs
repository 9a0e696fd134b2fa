//! The presentational side of the app: dashboard, job postings, candidates
//! and settings, rendered from a seed catalog. No state transitions here.

pub mod catalog;
pub mod handlers;
