//! TalentFlow web front-end: the sidebar-navigated hiring pages (dashboard,
//! job postings, candidates, settings) backed by seed data, plus the AI
//! screening tool that packages uploaded documents into one multipart request
//! against an external analysis service and renders the partitioned verdict.

pub mod config;
pub mod directory;
pub mod errors;
pub mod models;
pub mod routes;
pub mod screening;
pub mod state;
pub mod views;
