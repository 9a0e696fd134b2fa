//! The AI screening tool: upload bookkeeping, the submission state machine,
//! and the transport to the external analysis service. Everything here is
//! request orchestration; the scoring intelligence lives in the service.

pub mod batch;
pub mod client;
pub mod handlers;
pub mod session;
