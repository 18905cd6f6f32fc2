//! Assessment session workflow: the multi-step flow from lead capture through
//! onboarding and the questionnaire to the computed results.

pub mod domain;
pub mod export;
pub mod repository;
pub mod router;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

pub use domain::{LeadContact, OnboardingDetails, SessionId, SessionRecord, SessionStatusView};
pub use export::{leads_csv, ExportError};
pub use repository::{
    LeadNotification, LeadPublisher, PublishError, RepositoryError, SessionRepository,
};
pub use router::session_router;
pub use service::{AssessmentService, SessionError};
pub use state::AssessmentStep;
