use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{SessionId, SessionRecord};

/// Storage abstraction so the service module can be exercised in isolation.
/// In-memory implementations live in the API crate; nothing persists across
/// process restarts by design.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
    fn completed(&self) -> Result<Vec<SessionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook notified when a qualified lead finishes the assessment
/// (e.g., a CRM or marketing-automation adapter).
pub trait LeadPublisher: Send + Sync {
    fn publish(&self, notification: LeadNotification) -> Result<(), PublishError>;
}

/// Payload handed to the lead hook so routes/tests can assert the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadNotification {
    pub template: String,
    pub session_id: SessionId,
    pub details: BTreeMap<String, String>,
}

/// Lead dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("lead transport unavailable: {0}")]
    Transport(String),
}
