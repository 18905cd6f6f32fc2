use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::AssessmentStep;
use crate::scoring::{AnswerSheet, AssessmentResult};

/// Identifier wrapper for assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Contact details collected on the hero page before anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadContact {
    pub email: String,
    pub phone: String,
}

/// Company context collected during onboarding; `industry` selects the
/// benchmark row at scoring time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingDetails {
    pub industry: String,
    pub company_size: String,
    pub role: String,
}

/// One visitor's journey through the flow. The result is written exactly
/// once, when the session completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub lead: LeadContact,
    pub onboarding: Option<OnboardingDetails>,
    pub answers: AnswerSheet,
    pub step: AssessmentStep,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub result: Option<AssessmentResult>,
}

impl SessionRecord {
    pub fn status_view(&self, total_questions: usize) -> SessionStatusView {
        SessionStatusView {
            session_id: self.session_id.clone(),
            step: self.step.label(),
            answered_questions: self.answers.len(),
            total_questions,
            global_score: self.result.as_ref().map(|result| result.global_score),
        }
    }
}

/// Sanitized progress snapshot returned by the HTTP endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub step: &'static str,
    pub answered_questions: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_score: Option<f64>,
}
