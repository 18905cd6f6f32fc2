use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{LeadContact, OnboardingDetails, SessionId, SessionRecord, SessionStatusView};
use super::export::{leads_csv, ExportError};
use super::repository::{
    LeadNotification, LeadPublisher, PublishError, RepositoryError, SessionRepository,
};
use super::state::AssessmentStep;
use crate::scoring::{AnswerValue, AssessmentResult, ScoringEngine};

/// Service composing the scoring engine, the session store, and the lead
/// hook. One instance serves every concurrent visitor session.
pub struct AssessmentService<R, P> {
    engine: Arc<ScoringEngine>,
    repository: Arc<R>,
    leads: Arc<P>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("sess-{id:06}"))
}

impl<R, P> AssessmentService<R, P>
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    pub fn new(engine: ScoringEngine, repository: Arc<R>, leads: Arc<P>) -> Self {
        Self {
            engine: Arc::new(engine),
            repository,
            leads,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Lead capture: the entry point of the flow. Creates the session and
    /// moves it onto the onboarding step.
    pub fn start(&self, lead: LeadContact) -> Result<SessionRecord, SessionError> {
        validate_lead(&lead)?;

        let session_id = next_session_id();
        let mut record = SessionRecord {
            session_id: session_id.clone(),
            lead,
            onboarding: None,
            answers: Default::default(),
            step: AssessmentStep::Capture,
            started_at: Utc::now(),
            completed_at: None,
            result: None,
        };
        // Submitting contact details completes the capture step.
        advance(&mut record);

        let stored = self.repository.insert(record)?;
        info!(session = %session_id.0, "assessment session started");
        Ok(stored)
    }

    /// Re-submit contact details after navigating back to the capture step.
    /// Everything recorded earlier (onboarding, answers) is kept.
    pub fn recapture(
        &self,
        session_id: &SessionId,
        lead: LeadContact,
    ) -> Result<SessionRecord, SessionError> {
        validate_lead(&lead)?;
        let mut record = self.fetch(session_id)?;
        expect_step(&record, AssessmentStep::Capture)?;

        record.lead = lead;
        advance(&mut record);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Record the onboarding context and open the questionnaire.
    pub fn onboard(
        &self,
        session_id: &SessionId,
        details: OnboardingDetails,
    ) -> Result<SessionRecord, SessionError> {
        let mut record = self.fetch(session_id)?;
        expect_step(&record, AssessmentStep::Onboarding)?;

        if details.industry.trim().is_empty() {
            return Err(SessionError::InvalidOnboarding(
                "industry must not be empty".to_string(),
            ));
        }

        record.onboarding = Some(details);
        advance(&mut record);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Store one answer. Re-answering a question replaces the prior value.
    pub fn record_answer(
        &self,
        session_id: &SessionId,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<SessionRecord, SessionError> {
        let mut record = self.fetch(session_id)?;
        expect_step(&record, AssessmentStep::Questions)?;

        if !self.engine.catalog().contains_question(question_id) {
            return Err(SessionError::UnknownQuestion(question_id.to_string()));
        }
        let max = self.engine.catalog().scale.max;
        if let Some(rating) = value.rating() {
            if rating < 1 || rating > max {
                return Err(SessionError::OutOfScale { value: rating, max });
            }
        }

        record.answers.record(question_id, value);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Step back in the flow. Captured contact details and recorded answers
    /// are kept, so moving forward again loses nothing.
    pub fn go_back(&self, session_id: &SessionId) -> Result<SessionRecord, SessionError> {
        let mut record = self.fetch(session_id)?;
        let previous = record
            .step
            .previous()
            .ok_or(SessionError::BackUnavailable(record.step.label()))?;

        record.step = previous;
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Finish the questionnaire: run the engine once, freeze the result, and
    /// hand the qualified lead to the outbound hook.
    pub fn complete(&self, session_id: &SessionId) -> Result<AssessmentResult, SessionError> {
        let mut record = self.fetch(session_id)?;
        expect_step(&record, AssessmentStep::Questions)?;

        let industry = record
            .onboarding
            .as_ref()
            .map(|details| details.industry.clone())
            .unwrap_or_else(|| "other".to_string());
        let result = self.engine.calculate(&record.answers, &industry);

        advance(&mut record);
        record.completed_at = Some(Utc::now());
        record.result = Some(result.clone());
        self.repository.update(record.clone())?;

        let mut details = BTreeMap::new();
        details.insert("email".to_string(), record.lead.email.clone());
        details.insert("industry".to_string(), industry.to_string());
        details.insert("global_score".to_string(), result.global_score.to_string());
        details.insert(
            "maturity_level".to_string(),
            result.maturity_level.rank().to_string(),
        );
        self.leads.publish(LeadNotification {
            template: "assessment_completed".to_string(),
            session_id: session_id.clone(),
            details,
        })?;

        info!(
            session = %session_id.0,
            score = result.global_score,
            position = result.market_position,
            "assessment completed"
        );
        Ok(result)
    }

    /// The computed result, or the "results unavailable" guard when the
    /// questionnaire has not been completed yet.
    pub fn results(&self, session_id: &SessionId) -> Result<AssessmentResult, SessionError> {
        let record = self.fetch(session_id)?;
        record.result.ok_or(SessionError::ResultsUnavailable)
    }

    pub fn status(&self, session_id: &SessionId) -> Result<SessionStatusView, SessionError> {
        let record = self.fetch(session_id)?;
        Ok(record.status_view(self.engine.catalog().question_count()))
    }

    /// Completed leads as CSV for the marketing handoff. Rows follow
    /// session start order regardless of how the repository iterates.
    pub fn export_leads(&self) -> Result<String, SessionError> {
        let mut completed = self.repository.completed()?;
        completed.sort_by(|a, b| {
            a.started_at
                .cmp(&b.started_at)
                .then_with(|| a.session_id.0.cmp(&b.session_id.0))
        });
        Ok(leads_csv(&completed)?)
    }

    fn fetch(&self, session_id: &SessionId) -> Result<SessionRecord, SessionError> {
        Ok(self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?)
    }
}

fn validate_lead(lead: &LeadContact) -> Result<(), SessionError> {
    if lead.email.contains('@') {
        Ok(())
    } else {
        Err(SessionError::InvalidLead(format!(
            "'{}' is not an email address",
            lead.email
        )))
    }
}

/// Forward transition through the step table. Every caller checks the
/// current step first, so the terminal step never reaches this point.
fn advance(record: &mut SessionRecord) {
    if let Some(next) = record.step.next() {
        record.step = next;
    }
}

fn expect_step(record: &SessionRecord, expected: AssessmentStep) -> Result<(), SessionError> {
    if record.step == expected {
        Ok(())
    } else {
        Err(SessionError::WrongStep {
            expected: expected.label(),
            actual: record.step.label(),
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid lead details: {0}")]
    InvalidLead(String),
    #[error("invalid onboarding details: {0}")]
    InvalidOnboarding(String),
    #[error("session is at step '{actual}', expected '{expected}'")]
    WrongStep {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),
    #[error("answer value {value} is outside the 1-{max} rating scale")]
    OutOfScale { value: u8, max: u8 },
    #[error("cannot navigate back from step '{0}'")]
    BackUnavailable(&'static str),
    #[error("results are not available until the questionnaire is completed")]
    ResultsUnavailable,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
