use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::catalog::{AnswerScale, Catalog, Domain, Question};
use crate::scoring::ScoringEngine;
use crate::session::domain::{LeadContact, OnboardingDetails, SessionId, SessionRecord};
use crate::session::repository::{
    LeadNotification, LeadPublisher, PublishError, RepositoryError, SessionRepository,
};
use crate::session::service::AssessmentService;

pub(super) fn fixture_catalog() -> Catalog {
    let domain = |id: &'static str, name: &'static str, ids: &[&'static str]| Domain {
        id,
        name,
        description: "",
        questions: ids
            .iter()
            .map(|question_id| Question {
                id: question_id,
                domain_id: id,
                label: "",
                text: "",
            })
            .collect(),
    };

    Catalog {
        domains: vec![
            domain("strategy", "Strategy", &["s1", "s2"]),
            domain("data_quality", "Quality", &["q1", "q2"]),
            domain("culture_people", "Culture", &["c1", "c2"]),
        ],
        scale: AnswerScale::five_point(),
    }
}

pub(super) fn lead() -> LeadContact {
    LeadContact {
        email: "visitor@example.com".to_string(),
        phone: "+33102030405".to_string(),
    }
}

pub(super) fn onboarding() -> OnboardingDetails {
    OnboardingDetails {
        industry: "tech".to_string(),
        company_size: "sme".to_string(),
        role: "cdo".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }

    fn completed(&self) -> Result<Vec<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard
            .values()
            .filter(|record| record.result.is_some())
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryLeads {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl MemoryLeads {
    pub(super) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("lock").clone()
    }
}

impl LeadPublisher for MemoryLeads {
    fn publish(&self, notification: LeadNotification) -> Result<(), PublishError> {
        self.events.lock().expect("lock").push(notification);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryLeads>,
    Arc<MemoryRepository>,
    Arc<MemoryLeads>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let leads = Arc::new(MemoryLeads::default());
    let engine = ScoringEngine::new(fixture_catalog());
    let service = AssessmentService::new(engine, repository.clone(), leads.clone());
    (service, repository, leads)
}
