use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

use datapulse::session::{
    LeadNotification, LeadPublisher, PublishError, RepositoryError, SessionId, SessionRecord,
    SessionRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store. Nothing survives a restart, which is the
/// intended lifecycle for this product.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("session mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("session mutex poisoned");
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn completed(&self) -> Result<Vec<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("session mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.result.is_some())
            .cloned()
            .collect())
    }
}

/// Stand-in for the CRM hook: logs and remembers every qualified lead.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadPublisher {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl LeadPublisher for InMemoryLeadPublisher {
    fn publish(&self, notification: LeadNotification) -> Result<(), PublishError> {
        info!(
            session = %notification.session_id.0,
            template = %notification.template,
            "lead notification dispatched"
        );
        let mut guard = self.events.lock().expect("lead mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryLeadPublisher {
    pub(crate) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("lead mutex poisoned").clone()
    }
}
