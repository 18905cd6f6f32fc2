//! Static questionnaire catalog: domains, questions, the answer scale, and
//! the contextual option lists shown during lead capture and onboarding.
//!
//! The catalog is compiled-in configuration data. Scoring never hardcodes
//! domain or question content, so tests can substitute a minimal fixture
//! catalog.

mod standard;

use serde::Serialize;

/// A single assessment statement rated on the answer scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub domain_id: &'static str,
    pub label: &'static str,
    pub text: &'static str,
}

/// Thematic grouping of questions. Ordered and non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub questions: Vec<Question>,
}

/// One selectable point on the ordinal answer scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleOption {
    pub value: u8,
    pub label: &'static str,
}

/// The ordinal scale every question is rated on. `max` is the denominator
/// used for percentage math; "don't know" is a sentinel outside the scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerScale {
    pub max: u8,
    pub options: Vec<ScaleOption>,
}

impl AnswerScale {
    pub fn five_point() -> Self {
        Self {
            max: 5,
            options: vec![
                ScaleOption { value: 1, label: "Not started" },
                ScaleOption { value: 2, label: "Emerging" },
                ScaleOption { value: 3, label: "Defined" },
                ScaleOption { value: 4, label: "Managed" },
                ScaleOption { value: 5, label: "Optimized" },
            ],
        }
    }
}

/// The full questionnaire consumed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub domains: Vec<Domain>,
    pub scale: AnswerScale,
}

impl Catalog {
    /// The production DataPulse questionnaire.
    pub fn standard() -> Self {
        Self {
            domains: standard::standard_domains(),
            scale: AnswerScale::five_point(),
        }
    }

    pub fn question_count(&self) -> usize {
        self.domains.iter().map(|domain| domain.questions.len()).sum()
    }

    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domains.iter().find(|domain| domain.id == id)
    }

    pub fn contains_question(&self, id: &str) -> bool {
        self.domains
            .iter()
            .flat_map(|domain| domain.questions.iter())
            .any(|question| question.id == id)
    }
}

/// Value/label pair rendered in the onboarding selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Industries with a benchmark row. Unknown keys fall back to `other` at
/// scoring time.
pub fn industries() -> &'static [ContextOption] {
    &[
        ContextOption { value: "finance", label: "Finance & Banking" },
        ContextOption { value: "retail", label: "Retail" },
        ContextOption { value: "manufacturing", label: "Manufacturing" },
        ContextOption { value: "healthcare", label: "Healthcare" },
        ContextOption { value: "telecom", label: "Telecom" },
        ContextOption { value: "energy", label: "Energy" },
        ContextOption { value: "transport", label: "Transport & Logistics" },
        ContextOption { value: "public", label: "Public Sector" },
        ContextOption { value: "tech", label: "Technology" },
        ContextOption { value: "other", label: "Other" },
    ]
}

pub fn company_sizes() -> &'static [ContextOption] {
    &[
        ContextOption { value: "solo", label: "Just me" },
        ContextOption { value: "micro", label: "Fewer than 10" },
        ContextOption { value: "sme", label: "10 to 249" },
        ContextOption { value: "mid", label: "250 to 4999" },
        ContextOption { value: "enterprise", label: "5000 and above" },
    ]
}

pub fn roles() -> &'static [ContextOption] {
    &[
        ContextOption { value: "ceo", label: "CEO" },
        ContextOption { value: "cfo", label: "CFO" },
        ContextOption { value: "cto", label: "CTO" },
        ContextOption { value: "cmo", label: "CMO" },
        ContextOption { value: "cdo", label: "Chief Data Officer" },
        ContextOption { value: "director", label: "Head of Department" },
        ContextOption { value: "other", label: "Other" },
    ]
}
