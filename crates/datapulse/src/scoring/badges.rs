use serde::Serialize;

use super::{DomainScore, MaturityLevel};

/// Qualitative decoration attached to a result for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub kind: BadgeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Positive,
    Warning,
    Achievement,
}

/// Predicate deciding whether a badge is earned. Rules referencing a domain
/// absent from the active catalog silently never fire.
#[derive(Debug, Clone, PartialEq)]
pub enum BadgeTrigger {
    DomainAtLeast { domain_id: &'static str, percentage: u8 },
    DomainBelow { domain_id: &'static str, percentage: u8 },
    MaturityAtLeast(MaturityLevel),
    GlobalScoreWithin { min: f64, max: f64 },
}

/// A trigger paired with the badge it awards. Rules are independent and
/// non-exclusive; earned badges accumulate in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeRule {
    pub trigger: BadgeTrigger,
    pub badge: Badge,
}

pub fn default_badge_rules() -> Vec<BadgeRule> {
    vec![
        BadgeRule {
            trigger: BadgeTrigger::DomainAtLeast { domain_id: "strategy", percentage: 80 },
            badge: Badge {
                id: "visionary",
                name: "Data Visionary",
                icon: "🎯",
                description: "Exemplary data strategy",
                kind: BadgeKind::Positive,
            },
        },
        BadgeRule {
            trigger: BadgeTrigger::DomainBelow { domain_id: "data_quality", percentage: 40 },
            badge: Badge {
                id: "quality-risk",
                name: "Risk Zone",
                icon: "⚠️",
                description: "Data quality needs reinforcement",
                kind: BadgeKind::Warning,
            },
        },
        BadgeRule {
            trigger: BadgeTrigger::DomainAtLeast { domain_id: "data_quality", percentage: 80 },
            badge: Badge {
                id: "quality-champion",
                name: "Quality Champion",
                icon: "🏅",
                description: "Excellence in data quality",
                kind: BadgeKind::Positive,
            },
        },
        BadgeRule {
            trigger: BadgeTrigger::DomainAtLeast { domain_id: "ai_ml", percentage: 70 },
            badge: Badge {
                id: "ai-pioneer",
                name: "AI Pioneer",
                icon: "🤖",
                description: "Advanced AI maturity",
                kind: BadgeKind::Positive,
            },
        },
        BadgeRule {
            trigger: BadgeTrigger::DomainAtLeast { domain_id: "culture_people", percentage: 75 },
            badge: Badge {
                id: "data-driven",
                name: "Data-Driven",
                icon: "🚀",
                description: "Strong data culture",
                kind: BadgeKind::Achievement,
            },
        },
        BadgeRule {
            trigger: BadgeTrigger::MaturityAtLeast(MaturityLevel::Mastered),
            badge: Badge {
                id: "leader",
                name: "Market Leader",
                icon: "🏆",
                description: "In the top quartile of the market",
                kind: BadgeKind::Achievement,
            },
        },
        BadgeRule {
            trigger: BadgeTrigger::GlobalScoreWithin { min: 3.0, max: 4.0 },
            badge: Badge {
                id: "solid-foundations",
                name: "Solid Foundations",
                icon: "🧱",
                description: "A solid base to accelerate from",
                kind: BadgeKind::Positive,
            },
        },
    ]
}

pub(crate) fn earned_badges(
    rules: &[BadgeRule],
    domain_scores: &[DomainScore],
    global_score: f64,
    maturity: MaturityLevel,
) -> Vec<Badge> {
    let domain_percentage = |id: &str| {
        domain_scores
            .iter()
            .find(|score| score.domain_id == id)
            .map(|score| score.percentage)
    };

    rules
        .iter()
        .filter(|rule| match rule.trigger {
            BadgeTrigger::DomainAtLeast { domain_id, percentage } => {
                domain_percentage(domain_id).is_some_and(|value| value >= percentage)
            }
            BadgeTrigger::DomainBelow { domain_id, percentage } => {
                domain_percentage(domain_id).is_some_and(|value| value < percentage)
            }
            BadgeTrigger::MaturityAtLeast(level) => maturity >= level,
            BadgeTrigger::GlobalScoreWithin { min, max } => global_score >= min && global_score < max,
        })
        .map(|rule| rule.badge.clone())
        .collect()
}
