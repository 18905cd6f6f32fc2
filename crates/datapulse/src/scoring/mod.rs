//! The scoring engine: a pure, total function from an answer sheet and an
//! industry key to the full assessment result.
//!
//! Missing answers, "don't know" responses, and unknown industries all
//! degrade to well-defined zero/default contributions; no input can make the
//! calculation fail.

mod answers;
mod badges;
mod benchmarks;

pub use answers::{Answer, AnswerSheet, AnswerValue};
pub use badges::{default_badge_rules, Badge, BadgeKind, BadgeRule, BadgeTrigger};
pub use benchmarks::{BenchmarkTable, IndustryBenchmark};

use serde::{Serialize, Serializer};

use crate::catalog::Catalog;

/// Per-domain aggregation. "Don't know" answers count toward neither the
/// sum nor the answered count, so they never penalize nor help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainScore {
    pub domain_id: &'static str,
    pub domain_name: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub answered_questions: usize,
    pub total_questions: usize,
}

/// Discrete 1-5 maturity classification derived from the global score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaturityLevel {
    Initial,
    Developing,
    Defined,
    Mastered,
    Optimized,
}

impl MaturityLevel {
    /// Step function over the global score, thresholds at 1.5/2.5/3.5/4.5.
    pub fn from_score(global_score: f64) -> Self {
        if global_score < 1.5 {
            MaturityLevel::Initial
        } else if global_score < 2.5 {
            MaturityLevel::Developing
        } else if global_score < 3.5 {
            MaturityLevel::Defined
        } else if global_score < 4.5 {
            MaturityLevel::Mastered
        } else {
            MaturityLevel::Optimized
        }
    }

    pub const fn rank(self) -> u8 {
        match self {
            MaturityLevel::Initial => 1,
            MaturityLevel::Developing => 2,
            MaturityLevel::Defined => 3,
            MaturityLevel::Mastered => 4,
            MaturityLevel::Optimized => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Mastered => "Mastered",
            MaturityLevel::Optimized => "Optimized",
        }
    }
}

impl Serialize for MaturityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}

/// The terminal, immutable output consumed by every results surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub global_score: f64,
    pub global_percentage: u8,
    pub domain_scores: Vec<DomainScore>,
    pub market_position: u8,
    pub maturity_level: MaturityLevel,
    pub maturity_label: &'static str,
    pub reliability_index: u8,
    pub badges: Vec<Badge>,
    pub strengths: Vec<&'static str>,
    pub risks: Vec<&'static str>,
}

/// Stateless calculator over a catalog, a benchmark table, and badge rules.
pub struct ScoringEngine {
    catalog: Catalog,
    benchmarks: BenchmarkTable,
    badge_rules: Vec<BadgeRule>,
}

impl ScoringEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_benchmarks(catalog, BenchmarkTable::simulated())
    }

    pub fn with_benchmarks(catalog: Catalog, benchmarks: BenchmarkTable) -> Self {
        Self {
            catalog,
            benchmarks,
            badge_rules: default_badge_rules(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn calculate(&self, answers: &AnswerSheet, industry: &str) -> AssessmentResult {
        let scale_max = u32::from(self.catalog.scale.max);

        let mut domain_scores = Vec::with_capacity(self.catalog.domains.len());
        let mut total_score: u32 = 0;
        let mut total_answered: usize = 0;
        let mut total_questions: usize = 0;

        for domain in &self.catalog.domains {
            let mut sum: u32 = 0;
            let mut answered: usize = 0;
            for question in &domain.questions {
                if let Some(value) = answers.get(question.id).and_then(AnswerValue::rating) {
                    sum += u32::from(value);
                    answered += 1;
                }
            }

            let max_score = domain.questions.len() as u32 * scale_max;
            let percentage = if answered > 0 {
                percentage_of(sum, answered as u32 * scale_max)
            } else {
                0
            };

            domain_scores.push(DomainScore {
                domain_id: domain.id,
                domain_name: domain.name,
                score: sum,
                max_score,
                percentage,
                answered_questions: answered,
                total_questions: domain.questions.len(),
            });

            total_score += sum;
            total_answered += answered;
            total_questions += domain.questions.len();
        }

        // Global figures are summed from the per-domain pass so they stay
        // consistent with the per-domain "don't know" exclusions.
        let global_percentage = if total_answered > 0 {
            percentage_of(total_score, total_answered as u32 * scale_max)
        } else {
            0
        };
        let global_score = if total_answered > 0 {
            (f64::from(total_score) / total_answered as f64 * 10.0).round() / 10.0
        } else {
            0.0
        };

        let benchmark = self.benchmarks.lookup(industry);
        let market_position =
            benchmarks::market_position(global_score, &benchmark, f64::from(scale_max));

        let maturity_level = MaturityLevel::from_score(global_score);

        let reliability_index = if total_questions > 0 {
            (total_answered as f64 / total_questions as f64 * 100.0).round() as u8
        } else {
            0
        };

        let badges =
            badges::earned_badges(&self.badge_rules, &domain_scores, global_score, maturity_level);

        let (strengths, risks) = strengths_and_risks(&domain_scores);

        AssessmentResult {
            global_score,
            global_percentage,
            domain_scores,
            market_position,
            maturity_level,
            maturity_label: maturity_level.label(),
            reliability_index,
            badges,
            strengths,
            risks,
        }
    }
}

fn percentage_of(sum: u32, denominator: u32) -> u8 {
    (f64::from(sum) / f64::from(denominator) * 100.0).round() as u8
}

/// Top two domains by percentage are strengths; risks come from the tail,
/// worst first. Ties keep catalog order (stable sort). With fewer than four
/// domains, risks skip any domain already picked as a strength.
fn strengths_and_risks(domain_scores: &[DomainScore]) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut sorted: Vec<&DomainScore> = domain_scores.iter().collect();
    sorted.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    let strengths: Vec<&'static str> = sorted
        .iter()
        .take(2)
        .map(|score| score.domain_name)
        .collect();

    let mut risks = Vec::with_capacity(2);
    for score in sorted.iter().rev() {
        if risks.len() == 2 {
            break;
        }
        if strengths.contains(&score.domain_name) {
            continue;
        }
        risks.push(score.domain_name);
    }

    (strengths, risks)
}
