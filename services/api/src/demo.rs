use crate::infra::{InMemoryLeadPublisher, InMemorySessionRepository};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use datapulse::catalog::Catalog;
use datapulse::error::AppError;
use datapulse::scoring::{
    Answer, AnswerSheet, AnswerValue, AssessmentResult, ScoringEngine,
};
use datapulse::session::{AssessmentService, LeadContact, OnboardingDetails};

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file holding an array of {question_id, value} answers.
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Industry key used for the benchmark comparison.
    #[arg(long, default_value = "other")]
    pub(crate) industry: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Industry used for the scripted session.
    #[arg(long, default_value = "tech")]
    pub(crate) industry: String,
    /// Leave every third question unanswered to show the reliability index.
    #[arg(long)]
    pub(crate) partial: bool,
    /// Print the marketing CSV export at the end of the run.
    #[arg(long)]
    pub(crate) export: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { answers, industry } = args;

    let raw = std::fs::read_to_string(&answers)?;
    let parsed: Vec<Answer> = serde_json::from_str(&raw)
        .map_err(|err| AppError::Input(format!("answer file is not valid JSON: {err}")))?;

    let engine = ScoringEngine::new(Catalog::standard());
    let sheet = AnswerSheet::from_answers(parsed);
    let result = engine.calculate(&sheet, &industry);

    let json = serde_json::to_string_pretty(&result)
        .map_err(|err| AppError::Input(format!("result could not be serialized: {err}")))?;
    println!("{json}");
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        industry,
        partial,
        export,
    } = args;

    println!("Maturity assessment demo");

    let repository = Arc::new(InMemorySessionRepository::default());
    let leads = Arc::new(InMemoryLeadPublisher::default());
    let engine = ScoringEngine::new(Catalog::standard());
    let service = Arc::new(AssessmentService::new(engine, repository, leads.clone()));

    let record = match service.start(LeadContact {
        email: "demo@datapulse.example".to_string(),
        phone: "+33 6 00 00 00 00".to_string(),
    }) {
        Ok(record) => record,
        Err(err) => {
            println!("  Lead capture rejected: {}", err);
            return Ok(());
        }
    };
    let session_id = record.session_id.clone();
    println!("- Session {} opened at step {}", session_id.0, record.step.label());

    if let Err(err) = service.onboard(
        &session_id,
        OnboardingDetails {
            industry: industry.clone(),
            company_size: "sme".to_string(),
            role: "cdo".to_string(),
        },
    ) {
        println!("  Onboarding rejected: {}", err);
        return Ok(());
    }
    println!("- Onboarded as industry '{}'", industry);

    // Scripted ratings cycling through the scale, with one "don't know".
    let script: [AnswerValue; 5] = [
        AnswerValue::Rating(4),
        AnswerValue::Rating(3),
        AnswerValue::Rating(5),
        AnswerValue::Unknown,
        AnswerValue::Rating(2),
    ];

    let questions: Vec<&'static str> = service
        .engine()
        .catalog()
        .domains
        .iter()
        .flat_map(|domain| domain.questions.iter().map(|question| question.id))
        .collect();

    let mut answered = 0usize;
    for (index, question_id) in questions.iter().enumerate() {
        if partial && index % 3 == 0 {
            continue;
        }
        let value = script[index % script.len()];
        if let Err(err) = service.record_answer(&session_id, question_id, value) {
            println!("  Answer rejected for {}: {}", question_id, err);
            return Ok(());
        }
        answered += 1;
    }
    println!("- Recorded {} of {} answers", answered, questions.len());

    let result = match service.complete(&session_id) {
        Ok(result) => result,
        Err(err) => {
            println!("  Completion failed: {}", err);
            return Ok(());
        }
    };
    render_result(&result);

    let events = leads.events();
    if events.is_empty() {
        println!("\nLead notifications: none dispatched");
    } else {
        println!("\nLead notifications:");
        for event in events {
            println!("  - template={} -> {}", event.template, event.session_id.0);
        }
    }

    if export {
        match service.export_leads() {
            Ok(csv) => println!("\nLead export:\n{}", csv),
            Err(err) => println!("\nLead export unavailable: {}", err),
        }
    }

    Ok(())
}

fn render_result(result: &AssessmentResult) {
    println!(
        "\nGlobal score {:.1}/5 ({}%) | maturity level {} ({})",
        result.global_score,
        result.global_percentage,
        result.maturity_level.rank(),
        result.maturity_label
    );
    println!(
        "Market position: ahead of {}% of the industry | reliability {}%",
        result.market_position, result.reliability_index
    );

    println!("\nDomain breakdown");
    for domain in &result.domain_scores {
        println!(
            "- {}: {}% ({}/{} questions answered)",
            domain.domain_name, domain.percentage, domain.answered_questions, domain.total_questions
        );
    }

    if result.badges.is_empty() {
        println!("\nBadges: none earned");
    } else {
        println!("\nBadges");
        for badge in &result.badges {
            println!("- {} {}: {}", badge.icon, badge.name, badge.description);
        }
    }

    if !result.strengths.is_empty() {
        println!("\nStrengths");
        for strength in &result.strengths {
            println!("- {}", strength);
        }
    }
    if !result.risks.is_empty() {
        println!("\nPriority risks");
        for risk in &result.risks {
            println!("- {}", risk);
        }
    }
}
