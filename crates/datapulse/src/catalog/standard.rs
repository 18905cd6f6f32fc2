//! Content of the production questionnaire.

use super::{Domain, Question};

fn question(domain_id: &'static str, id: &'static str, label: &'static str, text: &'static str) -> Question {
    Question { id, domain_id, label, text }
}

pub(super) fn standard_domains() -> Vec<Domain> {
    vec![
        Domain {
            id: "strategy",
            name: "Purpose, Vision & Strategy",
            description: "Alignment between data, AI, and business objectives",
            questions: vec![
                question("strategy", "str-1", "Data & AI vision",
                    "Data and AI hold a clear, explicit place in the company's strategic vision."),
                question("strategy", "str-2", "Business alignment",
                    "Our data & AI strategy is directly aligned with our priority business objectives."),
                question("strategy", "str-3", "Executive sponsorship",
                    "Data & AI initiatives are championed and sponsored at the executive level."),
                question("strategy", "str-4", "Data-driven decisions",
                    "Strategic and operational decisions are informed by reliable data."),
                question("strategy", "str-5", "Initiative prioritization",
                    "Data & AI initiatives are prioritized by their expected business impact."),
                question("strategy", "str-6", "Value measurement",
                    "The business impact of data and AI is measured, tracked, and managed."),
            ],
        },
        Domain {
            id: "data_platform",
            name: "Data Management, Tools & Architecture",
            description: "Technical foundations and the path to scale",
            questions: vec![
                question("data_platform", "plt-1", "Data embedded everywhere",
                    "Data is embedded across business decisions, interactions, and processes."),
                question("data_platform", "plt-2", "Real-time data",
                    "Data is processed and exploited in near real time where the business needs it."),
                question("data_platform", "plt-3", "Flexible data stores",
                    "The architecture handles structured and unstructured data in an integrated way."),
                question("data_platform", "plt-4", "Data as a product",
                    "Data is managed as a product, with clear owners and documented use cases."),
                question("data_platform", "plt-5", "Self-service access",
                    "Teams access data through secure self-service mechanisms."),
                question("data_platform", "plt-6", "Collaboration",
                    "The data platform supports collaboration between business, data, and IT teams."),
                question("data_platform", "plt-7", "Analytics maturity",
                    "The analytics capability generates measurable business value."),
                question("data_platform", "plt-8", "Unified platform",
                    "The architecture rests on a unified, scalable data platform."),
                question("data_platform", "plt-9", "Cost & scalability",
                    "Data workloads can scale with controlled costs."),
                question("data_platform", "plt-10", "Security & automation",
                    "Security, quality, and resilience are largely automated."),
            ],
        },
        Domain {
            id: "data_quality",
            name: "Data Quality",
            description: "Trustworthy, documented, measurable data",
            questions: vec![
                question("data_quality", "qua-1", "Quality monitoring",
                    "Data quality is measured continuously with explicit indicators and thresholds."),
                question("data_quality", "qua-2", "Single source of truth",
                    "Key business entities have a single, agreed source of truth."),
                question("data_quality", "qua-3", "Issue remediation",
                    "Data quality incidents are triaged and remediated with clear ownership."),
                question("data_quality", "qua-4", "Documentation",
                    "Critical datasets are documented and discoverable by the teams that need them."),
            ],
        },
        Domain {
            id: "governance",
            name: "Governance & Risk Management",
            description: "Trust, compliance, and risk control",
            questions: vec![
                question("governance", "gov-1", "Ownership & responsibilities",
                    "Responsibilities for data and AI governance are clearly defined and owned."),
                question("governance", "gov-2", "Governance framework",
                    "A formalized data & AI governance framework is shared across the organization."),
                question("governance", "gov-3", "Access management",
                    "Data access is controlled, traced, and aligned with business and regulatory needs."),
                question("governance", "gov-4", "Quality stewardship",
                    "Data quality is managed as a performance concern."),
                question("governance", "gov-5", "Lineage & traceability",
                    "The origin, transformations, and usage of data and models are traceable."),
                question("governance", "gov-6", "Compliance & auditability",
                    "Governance answers regulatory and audit requirements efficiently."),
                question("governance", "gov-7", "AI risk management",
                    "Risks tied to the use of AI are identified, assessed, and controlled."),
                question("governance", "gov-8", "AI model governance",
                    "Analytical and AI models are governed across their whole lifecycle."),
                question("governance", "gov-9", "Privacy & sensitive data",
                    "Protection of sensitive and personal data is built into data & AI usage."),
                question("governance", "gov-10", "Governance as enabler",
                    "Data & AI governance is perceived as a lever of trust and performance."),
            ],
        },
        Domain {
            id: "ai_ml",
            name: "AI & Machine Learning",
            description: "From experiments to industrialized AI",
            questions: vec![
                question("ai_ml", "ai-1", "Use-case portfolio",
                    "AI use cases are identified, qualified, and managed as a portfolio."),
                question("ai_ml", "ai-2", "Production deployment",
                    "Models move from experimentation to production through a repeatable path."),
                question("ai_ml", "ai-3", "Monitoring & retraining",
                    "Deployed models are monitored and retrained when performance drifts."),
                question("ai_ml", "ai-4", "Generative AI adoption",
                    "Generative AI tools are deployed with clear guardrails and measured value."),
            ],
        },
        Domain {
            id: "culture_people",
            name: "Culture & People",
            description: "Skills, adoption, ethics, and autonomy",
            questions: vec![
                question("culture_people", "cul-1", "Data literacy",
                    "Employees have the data literacy needed to use data and AI in their work."),
                question("culture_people", "cul-2", "AI skills alignment",
                    "Skill levels match the actual level of AI usage in the organization."),
                question("culture_people", "cul-3", "Training & upskilling",
                    "The organization invests in structured data & AI training."),
                question("culture_people", "cul-4", "Onboarding & development",
                    "Data and AI are part of onboarding and career development paths."),
                question("culture_people", "cul-5", "Critical thinking",
                    "Employees know how to interpret and challenge results produced by data and AI."),
                question("culture_people", "cul-6", "Individual responsibility",
                    "Employees understand their individual responsibility when using data and AI."),
                question("culture_people", "cul-7", "Responsible AI usage",
                    "AI tools are used within a clear, responsible, and controlled frame."),
                question("culture_people", "cul-8", "Ethics & AI risks",
                    "Employees are aware of the risks, limits, and ethical stakes of AI."),
                question("culture_people", "cul-9", "Autonomy",
                    "Teams are autonomous in using data and AI in their day-to-day work."),
            ],
        },
    ]
}
