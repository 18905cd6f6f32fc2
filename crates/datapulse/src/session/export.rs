use csv::Writer;

use super::domain::SessionRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer could not be finalized")]
    Buffer,
}

/// Render completed sessions as the CSV handed to the marketing team.
/// Sessions without a result are skipped; the caller decides what to pass.
pub fn leads_csv(records: &[SessionRecord]) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record([
        "email",
        "phone",
        "industry",
        "company_size",
        "role",
        "completed_at",
        "global_score",
        "maturity",
        "market_position",
    ])?;

    for record in records {
        let Some(result) = &record.result else {
            continue;
        };
        let (industry, company_size, role) = match &record.onboarding {
            Some(details) => (
                details.industry.as_str(),
                details.company_size.as_str(),
                details.role.as_str(),
            ),
            None => ("", "", ""),
        };
        let completed_at = record
            .completed_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_default();

        writer.write_record([
            record.lead.email.as_str(),
            record.lead.phone.as_str(),
            industry,
            company_size,
            role,
            completed_at.as_str(),
            format!("{:.1}", result.global_score).as_str(),
            result.maturity_label,
            result.market_position.to_string().as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|_| ExportError::Buffer)?;
    String::from_utf8(bytes).map_err(|_| ExportError::Buffer)
}
