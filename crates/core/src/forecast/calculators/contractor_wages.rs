//! Contractor wages (`CWAGES`).

use std::collections::HashMap;

use chrono::Datelike;
use prognos_shared::types::{ForecastElementId, ProjectId};
use rust_decimal::Decimal;

use crate::time::{financial_year_span, month_calendar_to_financial, FISCAL_OFFSET};

use super::super::base_data::{BaseData, ProfitCentreScope};
use super::super::repository::{ForecastRepository, RepositoryError};
use super::super::types::{
    Consultant, NewForecastEntry, Project, ProjectType, BILLABLE_PROBABILITIES,
};
use super::MonthlyAmounts;

/// Whether one rostered day incurs contractor wages.
///
/// All three conditions must hold: the consultant is a contractor, the
/// project is time-and-materials, and the probability label is in the
/// billable allow-list.
#[must_use]
pub fn incurs_contractor_wages(
    consultant: &Consultant,
    project: &Project,
    probability: &str,
) -> bool {
    consultant.is_contractor()
        && project.project_type == ProjectType::TimeAndMaterials
        && BILLABLE_PROBABILITIES.contains(&probability)
}

pub(crate) async fn entries<R: ForecastRepository + ?Sized>(
    repo: &R,
    base: &BaseData,
    scope: &ProfitCentreScope,
    financial_year: i32,
    element_id: ForecastElementId,
) -> Result<Vec<NewForecastEntry>, RepositoryError> {
    let (from, to) = financial_year_span(financial_year);
    let roster = repo
        .roster_entries_by_projects(&scope.project_ids(), from, to)
        .await?;

    // Rostered consultants may sit outside this profit centre, so the lookup
    // spans every consultant.
    let consultants = base.consultant_lookup();
    let projects: HashMap<ProjectId, &Project> =
        scope.projects.iter().map(|p| (p.id, p)).collect();

    let mut months = MonthlyAmounts::zeroed();
    for entry in &roster {
        let Some(consultant) = consultants.get(&entry.consultant_id) else {
            continue;
        };
        let Some(project) = projects.get(&entry.project_id) else {
            continue;
        };

        if incurs_contractor_wages(consultant, project, &entry.probability) {
            let financial_month = month_calendar_to_financial(entry.date.month(), FISCAL_OFFSET);
            months.add(
                financial_month,
                consultant.daily_rate.unwrap_or(Decimal::ZERO),
            );
        }
    }

    Ok(months.into_entries(financial_year, element_id, scope.profit_centre_id))
}
