//! Fixed-price revenue (`FIXREV`).
//!
//! Sourced from the per-project forecast schedule rather than the roster:
//! revenue rows of the scope's fixed-price projects, summed per financial
//! month.

use prognos_shared::types::{ForecastElementId, ProjectId};

use super::super::base_data::ProfitCentreScope;
use super::super::repository::{ForecastRepository, RepositoryError};
use super::super::types::{NewForecastEntry, ProjectType};
use super::MonthlyAmounts;

pub(crate) async fn entries<R: ForecastRepository + ?Sized>(
    repo: &R,
    scope: &ProfitCentreScope,
    financial_year: i32,
    element_id: ForecastElementId,
) -> Result<Vec<NewForecastEntry>, RepositoryError> {
    let fixed_price_projects: Vec<ProjectId> = scope
        .projects
        .iter()
        .filter(|p| p.project_type == ProjectType::FixedPrice)
        .map(|p| p.id)
        .collect();

    let schedule = repo
        .project_forecast_revenue(&fixed_price_projects, financial_year)
        .await?;

    let mut months = MonthlyAmounts::zeroed();
    for row in &schedule {
        if (1..=12).contains(&row.financial_month) {
            months.add(row.financial_month, row.amount);
        }
    }

    Ok(months.into_entries(financial_year, element_id, scope.profit_centre_id))
}
