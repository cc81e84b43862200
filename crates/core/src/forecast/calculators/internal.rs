//! Internal revenue and internal charge (`INTREV` / `INTCH`).
//!
//! When a profit centre's own consultants work on another profit centre's
//! projects, the owning centre recognizes internal revenue (stored negative,
//! reducing its cost of sales). The mirror image - outside consultants
//! working on this centre's projects - is a positive internal charge. The
//! cross-boundary direction is mutually exclusive for one scope, so the same
//! roster fact can never land in both sets.

use chrono::Datelike;
use prognos_shared::types::ForecastElementId;

use crate::time::{financial_year_span, month_calendar_to_financial, FISCAL_OFFSET};

use super::super::base_data::{BaseData, ProfitCentreScope};
use super::super::repository::{ForecastRepository, RepositoryError};
use super::super::types::NewForecastEntry;
use super::MonthlyAmounts;

/// Internal revenue: scope consultants rostered on projects outside the
/// scope.
pub(crate) async fn revenue_entries<R: ForecastRepository + ?Sized>(
    repo: &R,
    base: &BaseData,
    scope: &ProfitCentreScope,
    financial_year: i32,
    element_id: ForecastElementId,
) -> Result<Vec<NewForecastEntry>, RepositoryError> {
    let (from, to) = financial_year_span(financial_year);
    let roster = repo
        .roster_entries_by_consultants(&scope.consultant_ids(), from, to)
        .await?;

    let mut months = MonthlyAmounts::zeroed();
    for entry in &roster {
        if scope.contains_project(entry.project_id) {
            continue;
        }
        let Some(consultant) = scope.consultants.iter().find(|c| c.id == entry.consultant_id)
        else {
            continue;
        };

        let financial_month = month_calendar_to_financial(entry.date.month(), FISCAL_OFFSET);
        months.add(
            financial_month,
            -base.internal_rate(consultant, entry.project_id),
        );
    }

    Ok(months.into_entries(financial_year, element_id, scope.profit_centre_id))
}

/// Internal charge: outside consultants rostered on the scope's projects.
pub(crate) async fn charge_entries<R: ForecastRepository + ?Sized>(
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

    let consultants = base.consultant_lookup();

    let mut months = MonthlyAmounts::zeroed();
    for entry in &roster {
        // Roster entries referencing unknown consultants carry no rate or
        // membership data and are ignored.
        let Some(consultant) = consultants.get(&entry.consultant_id) else {
            continue;
        };
        if scope.contains_cost_centre(consultant.cost_centre_id) {
            continue;
        }

        let financial_month = month_calendar_to_financial(entry.date.month(), FISCAL_OFFSET);
        months.add(
            financial_month,
            base.internal_rate(consultant, entry.project_id),
        );
    }

    Ok(months.into_entries(financial_year, element_id, scope.profit_centre_id))
}
