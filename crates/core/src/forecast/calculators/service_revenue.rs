//! Service revenue (`TMREV`).
//!
//! Every rostered day on the scope's projects earns the assignment's day
//! rate, grouped by the day's financial month.

use chrono::Datelike;
use prognos_shared::types::ForecastElementId;

use crate::time::{financial_year_span, month_calendar_to_financial, FISCAL_OFFSET};

use super::super::base_data::{BaseData, ProfitCentreScope};
use super::super::repository::{ForecastRepository, RepositoryError};
use super::super::types::NewForecastEntry;
use super::MonthlyAmounts;

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

    let mut months = MonthlyAmounts::zeroed();
    for entry in &roster {
        let financial_month = month_calendar_to_financial(entry.date.month(), FISCAL_OFFSET);
        months.add(
            financial_month,
            base.day_rate(entry.consultant_id, entry.project_id),
        );
    }

    Ok(months.into_entries(financial_year, element_id, scope.profit_centre_id))
}
