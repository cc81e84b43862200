//! Bonus provision (`BON`).
//!
//! Permanent consultants with a non-zero bonus provision accrue one twelfth
//! of it per month, dimensioned by cost centre and floored like salaries.

use prognos_shared::types::ForecastElementId;
use rust_decimal::Decimal;

use super::super::base_data::ProfitCentreScope;
use super::super::types::NewForecastEntry;
use super::CostCentreGrid;

pub(crate) fn entries(
    scope: &ProfitCentreScope,
    financial_year: i32,
    element_id: ForecastElementId,
) -> Vec<NewForecastEntry> {
    let mut grid = CostCentreGrid::zeroed(&scope.cost_centre_ids());

    for consultant in scope.consultants.iter().filter(|c| c.is_permanent()) {
        let Some(bonus_provision) = consultant.bonus_provision else {
            continue;
        };
        if bonus_provision.is_zero() {
            continue;
        }

        let monthly_bonus = bonus_provision / Decimal::from(12);
        for financial_month in 1..=12 {
            grid.add(consultant.cost_centre_id, financial_month, monthly_bonus);
        }
    }

    grid.into_floored_entries(financial_year, element_id, scope.profit_centre_id)
}
