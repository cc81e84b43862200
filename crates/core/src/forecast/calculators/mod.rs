//! Line-item calculators.
//!
//! One calculator per computed element code, dispatched through [`run`].
//! Every calculator follows the same shell: resolve the element reference
//! row (a missing row is a no-op, not an error), compute fresh monthly
//! amounts with all twelve financial months initialized to zero, and replace
//! the stored entries for (year, element, profit centre) atomically.

mod bonus;
mod contractor_wages;
mod fixed_price;
mod internal;
mod salaries;
mod service_revenue;

use std::collections::BTreeMap;

use prognos_shared::types::{CostCentreId, ForecastElementId, ProfitCentreId};
use rust_decimal::Decimal;

pub use contractor_wages::incurs_contractor_wages;

use super::base_data::{BaseData, ProfitCentreScope};
use super::repository::{ForecastRepository, RepositoryError};
use super::types::{ElementCode, NewForecastEntry};

/// Runs the calculator for one element over one profit-centre scope.
///
/// No-ops when the element's reference row is absent from the loaded base
/// data.
pub(crate) async fn run<R: ForecastRepository + ?Sized>(
    code: ElementCode,
    repo: &R,
    base: &BaseData,
    scope: &ProfitCentreScope,
    financial_year: i32,
) -> Result<(), RepositoryError> {
    let Some(element) = base.element_by_code(code) else {
        tracing::warn!(element = %code, "forecast element missing from reference data, skipping");
        return Ok(());
    };

    let rows = match code {
        ElementCode::ServiceRevenue => {
            service_revenue::entries(repo, base, scope, financial_year, element.id).await?
        }
        ElementCode::ContractorWages => {
            contractor_wages::entries(repo, base, scope, financial_year, element.id).await?
        }
        ElementCode::ConsultantSalaries => salaries::entries(scope, financial_year, element.id),
        ElementCode::BonusProvision => bonus::entries(scope, financial_year, element.id),
        ElementCode::InternalRevenue => {
            internal::revenue_entries(repo, base, scope, financial_year, element.id).await?
        }
        ElementCode::InternalCharge => {
            internal::charge_entries(repo, base, scope, financial_year, element.id).await?
        }
        ElementCode::FixedPriceRevenue => {
            fixed_price::entries(repo, scope, financial_year, element.id).await?
        }
    };

    tracing::debug!(
        element = %code,
        profit_centre = %scope.profit_centre_id,
        rows = rows.len(),
        "replacing forecast entries"
    );

    repo.replace_forecast_entries(financial_year, element.id, scope.profit_centre_id, rows)
        .await
}

/// Twelve financial months of accumulated amounts, all initialized to zero
/// so downstream aggregation never sees missing cells.
#[derive(Debug, Clone)]
pub(crate) struct MonthlyAmounts {
    amounts: [Decimal; 12],
}

impl MonthlyAmounts {
    pub(crate) fn zeroed() -> Self {
        Self {
            amounts: [Decimal::ZERO; 12],
        }
    }

    /// Adds an amount to a financial month (1-12).
    pub(crate) fn add(&mut self, financial_month: u32, amount: Decimal) {
        debug_assert!((1..=12).contains(&financial_month));
        self.amounts[financial_month as usize - 1] += amount;
    }

    /// Converts the twelve months into entry rows without a cost-centre
    /// dimension.
    pub(crate) fn into_entries(
        self,
        financial_year: i32,
        forecast_element_id: ForecastElementId,
        profit_centre_id: ProfitCentreId,
    ) -> Vec<NewForecastEntry> {
        self.amounts
            .into_iter()
            .enumerate()
            .map(|(index, amount)| NewForecastEntry {
                financial_year,
                financial_month: index as u32 + 1,
                forecast_element_id,
                profit_centre_id,
                cost_centre_id: None,
                amount,
            })
            .collect()
    }
}

/// Amounts accumulated per (cost centre, financial month), zero-initialized
/// over the full cost-centre x month grid.
#[derive(Debug, Clone)]
pub(crate) struct CostCentreGrid {
    amounts: BTreeMap<(CostCentreId, u32), Decimal>,
}

impl CostCentreGrid {
    pub(crate) fn zeroed(cost_centre_ids: &[CostCentreId]) -> Self {
        let mut amounts = BTreeMap::new();
        for &cost_centre_id in cost_centre_ids {
            for financial_month in 1..=12 {
                amounts.insert((cost_centre_id, financial_month), Decimal::ZERO);
            }
        }
        Self { amounts }
    }

    pub(crate) fn add(&mut self, cost_centre_id: CostCentreId, financial_month: u32, amount: Decimal) {
        debug_assert!((1..=12).contains(&financial_month));
        *self
            .amounts
            .entry((cost_centre_id, financial_month))
            .or_insert(Decimal::ZERO) += amount;
    }

    /// Converts the grid into entry rows, flooring each summed amount to
    /// whole currency units.
    pub(crate) fn into_floored_entries(
        self,
        financial_year: i32,
        forecast_element_id: ForecastElementId,
        profit_centre_id: ProfitCentreId,
    ) -> Vec<NewForecastEntry> {
        self.amounts
            .into_iter()
            .map(
                |((cost_centre_id, financial_month), amount)| NewForecastEntry {
                    financial_year,
                    financial_month,
                    forecast_element_id,
                    profit_centre_id,
                    cost_centre_id: Some(cost_centre_id),
                    amount: amount.floor(),
                },
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_amounts_zero_initializes_all_months() {
        let months = MonthlyAmounts::zeroed();
        let entries = months.into_entries(
            2025,
            ForecastElementId::new(),
            ProfitCentreId::new(),
        );

        assert_eq!(entries.len(), 12);
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.financial_month, index as u32 + 1);
            assert_eq!(entry.amount, Decimal::ZERO);
            assert!(entry.cost_centre_id.is_none());
        }
    }

    #[test]
    fn test_monthly_amounts_accumulates() {
        let mut months = MonthlyAmounts::zeroed();
        months.add(3, dec!(100.50));
        months.add(3, dec!(49.50));

        let entries =
            months.into_entries(2025, ForecastElementId::new(), ProfitCentreId::new());
        assert_eq!(entries[2].amount, dec!(150.00));
    }

    #[test]
    fn test_cost_centre_grid_covers_every_cell() {
        let cost_centres = [CostCentreId::new(), CostCentreId::new()];
        let grid = CostCentreGrid::zeroed(&cost_centres);
        let entries =
            grid.into_floored_entries(2025, ForecastElementId::new(), ProfitCentreId::new());

        assert_eq!(entries.len(), 24);
        assert!(entries.iter().all(|e| e.cost_centre_id.is_some()));
    }

    #[test]
    fn test_cost_centre_grid_floors_amounts() {
        let cost_centre = CostCentreId::new();
        let mut grid = CostCentreGrid::zeroed(&[cost_centre]);
        grid.add(cost_centre, 1, dec!(8333.3333));
        grid.add(cost_centre, 1, dec!(4166.6666));

        let entries =
            grid.into_floored_entries(2025, ForecastElementId::new(), ProfitCentreId::new());
        let january = entries
            .iter()
            .find(|e| e.financial_month == 1)
            .expect("month 1 present");
        assert_eq!(january.amount, dec!(12499));
    }
}
