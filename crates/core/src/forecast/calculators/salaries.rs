//! Consultant salaries (`SAL`).
//!
//! Permanent consultants cost one twelfth of their annual salary per month,
//! pro-rated by the days of the calendar month they are employed. Amounts
//! are dimensioned by the consultant's cost centre and floored to whole
//! currency units.

use chrono::{Datelike, NaiveDate};
use prognos_shared::types::ForecastElementId;
use rust_decimal::Decimal;

use crate::time::{financial_to_calendar, FinancialTime, FISCAL_OFFSET};

use super::super::base_data::ProfitCentreScope;
use super::super::types::{Consultant, NewForecastEntry};
use super::CostCentreGrid;

pub(crate) fn entries(
    scope: &ProfitCentreScope,
    financial_year: i32,
    element_id: ForecastElementId,
) -> Vec<NewForecastEntry> {
    let mut grid = CostCentreGrid::zeroed(&scope.cost_centre_ids());

    for financial_month in 1..=12 {
        let calendar = financial_to_calendar(
            FinancialTime {
                year: financial_year,
                month: financial_month,
            },
            FISCAL_OFFSET,
        );

        for consultant in scope.consultants.iter().filter(|c| c.is_permanent()) {
            let Some(annual_salary) = consultant.annual_salary else {
                continue;
            };

            let monthly_salary = annual_salary / Decimal::from(12);
            let fraction = active_fraction(consultant, calendar.year, calendar.month);
            if !fraction.is_zero() {
                grid.add(
                    consultant.cost_centre_id,
                    financial_month,
                    monthly_salary * fraction,
                );
            }
        }
    }

    grid.into_floored_entries(financial_year, element_id, scope.profit_centre_id)
}

/// Fraction of a calendar month's days falling inside the consultant's
/// employment span. Zero when the spans do not overlap.
fn active_fraction(consultant: &Consultant, year: i32, month: u32) -> Decimal {
    let days = days_in_month(year, month);
    let month_start = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month start");
    let month_end = NaiveDate::from_ymd_opt(year, month, days).expect("valid month end");

    let active_from = consultant.start_date.max(month_start);
    let active_to = consultant.end_date.unwrap_or(month_end).min(month_end);

    if active_from > active_to {
        return Decimal::ZERO;
    }

    let active_days = (active_to - active_from).num_days() + 1;
    Decimal::from(active_days) / Decimal::from(days)
}

/// Number of days in a calendar month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid next month");

    next_month_start.pred_opt().expect("month end exists").day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use prognos_shared::types::{ConsultantId, CostCentreId, ProfitCentreId};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::super::super::base_data::ProfitCentreScope;
    use super::super::super::types::{ConsultantType, CostCentre};

    fn permanent(annual_salary: Decimal, cost_centre_id: CostCentreId) -> Consultant {
        Consultant {
            id: ConsultantId::new(),
            name: "Grace".to_string(),
            consultant_type: ConsultantType::Permanent,
            annual_salary: Some(annual_salary),
            daily_rate: None,
            internal_rate: None,
            bonus_provision: None,
            start_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            end_date: None,
            cost_centre_id,
        }
    }

    fn scope_with(consultants: Vec<Consultant>, cost_centre: CostCentre) -> ProfitCentreScope {
        ProfitCentreScope {
            profit_centre_id: cost_centre.profit_centre_id,
            cost_centres: vec![cost_centre],
            consultants,
            projects: Vec::new(),
        }
    }

    fn cost_centre() -> CostCentre {
        CostCentre {
            id: CostCentreId::new(),
            name: "Delivery".to_string(),
            profit_centre_id: ProfitCentreId::new(),
        }
    }

    #[rstest]
    #[case(2026, 1, 31)]
    #[case(2026, 2, 28)]
    #[case(2028, 2, 29)]
    #[case(2026, 4, 30)]
    #[case(2026, 12, 31)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test]
    fn test_full_month_contributes_one_twelfth() {
        let cc = cost_centre();
        let scope = scope_with(vec![permanent(dec!(120000), cc.id)], cc);
        let rows = entries(&scope, 2025, ForecastElementId::new());

        assert_eq!(rows.len(), 12);
        for row in &rows {
            assert_eq!(row.amount, dec!(10000));
        }
    }

    #[test]
    fn test_half_month_contributes_half() {
        let cc = cost_centre();
        let mut consultant = permanent(dec!(120000), cc.id);
        // Financial month 10 of 2025 is April 2026 (30 days); active for the
        // last 15 of them.
        consultant.start_date = NaiveDate::from_ymd_opt(2026, 4, 16).unwrap();
        let scope = scope_with(vec![consultant], cc);

        let rows = entries(&scope, 2025, ForecastElementId::new());
        let april = rows
            .iter()
            .find(|r| r.financial_month == 10)
            .expect("month 10 present");
        assert_eq!(april.amount, dec!(5000));

        // Every month before the start date stays zero.
        let march = rows.iter().find(|r| r.financial_month == 9).unwrap();
        assert_eq!(march.amount, Decimal::ZERO);
    }

    #[test]
    fn test_end_date_cuts_off_following_months() {
        let cc = cost_centre();
        let mut consultant = permanent(dec!(120000), cc.id);
        // Leaves at the end of financial month 3 (September 2025).
        consultant.end_date = NaiveDate::from_ymd_opt(2025, 9, 30).into();
        let scope = scope_with(vec![consultant], cc);

        let rows = entries(&scope, 2025, ForecastElementId::new());
        let september = rows.iter().find(|r| r.financial_month == 3).unwrap();
        let october = rows.iter().find(|r| r.financial_month == 4).unwrap();
        assert_eq!(september.amount, dec!(10000));
        assert_eq!(october.amount, Decimal::ZERO);
    }

    #[test]
    fn test_contractors_do_not_accrue_salary() {
        let cc = cost_centre();
        let mut consultant = permanent(dec!(120000), cc.id);
        consultant.consultant_type = ConsultantType::Contractor;
        let scope = scope_with(vec![consultant], cc);

        let rows = entries(&scope, 2025, ForecastElementId::new());
        assert!(rows.iter().all(|r| r.amount.is_zero()));
    }

    #[test]
    fn test_salaries_summed_per_cost_centre() {
        let cc = cost_centre();
        let first = permanent(dec!(60000), cc.id);
        let second = permanent(dec!(60000), cc.id);
        let scope = scope_with(vec![first, second], cc);

        let rows = entries(&scope, 2025, ForecastElementId::new());
        assert_eq!(rows.len(), 12);
        for row in &rows {
            assert_eq!(row.amount, dec!(10000));
            assert!(row.cost_centre_id.is_some());
        }
    }

    #[test]
    fn test_month_end_helper_consistency() {
        // Sanity-check the chrono arithmetic the fraction relies on.
        let end = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap();
        assert_eq!(end.day(), 30);
    }
}
