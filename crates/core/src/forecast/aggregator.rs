//! Category totals over computed forecast entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::ElementType;

/// One entry amount tagged with its element's category.
#[derive(Debug, Clone, Copy)]
pub struct CategorizedAmount {
    /// Financial month, 1-12.
    pub financial_month: u32,
    /// Entry amount.
    pub amount: Decimal,
    /// Category of the entry's element.
    pub element_type: ElementType,
}

/// Per-month category totals for one profit-centre set and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Cost of sales per financial month.
    pub cost_of_sales: [Decimal; 12],
    /// Revenue per financial month.
    pub revenue: [Decimal; 12],
    /// Overheads per financial month.
    pub overheads: [Decimal; 12],
    /// Gross profit (revenue - cost of sales) per financial month.
    pub gross_profit: [Decimal; 12],
    /// Net profit (gross profit - overheads) per financial month.
    pub net_profit: [Decimal; 12],
}

impl MonthlyTotals {
    fn zeroed() -> Self {
        Self {
            cost_of_sales: [Decimal::ZERO; 12],
            revenue: [Decimal::ZERO; 12],
            overheads: [Decimal::ZERO; 12],
            gross_profit: [Decimal::ZERO; 12],
            net_profit: [Decimal::ZERO; 12],
        }
    }

    /// Cost of sales for a financial month (1-12).
    #[must_use]
    pub fn cost_of_sales_for(&self, financial_month: u32) -> Decimal {
        self.cost_of_sales[financial_month as usize - 1]
    }

    /// Revenue for a financial month (1-12).
    #[must_use]
    pub fn revenue_for(&self, financial_month: u32) -> Decimal {
        self.revenue[financial_month as usize - 1]
    }

    /// Overheads for a financial month (1-12).
    #[must_use]
    pub fn overheads_for(&self, financial_month: u32) -> Decimal {
        self.overheads[financial_month as usize - 1]
    }

    /// Gross profit for a financial month (1-12).
    #[must_use]
    pub fn gross_profit_for(&self, financial_month: u32) -> Decimal {
        self.gross_profit[financial_month as usize - 1]
    }

    /// Net profit for a financial month (1-12).
    #[must_use]
    pub fn net_profit_for(&self, financial_month: u32) -> Decimal {
        self.net_profit[financial_month as usize - 1]
    }
}

/// Sums categorized amounts into per-month totals.
///
/// Exact-zero amounts are skipped; their presence contributes nothing and
/// never errors. Months outside 1-12 are ignored.
#[must_use]
pub fn aggregate(amounts: impl IntoIterator<Item = CategorizedAmount>) -> MonthlyTotals {
    let mut totals = MonthlyTotals::zeroed();

    for entry in amounts {
        if entry.amount.is_zero() {
            continue;
        }
        if !(1..=12).contains(&entry.financial_month) {
            continue;
        }
        let index = entry.financial_month as usize - 1;

        match entry.element_type {
            ElementType::CostOfSales => {
                totals.cost_of_sales[index] += entry.amount;
                totals.gross_profit[index] -= entry.amount;
                totals.net_profit[index] -= entry.amount;
            }
            ElementType::Revenue => {
                totals.revenue[index] += entry.amount;
                totals.gross_profit[index] += entry.amount;
                totals.net_profit[index] += entry.amount;
            }
            ElementType::Overhead => {
                totals.overheads[index] += entry.amount;
                totals.net_profit[index] -= entry.amount;
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn amount(month: u32, value: Decimal, element_type: ElementType) -> CategorizedAmount {
        CategorizedAmount {
            financial_month: month,
            amount: value,
            element_type,
        }
    }

    #[test]
    fn test_single_month_totals() {
        let totals = aggregate([
            amount(1, dec!(5000), ElementType::Revenue),
            amount(1, dec!(10000), ElementType::CostOfSales),
            amount(1, dec!(2000), ElementType::Overhead),
        ]);

        assert_eq!(totals.revenue_for(1), dec!(5000));
        assert_eq!(totals.cost_of_sales_for(1), dec!(10000));
        assert_eq!(totals.overheads_for(1), dec!(2000));
        assert_eq!(totals.gross_profit_for(1), dec!(-5000));
        assert_eq!(totals.net_profit_for(1), dec!(-7000));
    }

    #[test]
    fn test_zero_amounts_are_skipped() {
        let totals = aggregate([
            amount(4, Decimal::ZERO, ElementType::Revenue),
            amount(4, Decimal::ZERO, ElementType::CostOfSales),
        ]);

        assert_eq!(totals, aggregate([]));
    }

    #[test]
    fn test_negative_cost_reduces_cost_of_sales() {
        // Internal revenue is stored as a negative cost-of-sales amount.
        let totals = aggregate([
            amount(2, dec!(8000), ElementType::CostOfSales),
            amount(2, dec!(-3000), ElementType::CostOfSales),
        ]);

        assert_eq!(totals.cost_of_sales_for(2), dec!(5000));
        assert_eq!(totals.gross_profit_for(2), dec!(-5000));
    }

    #[test]
    fn test_out_of_range_month_is_ignored() {
        let totals = aggregate([amount(13, dec!(100), ElementType::Revenue)]);
        assert_eq!(totals, aggregate([]));
    }

    proptest! {
        /// For every month: gross profit = revenue - cost of sales, and
        /// net profit = gross profit - overheads.
        #[test]
        fn test_aggregation_identities(
            amounts in proptest::collection::vec(
                (1u32..=12, -1_000_000i64..1_000_000, 0u8..3),
                0..64,
            )
        ) {
            let categorized = amounts.into_iter().map(|(month, value, kind)| {
                let element_type = match kind {
                    0 => ElementType::CostOfSales,
                    1 => ElementType::Revenue,
                    _ => ElementType::Overhead,
                };
                CategorizedAmount {
                    financial_month: month,
                    amount: Decimal::from(value),
                    element_type,
                }
            });

            let totals = aggregate(categorized);

            for month in 1..=12u32 {
                prop_assert_eq!(
                    totals.gross_profit_for(month),
                    totals.revenue_for(month) - totals.cost_of_sales_for(month)
                );
                prop_assert_eq!(
                    totals.net_profit_for(month),
                    totals.gross_profit_for(month) - totals.overheads_for(month)
                );
            }
        }
    }
}
