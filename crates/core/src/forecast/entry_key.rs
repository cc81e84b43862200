//! Composite keys for forecast cells.

use prognos_shared::types::CostCentreId;

use crate::time::{financial_to_calendar, FinancialTime, FISCAL_OFFSET};

/// Uniquely identifies one forecast cell: (year, month, row, cost centre).
///
/// A key lives in exactly one key space - calendar or financial. Every key in
/// a given entries map must be built through the same constructor; mixing the
/// two spaces in one map silently misfiles amounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    year: i32,
    month: u32,
    row: String,
    cost_centre: Option<CostCentreId>,
}

impl EntryKey {
    /// Builds a key in calendar space.
    #[must_use]
    pub fn calendar(
        year: i32,
        month: u32,
        row: impl Into<String>,
        cost_centre: Option<CostCentreId>,
    ) -> Self {
        Self {
            year,
            month,
            row: row.into(),
            cost_centre,
        }
    }

    /// Builds a key in financial space.
    ///
    /// With `convert_to_calendar` set, the financial time is re-expressed in
    /// calendar terms first and the key lands in calendar space instead.
    #[must_use]
    pub fn financial(
        financial: FinancialTime,
        row: impl Into<String>,
        cost_centre: Option<CostCentreId>,
        convert_to_calendar: bool,
    ) -> Self {
        let (year, month) = if convert_to_calendar {
            let calendar = financial_to_calendar(financial, FISCAL_OFFSET);
            (calendar.year, calendar.month)
        } else {
            (financial.year, financial.month)
        };

        Self {
            year,
            month,
            row: row.into(),
            cost_centre,
        }
    }

    /// The key's month within its key space.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}.", self.year, self.month, self.row)?;
        match self.cost_centre {
            Some(cost_centre) => write!(f, "{cost_centre}"),
            None => f.write_str("na"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_key_display() {
        let key = EntryKey::calendar(2026, 3, "TMREV", None);
        assert_eq!(key.to_string(), "2026.3.TMREV.na");
    }

    #[test]
    fn test_financial_key_without_conversion() {
        let financial = FinancialTime { year: 2025, month: 7 };
        let key = EntryKey::financial(financial, "SAL", None, false);
        assert_eq!(key.to_string(), "2025.7.SAL.na");
    }

    #[test]
    fn test_financial_key_with_conversion() {
        // Financial month 7 of 2025 is January 2026.
        let financial = FinancialTime { year: 2025, month: 7 };
        let key = EntryKey::financial(financial, "SAL", None, true);
        assert_eq!(key.to_string(), "2026.1.SAL.na");
    }

    #[test]
    fn test_key_spaces_do_not_collide_on_equal_cells() {
        let financial = FinancialTime { year: 2025, month: 7 };
        let plain = EntryKey::financial(financial, "SAL", None, false);
        let converted = EntryKey::financial(financial, "SAL", None, true);
        assert_ne!(plain, converted);
    }

    #[test]
    fn test_cost_centre_distinguishes_keys() {
        let cost_centre = CostCentreId::new();
        let with = EntryKey::calendar(2026, 1, "SAL", Some(cost_centre));
        let without = EntryKey::calendar(2026, 1, "SAL", None);
        assert_ne!(with, without);
        assert!(with.to_string().ends_with(&cost_centre.to_string()));
    }
}
