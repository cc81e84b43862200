//! Property-based tests for financial/calendar time conversion.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use super::convert::{
    CalendarTime, FinancialTime, FISCAL_OFFSET, calendar_to_financial, financial_time_from_date,
    financial_to_calendar, financial_year_span,
};

proptest! {
    /// Round-trip identity: converting a financial (year, month) to calendar
    /// and back yields the original pair, for every month of every year.
    #[test]
    fn test_financial_calendar_round_trip(
        year in 1990i32..2100,
        month in 1u32..=12,
    ) {
        let financial = FinancialTime { year, month };
        let calendar = financial_to_calendar(financial, FISCAL_OFFSET);
        let back = calendar_to_financial(calendar, FISCAL_OFFSET);

        prop_assert_eq!(back, financial);
    }

    /// The calendar round-trip holds in the other direction too.
    #[test]
    fn test_calendar_financial_round_trip(
        year in 1990i32..2100,
        month in 1u32..=12,
    ) {
        let calendar = CalendarTime { year, month };
        let financial = calendar_to_financial(calendar, FISCAL_OFFSET);
        let back = financial_to_calendar(financial, FISCAL_OFFSET);

        prop_assert_eq!(back, calendar);
    }

    /// A date's derived financial time maps back to the date's own
    /// calendar year and month.
    #[test]
    fn test_date_derivation_consistent_with_conversion(
        year in 1990i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let financial = financial_time_from_date(date);
        let calendar = financial_to_calendar(financial, FISCAL_OFFSET);

        prop_assert_eq!(calendar.year, date.year());
        prop_assert_eq!(calendar.month, date.month());
    }

    /// Every date inside a financial year's span derives that financial year.
    #[test]
    fn test_span_contains_only_own_year(
        year in 1990i32..2100,
        offset_days in 0i64..365,
    ) {
        let (start, end) = financial_year_span(year);
        let date = start + chrono::Duration::days(offset_days);

        prop_assume!(date <= end);
        prop_assert_eq!(financial_time_from_date(date).year, year);
    }
}
