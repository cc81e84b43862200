//! Conversion functions between financial and calendar time.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Months between the calendar and financial year start.
///
/// 6 means the financial year starts in July.
pub const FISCAL_OFFSET: u32 = 6;

/// Abbreviated calendar month labels, January first.
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A point in financial time: year plus month 1-12, where month 1 is the
/// first month of the fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinancialTime {
    /// Financial year, labeled by the calendar year it starts in.
    pub year: i32,
    /// Financial month, 1-12.
    pub month: u32,
}

/// A point in calendar time: year plus month 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarTime {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
}

/// One month of the financial year, with its calendar counterpart and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    /// Financial month, 1-12.
    pub financial_month: u32,
    /// Calendar month, 1-12.
    pub calendar_month: u32,
    /// Abbreviated calendar month label (e.g. "Jul").
    pub label: &'static str,
}

/// Converts a financial month (1-12) to its calendar month.
#[must_use]
pub const fn month_financial_to_calendar(financial_month: u32, offset: u32) -> u32 {
    ((financial_month + offset - 1) % 12) + 1
}

/// Converts a calendar month (1-12) to its financial month.
#[must_use]
pub const fn month_calendar_to_financial(calendar_month: u32, offset: u32) -> u32 {
    // +11 keeps the subtraction in unsigned range for any offset 0-12.
    ((calendar_month + 11 - (offset % 12)) % 12) + 1
}

/// Converts financial year and month to calendar year and month.
///
/// Financial months past the offset have rolled into the next calendar year:
/// `{ year: 2018, month: 1 }` is July 2018, `{ year: 2018, month: 7 }` is
/// January 2019.
#[must_use]
pub const fn financial_to_calendar(financial: FinancialTime, offset: u32) -> CalendarTime {
    let calendar_month = month_financial_to_calendar(financial.month, offset);
    let calendar_year = if financial.month > offset {
        financial.year + 1
    } else {
        financial.year
    };

    CalendarTime {
        year: calendar_year,
        month: calendar_month,
    }
}

/// Converts calendar year and month to financial year and month.
///
/// Inverse of [`financial_to_calendar`]: calendar months at or before the
/// offset belong to the financial year that started the previous July.
#[must_use]
pub const fn calendar_to_financial(calendar: CalendarTime, offset: u32) -> FinancialTime {
    let financial_month = month_calendar_to_financial(calendar.month, offset);
    let financial_year = if calendar.month <= offset {
        calendar.year - 1
    } else {
        calendar.year
    };

    FinancialTime {
        year: financial_year,
        month: financial_month,
    }
}

/// Derives financial year and month from a concrete date.
///
/// Dates in calendar Q1/Q2 belong to the forecast cycle that started in July
/// of the previous calendar year.
#[must_use]
pub fn financial_time_from_date(date: NaiveDate) -> FinancialTime {
    calendar_to_financial(
        CalendarTime {
            year: date.year(),
            month: date.month(),
        },
        FISCAL_OFFSET,
    )
}

/// Returns the financial year a given date falls in.
#[must_use]
pub fn current_financial_year(today: NaiveDate) -> i32 {
    financial_time_from_date(today).year
}

/// Returns the inclusive calendar date span of one financial year:
/// 1 July of the label year through 30 June of the following year.
///
/// # Panics
///
/// Never panics: both endpoints are valid dates for any year.
#[must_use]
pub fn financial_year_span(financial_year: i32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(financial_year, 7, 1).expect("1 July is a valid date");
    let end = NaiveDate::from_ymd_opt(financial_year + 1, 6, 30).expect("30 June is a valid date");
    (start, end)
}

/// Returns the twelve months of the financial year in financial order,
/// each with its calendar month and display label.
#[must_use]
pub fn month_sequence(offset: u32) -> Vec<MonthInfo> {
    (1..=12)
        .map(|financial_month| {
            let calendar_month = month_financial_to_calendar(financial_month, offset);
            MonthInfo {
                financial_month,
                calendar_month,
                label: MONTH_LABELS[calendar_month as usize - 1],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 7)]
    #[case(2, 8)]
    #[case(6, 12)]
    #[case(7, 1)]
    #[case(12, 6)]
    fn test_month_financial_to_calendar(#[case] financial: u32, #[case] calendar: u32) {
        assert_eq!(month_financial_to_calendar(financial, FISCAL_OFFSET), calendar);
    }

    #[rstest]
    #[case(7, 1)]
    #[case(12, 6)]
    #[case(1, 7)]
    #[case(6, 12)]
    fn test_month_calendar_to_financial(#[case] calendar: u32, #[case] financial: u32) {
        assert_eq!(month_calendar_to_financial(calendar, FISCAL_OFFSET), financial);
    }

    #[test]
    fn test_financial_month_one_is_july_same_year() {
        let calendar = financial_to_calendar(FinancialTime { year: 2018, month: 1 }, FISCAL_OFFSET);
        assert_eq!(calendar, CalendarTime { year: 2018, month: 7 });
    }

    #[test]
    fn test_financial_month_six_is_december_same_year() {
        let calendar = financial_to_calendar(FinancialTime { year: 2018, month: 6 }, FISCAL_OFFSET);
        assert_eq!(calendar, CalendarTime { year: 2018, month: 12 });
    }

    #[test]
    fn test_financial_month_seven_crosses_into_next_calendar_year() {
        let calendar = financial_to_calendar(FinancialTime { year: 2018, month: 7 }, FISCAL_OFFSET);
        assert_eq!(calendar, CalendarTime { year: 2019, month: 1 });
    }

    #[test]
    fn test_january_maps_to_previous_cycle() {
        let date = NaiveDate::from_ymd_opt(2019, 1, 15).unwrap();
        let financial = financial_time_from_date(date);
        assert_eq!(financial, FinancialTime { year: 2018, month: 7 });
    }

    #[test]
    fn test_december_stays_in_same_cycle() {
        let date = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
        let financial = financial_time_from_date(date);
        assert_eq!(financial, FinancialTime { year: 2018, month: 6 });
    }

    #[test]
    fn test_current_financial_year() {
        let july = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        assert_eq!(current_financial_year(july), 2026);

        let june = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        assert_eq!(current_financial_year(june), 2025);
    }

    #[test]
    fn test_financial_year_span() {
        let (start, end) = financial_year_span(2025);
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());
    }

    #[test]
    fn test_month_sequence_starts_in_july() {
        let months = month_sequence(FISCAL_OFFSET);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].calendar_month, 7);
        assert_eq!(months[0].label, "Jul");
        assert_eq!(months[6].calendar_month, 1);
        assert_eq!(months[6].label, "Jan");
        assert_eq!(months[11].label, "Jun");
    }
}
