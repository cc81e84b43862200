//! Financial year and month conversion.
//!
//! The financial year is offset from the calendar year by a fixed number of
//! months (6 by default, i.e. the fiscal year starts in July). Financial year
//! N spans calendar July N through June N+1: financial months 1-6 are
//! Jul-Dec of year N, financial months 7-12 are Jan-Jun of year N+1.

pub mod convert;

#[cfg(test)]
mod props;

pub use convert::{
    CalendarTime, FinancialTime, FISCAL_OFFSET, calendar_to_financial, current_financial_year,
    financial_time_from_date, financial_to_calendar, financial_year_span,
    month_calendar_to_financial, month_financial_to_calendar, month_sequence, MonthInfo,
};
