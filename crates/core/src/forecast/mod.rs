//! Forecast computation engine.
//!
//! Computes per-month amounts for a fixed vocabulary of forecast line items
//! (service revenue, contractor wages, consultant salaries, bonus provision,
//! internal revenue, internal charge, fixed-price revenue) for a profit
//! centre and financial year, persists them replace-on-recompute, and
//! aggregates them into category totals.

pub mod aggregator;
pub mod base_data;
pub mod calculators;
pub mod engine;
pub mod entry_key;
pub mod error;
pub mod memory;
pub mod repository;
pub mod types;


pub use aggregator::{CategorizedAmount, MonthlyTotals};
pub use base_data::{AssignmentLookup, AssignmentRates, BaseData, ProfitCentreScope};
pub use engine::ForecastEngine;
pub use entry_key::EntryKey;
pub use error::ForecastError;
pub use memory::MemoryRepository;
pub use repository::{ForecastRepository, RepositoryError};
pub use types::{
    Company, Consultant, ConsultantType, CostCentre, ElementCode, ElementType, ForecastElement,
    ForecastEntry, NewForecastEntry, ProfitCentre, Project, ProjectAssignment,
    ProjectForecastEntry, ProjectForecastType, ProjectType, RosterEntry, BILLABLE_PROBABILITIES,
};
