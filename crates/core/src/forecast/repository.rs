//! Abstract data access for the forecast engine.
//!
//! The engine is written against this trait so it can run on the SQL
//! implementation in `prognos-db` or the in-memory repository in
//! [`crate::forecast::memory`] interchangeably.

use async_trait::async_trait;
use chrono::NaiveDate;
use prognos_shared::types::{ConsultantId, CostCentreId, ForecastElementId, ProfitCentreId, ProjectId};
use thiserror::Error;

use super::types::{
    Consultant, CostCentre, ForecastElement, ForecastEntry, NewForecastEntry, Project,
    ProjectAssignment, ProjectForecastEntry, RosterEntry,
};

/// Data-access failure.
///
/// Backends wrap their native errors here; the engine propagates them
/// unchanged (recalculation is user-triggered, so there is no retry policy).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying data layer failed.
    #[error("data access failed: {0}")]
    DataAccess(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a backend error.
    #[must_use]
    pub fn data_access(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::DataAccess(source.into())
    }
}

/// Read and write operations the forecast engine needs.
///
/// Reads are scoped lookups over reference and fact data; the only write is
/// the replace of one (financial year, element, profit centre) entry set,
/// which implementations must perform atomically.
#[async_trait]
pub trait ForecastRepository: Send + Sync {
    /// All forecast element reference rows.
    async fn forecast_elements(&self) -> Result<Vec<ForecastElement>, RepositoryError>;

    /// Cost centres belonging to the given profit centres.
    async fn cost_centres_by_profit_centres(
        &self,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<CostCentre>, RepositoryError>;

    /// Consultants belonging to the given cost centres.
    async fn consultants_by_cost_centres(
        &self,
        cost_centre_ids: &[CostCentreId],
    ) -> Result<Vec<Consultant>, RepositoryError>;

    /// Every consultant, for external-consultant detection.
    async fn all_consultants(&self) -> Result<Vec<Consultant>, RepositoryError>;

    /// Projects owned by the given profit centres.
    async fn projects_by_profit_centres(
        &self,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<Project>, RepositoryError>;

    /// Project assignments of the given consultants.
    async fn assignments_by_consultants(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> Result<Vec<ProjectAssignment>, RepositoryError>;

    /// Project assignments on the given projects.
    async fn assignments_by_projects(
        &self,
        project_ids: &[ProjectId],
    ) -> Result<Vec<ProjectAssignment>, RepositoryError>;

    /// Roster entries on the given projects within the inclusive date range.
    async fn roster_entries_by_projects(
        &self,
        project_ids: &[ProjectId],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RosterEntry>, RepositoryError>;

    /// Roster entries of the given consultants within the inclusive date range.
    async fn roster_entries_by_consultants(
        &self,
        consultant_ids: &[ConsultantId],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RosterEntry>, RepositoryError>;

    /// Revenue-type project forecast entries for the given projects and year.
    async fn project_forecast_revenue(
        &self,
        project_ids: &[ProjectId],
        financial_year: i32,
    ) -> Result<Vec<ProjectForecastEntry>, RepositoryError>;

    /// Stored forecast entries for the given year and profit centres.
    async fn forecast_entries(
        &self,
        financial_year: i32,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<ForecastEntry>, RepositoryError>;

    /// Replaces all entries of one (year, element, profit centre) partition.
    ///
    /// Implementations delete the existing rows and insert `rows` within a
    /// single atomic unit; a failure leaves the previous entries in place.
    async fn replace_forecast_entries(
        &self,
        financial_year: i32,
        forecast_element_id: ForecastElementId,
        profit_centre_id: ProfitCentreId,
        rows: Vec<NewForecastEntry>,
    ) -> Result<(), RepositoryError>;
}
