//! In-memory repository.
//!
//! Backs engine tests and local experimentation with plain vectors behind an
//! `RwLock`, mirroring the table shapes of the SQL implementation.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use prognos_shared::types::{
    ConsultantId, CostCentreId, ForecastElementId, ForecastEntryId, ProfitCentreId, ProjectId,
};

use super::repository::{ForecastRepository, RepositoryError};
use super::types::{
    Consultant, CostCentre, ElementCode, ForecastElement, ForecastEntry, NewForecastEntry,
    Project, ProjectAssignment, ProjectForecastEntry, ProjectForecastType, RosterEntry,
};

#[derive(Debug, Default)]
struct Inner {
    elements: Vec<ForecastElement>,
    cost_centres: Vec<CostCentre>,
    consultants: Vec<Consultant>,
    projects: Vec<Project>,
    assignments: Vec<ProjectAssignment>,
    roster_entries: Vec<RosterEntry>,
    project_forecast_entries: Vec<ProjectForecastEntry>,
    forecast_entries: Vec<ForecastEntry>,
}

/// An in-memory [`ForecastRepository`].
#[derive(Debug, Default)]
pub struct MemoryRepository {
    inner: RwLock<Inner>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with the seven computed forecast
    /// elements.
    #[must_use]
    pub fn with_standard_elements() -> Self {
        let repo = Self::new();
        for code in ElementCode::ALL {
            repo.add_element(ForecastElement {
                id: ForecastElementId::new(),
                key: code.key().to_string(),
                name: code.name().to_string(),
                element_type: code.element_type(),
            });
        }
        repo
    }

    /// Adds a forecast element reference row.
    pub fn add_element(&self, element: ForecastElement) {
        self.write().elements.push(element);
    }

    /// Adds a cost centre.
    pub fn add_cost_centre(&self, cost_centre: CostCentre) {
        self.write().cost_centres.push(cost_centre);
    }

    /// Adds a consultant.
    pub fn add_consultant(&self, consultant: Consultant) {
        self.write().consultants.push(consultant);
    }

    /// Adds a project.
    pub fn add_project(&self, project: Project) {
        self.write().projects.push(project);
    }

    /// Adds a project assignment.
    pub fn add_assignment(&self, assignment: ProjectAssignment) {
        self.write().assignments.push(assignment);
    }

    /// Adds a roster entry.
    pub fn add_roster_entry(&self, entry: RosterEntry) {
        self.write().roster_entries.push(entry);
    }

    /// Adds a project forecast entry.
    pub fn add_project_forecast_entry(&self, entry: ProjectForecastEntry) {
        self.write().project_forecast_entries.push(entry);
    }

    /// Adds a stored forecast entry directly, bypassing the calculators.
    pub fn add_forecast_entry(&self, entry: ForecastEntry) {
        self.write().forecast_entries.push(entry);
    }

    /// Looks up the ID of a computed element, if seeded.
    #[must_use]
    pub fn element_id(&self, code: ElementCode) -> Option<ForecastElementId> {
        self.read()
            .elements
            .iter()
            .find(|e| e.key == code.key())
            .map(|e| e.id)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("repository lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("repository lock poisoned")
    }
}

#[async_trait]
impl ForecastRepository for MemoryRepository {
    async fn forecast_elements(&self) -> Result<Vec<ForecastElement>, RepositoryError> {
        Ok(self.read().elements.clone())
    }

    async fn cost_centres_by_profit_centres(
        &self,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<CostCentre>, RepositoryError> {
        Ok(self
            .read()
            .cost_centres
            .iter()
            .filter(|cc| profit_centre_ids.contains(&cc.profit_centre_id))
            .cloned()
            .collect())
    }

    async fn consultants_by_cost_centres(
        &self,
        cost_centre_ids: &[CostCentreId],
    ) -> Result<Vec<Consultant>, RepositoryError> {
        Ok(self
            .read()
            .consultants
            .iter()
            .filter(|c| cost_centre_ids.contains(&c.cost_centre_id))
            .cloned()
            .collect())
    }

    async fn all_consultants(&self) -> Result<Vec<Consultant>, RepositoryError> {
        Ok(self.read().consultants.clone())
    }

    async fn projects_by_profit_centres(
        &self,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<Project>, RepositoryError> {
        Ok(self
            .read()
            .projects
            .iter()
            .filter(|p| profit_centre_ids.contains(&p.profit_centre_id))
            .cloned()
            .collect())
    }

    async fn assignments_by_consultants(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> Result<Vec<ProjectAssignment>, RepositoryError> {
        Ok(self
            .read()
            .assignments
            .iter()
            .filter(|a| consultant_ids.contains(&a.consultant_id))
            .cloned()
            .collect())
    }

    async fn assignments_by_projects(
        &self,
        project_ids: &[ProjectId],
    ) -> Result<Vec<ProjectAssignment>, RepositoryError> {
        Ok(self
            .read()
            .assignments
            .iter()
            .filter(|a| project_ids.contains(&a.project_id))
            .cloned()
            .collect())
    }

    async fn roster_entries_by_projects(
        &self,
        project_ids: &[ProjectId],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RosterEntry>, RepositoryError> {
        Ok(self
            .read()
            .roster_entries
            .iter()
            .filter(|r| project_ids.contains(&r.project_id) && r.date >= from && r.date <= to)
            .cloned()
            .collect())
    }

    async fn roster_entries_by_consultants(
        &self,
        consultant_ids: &[ConsultantId],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RosterEntry>, RepositoryError> {
        Ok(self
            .read()
            .roster_entries
            .iter()
            .filter(|r| consultant_ids.contains(&r.consultant_id) && r.date >= from && r.date <= to)
            .cloned()
            .collect())
    }

    async fn project_forecast_revenue(
        &self,
        project_ids: &[ProjectId],
        financial_year: i32,
    ) -> Result<Vec<ProjectForecastEntry>, RepositoryError> {
        Ok(self
            .read()
            .project_forecast_entries
            .iter()
            .filter(|e| {
                e.entry_type == ProjectForecastType::Revenue
                    && e.financial_year == financial_year
                    && project_ids.contains(&e.project_id)
            })
            .cloned()
            .collect())
    }

    async fn forecast_entries(
        &self,
        financial_year: i32,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<ForecastEntry>, RepositoryError> {
        Ok(self
            .read()
            .forecast_entries
            .iter()
            .filter(|e| {
                e.financial_year == financial_year
                    && profit_centre_ids.contains(&e.profit_centre_id)
            })
            .cloned()
            .collect())
    }

    async fn replace_forecast_entries(
        &self,
        financial_year: i32,
        forecast_element_id: ForecastElementId,
        profit_centre_id: ProfitCentreId,
        rows: Vec<NewForecastEntry>,
    ) -> Result<(), RepositoryError> {
        debug_assert!(rows.iter().all(|row| {
            row.financial_year == financial_year
                && row.forecast_element_id == forecast_element_id
                && row.profit_centre_id == profit_centre_id
        }));

        let mut inner = self.write();
        inner.forecast_entries.retain(|e| {
            !(e.financial_year == financial_year
                && e.forecast_element_id == forecast_element_id
                && e.profit_centre_id == profit_centre_id)
        });
        inner
            .forecast_entries
            .extend(rows.into_iter().map(|row| ForecastEntry {
                id: ForecastEntryId::new(),
                financial_year: row.financial_year,
                financial_month: row.financial_month,
                forecast_element_id: row.forecast_element_id,
                profit_centre_id: row.profit_centre_id,
                cost_centre_id: row.cost_centre_id,
                amount: row.amount,
            }));

        Ok(())
    }
}
