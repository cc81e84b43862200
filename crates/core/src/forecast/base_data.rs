//! Base data gathering for forecast calculations.
//!
//! One load serves every calculator of a recalculation run: cost centres,
//! consultants, projects, and the merged project-assignment lookup for a set
//! of profit centres, plus the forecast element reference rows.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use prognos_shared::config::ForecastConfig;
use prognos_shared::types::{ConsultantId, CostCentreId, ProfitCentreId, ProjectId};
use rust_decimal::Decimal;

use super::repository::{ForecastRepository, RepositoryError};
use super::types::{
    Consultant, CostCentre, ElementCode, ForecastElement, Project, ProjectAssignment,
};

/// Rates of one consultant on one project.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentRates {
    /// Billable day rate.
    pub day_rate: Option<Decimal>,
    /// Internal rate for cross-profit-centre work.
    pub internal_rate: Option<Decimal>,
}

/// Lookup from (consultant, project) to assignment rates.
pub type AssignmentLookup = HashMap<(ConsultantId, ProjectId), AssignmentRates>;

/// Everything the line-item calculators need, loaded once per profit-centre
/// set.
#[derive(Debug, Clone)]
pub struct BaseData {
    /// Cost centres of the loaded profit centres.
    pub cost_centres: Vec<CostCentre>,
    /// Consultants belonging to those cost centres.
    pub consultants: Vec<Consultant>,
    /// Every consultant, for external-consultant detection.
    pub all_consultants: Vec<Consultant>,
    /// Projects of the loaded profit centres.
    pub projects: Vec<Project>,
    /// Merged assignment lookup.
    pub assignments: AssignmentLookup,
    /// Forecast element reference rows.
    pub elements: Vec<ForecastElement>,
}

impl BaseData {
    /// Loads base data for a set of profit centres.
    ///
    /// Independent reads run concurrently; any data-access failure aborts the
    /// load and propagates.
    pub async fn load<R: ForecastRepository + ?Sized>(
        repo: &R,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Self, RepositoryError> {
        let (cost_centres, projects, elements, all_consultants) = tokio::try_join!(
            repo.cost_centres_by_profit_centres(profit_centre_ids),
            repo.projects_by_profit_centres(profit_centre_ids),
            repo.forecast_elements(),
            repo.all_consultants(),
        )?;

        let cost_centre_ids: Vec<CostCentreId> = cost_centres.iter().map(|cc| cc.id).collect();
        let consultants = repo.consultants_by_cost_centres(&cost_centre_ids).await?;

        let consultant_ids: Vec<ConsultantId> = consultants.iter().map(|c| c.id).collect();
        let project_ids: Vec<ProjectId> = projects.iter().map(|p| p.id).collect();

        // The two assignment queries overlap; merging keeps one row per
        // (consultant, project).
        let (by_consultant, by_project) = tokio::try_join!(
            repo.assignments_by_consultants(&consultant_ids),
            repo.assignments_by_projects(&project_ids),
        )?;

        let mut assignments = AssignmentLookup::new();
        for assignment in by_consultant.into_iter().chain(by_project) {
            insert_assignment(&mut assignments, &assignment);
        }

        tracing::debug!(
            profit_centres = profit_centre_ids.len(),
            cost_centres = cost_centres.len(),
            consultants = consultants.len(),
            projects = projects.len(),
            assignments = assignments.len(),
            "loaded forecast base data"
        );

        Ok(Self {
            cost_centres,
            consultants,
            all_consultants,
            projects,
            assignments,
            elements,
        })
    }

    /// Finds the reference row for a computed element, if present.
    #[must_use]
    pub fn element_by_code(&self, code: ElementCode) -> Option<&ForecastElement> {
        self.elements.iter().find(|e| e.key == code.key())
    }

    /// Narrows the loaded data to one profit centre.
    #[must_use]
    pub fn scope(&self, profit_centre_id: ProfitCentreId) -> ProfitCentreScope {
        let cost_centres: Vec<CostCentre> = self
            .cost_centres
            .iter()
            .filter(|cc| cc.profit_centre_id == profit_centre_id)
            .cloned()
            .collect();

        let consultants = self
            .consultants
            .iter()
            .filter(|c| cost_centres.iter().any(|cc| cc.id == c.cost_centre_id))
            .cloned()
            .collect();

        let projects = self
            .projects
            .iter()
            .filter(|p| p.profit_centre_id == profit_centre_id)
            .cloned()
            .collect();

        ProfitCentreScope {
            profit_centre_id,
            cost_centres,
            consultants,
            projects,
        }
    }

    /// Lookup from consultant ID to consultant, over every consultant.
    #[must_use]
    pub fn consultant_lookup(&self) -> HashMap<ConsultantId, &Consultant> {
        self.all_consultants.iter().map(|c| (c.id, c)).collect()
    }

    /// Assignment rates for one consultant on one project, if assigned.
    #[must_use]
    pub fn assignment(
        &self,
        consultant_id: ConsultantId,
        project_id: ProjectId,
    ) -> Option<&AssignmentRates> {
        self.assignments.get(&(consultant_id, project_id))
    }

    /// Billable day rate for a rostered day: the assignment's day rate, or
    /// zero when the consultant has no assignment rate on the project.
    #[must_use]
    pub fn day_rate(&self, consultant_id: ConsultantId, project_id: ProjectId) -> Decimal {
        self.assignment(consultant_id, project_id)
            .and_then(|rates| rates.day_rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Internal rate for a cross-profit-centre day: the assignment's internal
    /// rate, else the consultant's own internal rate, else zero.
    #[must_use]
    pub fn internal_rate(&self, consultant: &Consultant, project_id: ProjectId) -> Decimal {
        self.assignment(consultant.id, project_id)
            .and_then(|rates| rates.internal_rate)
            .or(consultant.internal_rate)
            .unwrap_or(Decimal::ZERO)
    }
}

fn insert_assignment(lookup: &mut AssignmentLookup, assignment: &ProjectAssignment) {
    lookup.insert(
        (assignment.consultant_id, assignment.project_id),
        AssignmentRates {
            day_rate: assignment.day_rate,
            internal_rate: assignment.internal_rate,
        },
    );
}

/// Base data narrowed to one profit centre.
#[derive(Debug, Clone)]
pub struct ProfitCentreScope {
    /// The profit centre being calculated.
    pub profit_centre_id: ProfitCentreId,
    /// Its cost centres.
    pub cost_centres: Vec<CostCentre>,
    /// Consultants of those cost centres.
    pub consultants: Vec<Consultant>,
    /// Its projects.
    pub projects: Vec<Project>,
}

impl ProfitCentreScope {
    /// IDs of the scope's cost centres.
    #[must_use]
    pub fn cost_centre_ids(&self) -> Vec<CostCentreId> {
        self.cost_centres.iter().map(|cc| cc.id).collect()
    }

    /// IDs of the scope's consultants.
    #[must_use]
    pub fn consultant_ids(&self) -> Vec<ConsultantId> {
        self.consultants.iter().map(|c| c.id).collect()
    }

    /// IDs of the scope's projects.
    #[must_use]
    pub fn project_ids(&self) -> Vec<ProjectId> {
        self.projects.iter().map(|p| p.id).collect()
    }

    /// Whether a project belongs to this profit centre.
    #[must_use]
    pub fn contains_project(&self, project_id: ProjectId) -> bool {
        self.projects.iter().any(|p| p.id == project_id)
    }

    /// Whether a cost centre belongs to this profit centre.
    #[must_use]
    pub fn contains_cost_centre(&self, cost_centre_id: CostCentreId) -> bool {
        self.cost_centres.iter().any(|cc| cc.id == cost_centre_id)
    }
}

/// Cache of loaded base data, keyed by the sorted profit-centre ID set.
///
/// Recalculations triggered in quick succession (e.g. per-profit-centre runs
/// of a company forecast) reuse one load instead of re-querying.
pub struct BaseDataCache {
    cache: moka::future::Cache<Vec<ProfitCentreId>, Arc<BaseData>>,
}

impl BaseDataCache {
    /// Creates a cache sized and aged per the forecast configuration.
    #[must_use]
    pub fn new(config: &ForecastConfig) -> Self {
        let cache = moka::future::Cache::builder()
            .max_capacity(config.base_data_capacity)
            .time_to_live(Duration::from_secs(config.base_data_ttl_secs))
            .build();

        Self { cache }
    }

    /// Returns cached base data for the profit-centre set, loading it on miss.
    pub async fn get_or_load<R: ForecastRepository + ?Sized>(
        &self,
        repo: &R,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Arc<BaseData>, RepositoryError> {
        let mut key: Vec<ProfitCentreId> = profit_centre_ids.to_vec();
        key.sort_unstable();
        key.dedup();

        self.cache
            .try_get_with(key.clone(), async {
                BaseData::load(repo, &key).await.map(Arc::new)
            })
            .await
            .map_err(|err: Arc<RepositoryError>| RepositoryError::data_access(err.to_string()))
    }

    /// Drops every cached base-data set.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl std::fmt::Debug for BaseDataCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseDataCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
