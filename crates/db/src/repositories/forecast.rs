//! SQL implementation of the core forecast repository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use prognos_core::forecast::{
    Consultant, ConsultantType, CostCentre, ForecastElement, ForecastEntry, ForecastRepository,
    NewForecastEntry, Project, ProjectAssignment, ProjectForecastEntry, ProjectForecastType,
    ProjectType, RepositoryError, RosterEntry,
};
use prognos_core::forecast::ElementType;
use prognos_shared::types::{
    ConsultantId, CostCentreId, ForecastElementId, ForecastEntryId, ProfitCentreId,
    ProjectAssignmentId, ProjectForecastEntryId, ProjectId, RosterEntryId,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{
    consultants, cost_centres, forecast_elements, forecast_entries, project_assignments,
    project_forecast_entries, projects, roster_entries, sea_orm_active_enums,
};

/// Forecast repository backed by PostgreSQL via `SeaORM`.
#[derive(Debug, Clone)]
pub struct SeaOrmForecastRepository {
    db: DatabaseConnection,
}

impl SeaOrmForecastRepository {
    /// Creates a new repository over an established connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(err: sea_orm::DbErr) -> RepositoryError {
    RepositoryError::data_access(err)
}

// ============================================================================
// Model -> domain mapping
// ============================================================================

fn map_element(model: forecast_elements::Model) -> Result<ForecastElement, RepositoryError> {
    let element_type = ElementType::from_code(model.element_type).ok_or_else(|| {
        RepositoryError::data_access(format!(
            "forecast element {} has unknown element_type {}",
            model.key, model.element_type
        ))
    })?;

    Ok(ForecastElement {
        id: ForecastElementId::from_uuid(model.id),
        key: model.key,
        name: model.name,
        element_type,
    })
}

fn map_cost_centre(model: cost_centres::Model) -> CostCentre {
    CostCentre {
        id: CostCentreId::from_uuid(model.id),
        name: model.name,
        profit_centre_id: ProfitCentreId::from_uuid(model.profit_centre_id),
    }
}

fn map_consultant(model: consultants::Model) -> Consultant {
    let consultant_type = match model.consultant_type {
        sea_orm_active_enums::ConsultantType::Permanent => ConsultantType::Permanent,
        sea_orm_active_enums::ConsultantType::Contractor => ConsultantType::Contractor,
    };

    Consultant {
        id: ConsultantId::from_uuid(model.id),
        name: model.name,
        consultant_type,
        annual_salary: model.annual_salary,
        daily_rate: model.daily_rate,
        internal_rate: model.internal_rate,
        bonus_provision: model.bonus_provision,
        start_date: model.start_date,
        end_date: model.end_date,
        cost_centre_id: CostCentreId::from_uuid(model.cost_centre_id),
    }
}

fn map_project(model: projects::Model) -> Project {
    let project_type = match model.project_type {
        sea_orm_active_enums::ProjectType::TimeAndMaterials => ProjectType::TimeAndMaterials,
        sea_orm_active_enums::ProjectType::FixedPrice => ProjectType::FixedPrice,
    };

    Project {
        id: ProjectId::from_uuid(model.id),
        name: model.name,
        profit_centre_id: ProfitCentreId::from_uuid(model.profit_centre_id),
        project_type,
    }
}

fn map_assignment(model: project_assignments::Model) -> ProjectAssignment {
    ProjectAssignment {
        id: ProjectAssignmentId::from_uuid(model.id),
        consultant_id: ConsultantId::from_uuid(model.consultant_id),
        project_id: ProjectId::from_uuid(model.project_id),
        day_rate: model.day_rate,
        internal_rate: model.internal_rate,
    }
}

fn map_roster_entry(model: roster_entries::Model) -> RosterEntry {
    RosterEntry {
        id: RosterEntryId::from_uuid(model.id),
        consultant_id: ConsultantId::from_uuid(model.consultant_id),
        project_id: ProjectId::from_uuid(model.project_id),
        date: model.date,
        probability: model.probability,
    }
}

fn map_project_forecast_entry(model: project_forecast_entries::Model) -> ProjectForecastEntry {
    let entry_type = match model.entry_type {
        sea_orm_active_enums::ProjectForecastType::Revenue => ProjectForecastType::Revenue,
        sea_orm_active_enums::ProjectForecastType::Cost => ProjectForecastType::Cost,
    };

    ProjectForecastEntry {
        id: ProjectForecastEntryId::from_uuid(model.id),
        project_id: ProjectId::from_uuid(model.project_id),
        financial_year: model.financial_year,
        financial_month: model.financial_month.unsigned_abs(),
        entry_type,
        amount: model.amount,
    }
}

fn map_forecast_entry(model: forecast_entries::Model) -> ForecastEntry {
    ForecastEntry {
        id: ForecastEntryId::from_uuid(model.id),
        financial_year: model.financial_year,
        financial_month: model.financial_month.unsigned_abs(),
        forecast_element_id: ForecastElementId::from_uuid(model.forecast_element_id),
        profit_centre_id: ProfitCentreId::from_uuid(model.profit_centre_id),
        cost_centre_id: model.cost_centre_id.map(CostCentreId::from_uuid),
        amount: model.amount,
    }
}

// ============================================================================
// Repository implementation
// ============================================================================

#[async_trait]
impl ForecastRepository for SeaOrmForecastRepository {
    async fn forecast_elements(&self) -> Result<Vec<ForecastElement>, RepositoryError> {
        forecast_elements::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_element)
            .collect()
    }

    async fn cost_centres_by_profit_centres(
        &self,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<CostCentre>, RepositoryError> {
        let ids: Vec<Uuid> = profit_centre_ids.iter().map(|id| id.into_inner()).collect();

        Ok(cost_centres::Entity::find()
            .filter(cost_centres::Column::ProfitCentreId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_cost_centre)
            .collect())
    }

    async fn consultants_by_cost_centres(
        &self,
        cost_centre_ids: &[CostCentreId],
    ) -> Result<Vec<Consultant>, RepositoryError> {
        let ids: Vec<Uuid> = cost_centre_ids.iter().map(|id| id.into_inner()).collect();

        Ok(consultants::Entity::find()
            .filter(consultants::Column::CostCentreId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_consultant)
            .collect())
    }

    async fn all_consultants(&self) -> Result<Vec<Consultant>, RepositoryError> {
        Ok(consultants::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_consultant)
            .collect())
    }

    async fn projects_by_profit_centres(
        &self,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<Project>, RepositoryError> {
        let ids: Vec<Uuid> = profit_centre_ids.iter().map(|id| id.into_inner()).collect();

        Ok(projects::Entity::find()
            .filter(projects::Column::ProfitCentreId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_project)
            .collect())
    }

    async fn assignments_by_consultants(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> Result<Vec<ProjectAssignment>, RepositoryError> {
        let ids: Vec<Uuid> = consultant_ids.iter().map(|id| id.into_inner()).collect();

        Ok(project_assignments::Entity::find()
            .filter(project_assignments::Column::ConsultantId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_assignment)
            .collect())
    }

    async fn assignments_by_projects(
        &self,
        project_ids: &[ProjectId],
    ) -> Result<Vec<ProjectAssignment>, RepositoryError> {
        let ids: Vec<Uuid> = project_ids.iter().map(|id| id.into_inner()).collect();

        Ok(project_assignments::Entity::find()
            .filter(project_assignments::Column::ProjectId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_assignment)
            .collect())
    }

    async fn roster_entries_by_projects(
        &self,
        project_ids: &[ProjectId],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RosterEntry>, RepositoryError> {
        let ids: Vec<Uuid> = project_ids.iter().map(|id| id.into_inner()).collect();

        Ok(roster_entries::Entity::find()
            .filter(roster_entries::Column::ProjectId.is_in(ids))
            .filter(roster_entries::Column::Date.gte(from))
            .filter(roster_entries::Column::Date.lte(to))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_roster_entry)
            .collect())
    }

    async fn roster_entries_by_consultants(
        &self,
        consultant_ids: &[ConsultantId],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RosterEntry>, RepositoryError> {
        let ids: Vec<Uuid> = consultant_ids.iter().map(|id| id.into_inner()).collect();

        Ok(roster_entries::Entity::find()
            .filter(roster_entries::Column::ConsultantId.is_in(ids))
            .filter(roster_entries::Column::Date.gte(from))
            .filter(roster_entries::Column::Date.lte(to))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_roster_entry)
            .collect())
    }

    async fn project_forecast_revenue(
        &self,
        project_ids: &[ProjectId],
        financial_year: i32,
    ) -> Result<Vec<ProjectForecastEntry>, RepositoryError> {
        let ids: Vec<Uuid> = project_ids.iter().map(|id| id.into_inner()).collect();

        Ok(project_forecast_entries::Entity::find()
            .filter(project_forecast_entries::Column::ProjectId.is_in(ids))
            .filter(project_forecast_entries::Column::FinancialYear.eq(financial_year))
            .filter(
                project_forecast_entries::Column::EntryType
                    .eq(sea_orm_active_enums::ProjectForecastType::Revenue),
            )
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_project_forecast_entry)
            .collect())
    }

    async fn forecast_entries(
        &self,
        financial_year: i32,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Vec<ForecastEntry>, RepositoryError> {
        let ids: Vec<Uuid> = profit_centre_ids.iter().map(|id| id.into_inner()).collect();

        Ok(forecast_entries::Entity::find()
            .filter(forecast_entries::Column::FinancialYear.eq(financial_year))
            .filter(forecast_entries::Column::ProfitCentreId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_forecast_entry)
            .collect())
    }

    async fn replace_forecast_entries(
        &self,
        financial_year: i32,
        forecast_element_id: ForecastElementId,
        profit_centre_id: ProfitCentreId,
        rows: Vec<NewForecastEntry>,
    ) -> Result<(), RepositoryError> {
        // Delete and insert inside one transaction so a failure leaves the
        // previous entries intact.
        let txn = self.db.begin().await.map_err(db_err)?;

        forecast_entries::Entity::delete_many()
            .filter(forecast_entries::Column::FinancialYear.eq(financial_year))
            .filter(
                forecast_entries::Column::ForecastElementId.eq(forecast_element_id.into_inner()),
            )
            .filter(forecast_entries::Column::ProfitCentreId.eq(profit_centre_id.into_inner()))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let now = Utc::now().into();
        for row in rows {
            let model = forecast_entries::ActiveModel {
                id: Set(Uuid::new_v4()),
                financial_year: Set(row.financial_year),
                financial_month: Set(i32::try_from(row.financial_month).unwrap_or_default()),
                forecast_element_id: Set(row.forecast_element_id.into_inner()),
                profit_centre_id: Set(row.profit_centre_id.into_inner()),
                cost_centre_id: Set(row.cost_centre_id.map(CostCentreId::into_inner)),
                amount: Set(row.amount),
                created_at: Set(now),
            };
            model.insert(&txn).await.map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;

        tracing::debug!(
            financial_year,
            element = %forecast_element_id,
            profit_centre = %profit_centre_id,
            "replaced forecast entries"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn now() -> chrono::DateTime<chrono::FixedOffset> {
        Utc::now().into()
    }

    #[test]
    fn test_map_element_known_codes() {
        let model = forecast_elements::Model {
            id: Uuid::new_v4(),
            key: "TMREV".to_string(),
            name: "Service Revenue".to_string(),
            element_type: 2,
            created_at: now(),
            updated_at: now(),
        };

        let element = map_element(model).unwrap();
        assert_eq!(element.key, "TMREV");
        assert_eq!(element.element_type, ElementType::Revenue);
    }

    #[test]
    fn test_map_element_rejects_unknown_type() {
        let model = forecast_elements::Model {
            id: Uuid::new_v4(),
            key: "TMREV".to_string(),
            name: "Service Revenue".to_string(),
            element_type: 9,
            created_at: now(),
            updated_at: now(),
        };

        let err = map_element(model).unwrap_err();
        assert!(err.to_string().contains("data access failed"));
    }

    #[test]
    fn test_map_consultant_enum_and_rates() {
        let id = Uuid::new_v4();
        let cost_centre_id = Uuid::new_v4();
        let model = consultants::Model {
            id,
            cost_centre_id,
            name: "Ada Novak".to_string(),
            consultant_type: sea_orm_active_enums::ConsultantType::Contractor,
            annual_salary: None,
            daily_rate: Some(dec!(900)),
            internal_rate: Some(dec!(650)),
            bonus_provision: None,
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: None,
            created_at: now(),
            updated_at: now(),
        };

        let consultant = map_consultant(model);
        assert_eq!(consultant.consultant_type, ConsultantType::Contractor);
        assert_eq!(consultant.daily_rate, Some(dec!(900)));
        assert_eq!(consultant.cost_centre_id.into_inner(), cost_centre_id);
    }

    #[test]
    fn test_map_forecast_entry_month_and_dimension() {
        let model = forecast_entries::Model {
            id: Uuid::new_v4(),
            financial_year: 2025,
            financial_month: 7,
            forecast_element_id: Uuid::new_v4(),
            profit_centre_id: Uuid::new_v4(),
            cost_centre_id: None,
            amount: dec!(-1000),
            created_at: now(),
        };

        let entry = map_forecast_entry(model);
        assert_eq!(entry.financial_month, 7);
        assert!(entry.cost_centre_id.is_none());
        assert_eq!(entry.amount, dec!(-1000));
    }
}
