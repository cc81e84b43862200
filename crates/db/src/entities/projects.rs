//! `SeaORM` Entity for projects table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ProjectType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub profit_centre_id: Uuid,
    pub name: String,
    pub project_type: ProjectType,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profit_centres::Entity",
        from = "Column::ProfitCentreId",
        to = "super::profit_centres::Column::Id"
    )]
    ProfitCentres,
    #[sea_orm(has_many = "super::project_assignments::Entity")]
    ProjectAssignments,
    #[sea_orm(has_many = "super::roster_entries::Entity")]
    RosterEntries,
    #[sea_orm(has_many = "super::project_forecast_entries::Entity")]
    ProjectForecastEntries,
}

impl Related<super::profit_centres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfitCentres.def()
    }
}

impl Related<super::project_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectAssignments.def()
    }
}

impl Related<super::roster_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterEntries.def()
    }
}

impl Related<super::project_forecast_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectForecastEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
