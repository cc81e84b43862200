//! `SeaORM` Entity for consultants table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ConsultantType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "consultants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub cost_centre_id: Uuid,
    pub name: String,
    pub consultant_type: ConsultantType,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))", nullable)]
    pub annual_salary: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))", nullable)]
    pub daily_rate: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))", nullable)]
    pub internal_rate: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))", nullable)]
    pub bonus_provision: Option<Decimal>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cost_centres::Entity",
        from = "Column::CostCentreId",
        to = "super::cost_centres::Column::Id"
    )]
    CostCentres,
    #[sea_orm(has_many = "super::project_assignments::Entity")]
    ProjectAssignments,
    #[sea_orm(has_many = "super::roster_entries::Entity")]
    RosterEntries,
}

impl Related<super::cost_centres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CostCentres.def()
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

impl ActiveModelBehavior for ActiveModel {}
