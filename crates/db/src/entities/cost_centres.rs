//! `SeaORM` Entity for cost_centres table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "cost_centres")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub profit_centre_id: Uuid,
    pub name: String,
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
    #[sea_orm(has_many = "super::consultants::Entity")]
    Consultants,
}

impl Related<super::profit_centres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfitCentres.def()
    }
}

impl Related<super::consultants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consultants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
