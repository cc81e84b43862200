//! `SeaORM` Entity for forecast_elements table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "forecast_elements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Element key (e.g. `TMREV`).
    #[sea_orm(unique)]
    pub key: String,
    pub name: String,
    /// Category code: 1 = cost of sales, 2 = revenue, 3 = overhead.
    pub element_type: i16,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::forecast_entries::Entity")]
    ForecastEntries,
}

impl Related<super::forecast_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ForecastEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
