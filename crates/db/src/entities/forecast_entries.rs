//! `SeaORM` Entity for forecast_entries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "forecast_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub financial_year: i32,
    /// Financial month, 1-12.
    pub financial_month: i32,
    pub forecast_element_id: Uuid,
    pub profit_centre_id: Uuid,
    pub cost_centre_id: Option<Uuid>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub amount: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::forecast_elements::Entity",
        from = "Column::ForecastElementId",
        to = "super::forecast_elements::Column::Id"
    )]
    ForecastElements,
    #[sea_orm(
        belongs_to = "super::profit_centres::Entity",
        from = "Column::ProfitCentreId",
        to = "super::profit_centres::Column::Id"
    )]
    ProfitCentres,
    #[sea_orm(
        belongs_to = "super::cost_centres::Entity",
        from = "Column::CostCentreId",
        to = "super::cost_centres::Column::Id"
    )]
    CostCentres,
}

impl Related<super::forecast_elements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ForecastElements.def()
    }
}

impl Related<super::profit_centres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfitCentres.def()
    }
}

impl Related<super::cost_centres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CostCentres.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
