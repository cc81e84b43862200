//! Database enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employment type of a consultant.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "consultant_type")]
pub enum ConsultantType {
    /// Salaried permanent staff.
    #[sea_orm(string_value = "permanent")]
    Permanent,
    /// Daily-rate contractor.
    #[sea_orm(string_value = "contractor")]
    Contractor,
}

/// Commercial model of a project.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_type")]
pub enum ProjectType {
    /// Billed per rostered day.
    #[sea_orm(string_value = "time_and_materials")]
    TimeAndMaterials,
    /// Billed against a fixed-price schedule.
    #[sea_orm(string_value = "fixed_price")]
    FixedPrice,
}

/// Kind of a project forecast entry.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_forecast_type")]
pub enum ProjectForecastType {
    /// Forecast revenue.
    #[sea_orm(string_value = "revenue")]
    Revenue,
    /// Forecast cost.
    #[sea_orm(string_value = "cost")]
    Cost,
}
