//! `SeaORM` entity definitions.

pub mod companies;
pub mod consultants;
pub mod cost_centres;
pub mod forecast_elements;
pub mod forecast_entries;
pub mod profit_centres;
pub mod project_assignments;
pub mod project_forecast_entries;
pub mod projects;
pub mod roster_entries;
pub mod sea_orm_active_enums;
