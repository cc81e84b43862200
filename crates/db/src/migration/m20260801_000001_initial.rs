//! Initial database migration.
//!
//! Creates the enums, organizational tables, fact tables, and the forecast
//! entry table with its uniqueness guarantee.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ORGANIZATIONAL STRUCTURE
        // ============================================================
        db.execute_unprepared(COMPANIES_SQL).await?;
        db.execute_unprepared(PROFIT_CENTRES_SQL).await?;
        db.execute_unprepared(COST_CENTRES_SQL).await?;

        // ============================================================
        // PART 3: CONSULTANTS & PROJECTS
        // ============================================================
        db.execute_unprepared(CONSULTANTS_SQL).await?;
        db.execute_unprepared(PROJECTS_SQL).await?;
        db.execute_unprepared(PROJECT_ASSIGNMENTS_SQL).await?;
        db.execute_unprepared(ROSTER_ENTRIES_SQL).await?;

        // ============================================================
        // PART 4: FORECAST DATA
        // ============================================================
        db.execute_unprepared(FORECAST_ELEMENTS_SQL).await?;
        db.execute_unprepared(FORECAST_ENTRIES_SQL).await?;
        db.execute_unprepared(PROJECT_FORECAST_ENTRIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE consultant_type AS ENUM ('permanent', 'contractor');
CREATE TYPE project_type AS ENUM ('time_and_materials', 'fixed_price');
CREATE TYPE project_forecast_type AS ENUM ('revenue', 'cost');
";

const COMPANIES_SQL: &str = r"
CREATE TABLE companies (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const PROFIT_CENTRES_SQL: &str = r"
CREATE TABLE profit_centres (
    id UUID PRIMARY KEY,
    company_id UUID NOT NULL REFERENCES companies(id),
    name TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_profit_centres_company ON profit_centres(company_id);
";

const COST_CENTRES_SQL: &str = r"
CREATE TABLE cost_centres (
    id UUID PRIMARY KEY,
    profit_centre_id UUID NOT NULL REFERENCES profit_centres(id),
    name TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_cost_centres_profit_centre ON cost_centres(profit_centre_id);
";

const CONSULTANTS_SQL: &str = r"
CREATE TABLE consultants (
    id UUID PRIMARY KEY,
    cost_centre_id UUID NOT NULL REFERENCES cost_centres(id),
    name TEXT NOT NULL,
    consultant_type consultant_type NOT NULL,
    annual_salary NUMERIC(19, 4),
    daily_rate NUMERIC(19, 4),
    internal_rate NUMERIC(19, 4),
    bonus_provision NUMERIC(19, 4),
    start_date DATE NOT NULL,
    end_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_consultant_dates CHECK (end_date IS NULL OR end_date >= start_date)
);

CREATE INDEX idx_consultants_cost_centre ON consultants(cost_centre_id);
";

const PROJECTS_SQL: &str = r"
CREATE TABLE projects (
    id UUID PRIMARY KEY,
    profit_centre_id UUID NOT NULL REFERENCES profit_centres(id),
    name TEXT NOT NULL,
    project_type project_type NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_projects_profit_centre ON projects(profit_centre_id);
";

const PROJECT_ASSIGNMENTS_SQL: &str = r"
CREATE TABLE project_assignments (
    id UUID PRIMARY KEY,
    consultant_id UUID NOT NULL REFERENCES consultants(id),
    project_id UUID NOT NULL REFERENCES projects(id),
    day_rate NUMERIC(19, 4),
    internal_rate NUMERIC(19, 4),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_assignment UNIQUE (consultant_id, project_id)
);

CREATE INDEX idx_assignments_project ON project_assignments(project_id);
";

const ROSTER_ENTRIES_SQL: &str = r"
CREATE TABLE roster_entries (
    id UUID PRIMARY KEY,
    consultant_id UUID NOT NULL REFERENCES consultants(id),
    project_id UUID NOT NULL REFERENCES projects(id),
    date DATE NOT NULL,
    probability TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_roster_entries_project_date ON roster_entries(project_id, date);
CREATE INDEX idx_roster_entries_consultant_date ON roster_entries(consultant_id, date);
";

const FORECAST_ELEMENTS_SQL: &str = r"
CREATE TABLE forecast_elements (
    id UUID PRIMARY KEY,
    key TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    element_type SMALLINT NOT NULL CHECK (element_type IN (1, 2, 3)),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const FORECAST_ENTRIES_SQL: &str = r"
CREATE TABLE forecast_entries (
    id UUID PRIMARY KEY,
    financial_year INTEGER NOT NULL,
    financial_month INTEGER NOT NULL CHECK (financial_month BETWEEN 1 AND 12),
    forecast_element_id UUID NOT NULL REFERENCES forecast_elements(id),
    profit_centre_id UUID NOT NULL REFERENCES profit_centres(id),
    cost_centre_id UUID REFERENCES cost_centres(id),
    amount NUMERIC(19, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_forecast_entry UNIQUE NULLS NOT DISTINCT
        (financial_year, financial_month, forecast_element_id, profit_centre_id, cost_centre_id)
);

CREATE INDEX idx_forecast_entries_partition
    ON forecast_entries(financial_year, forecast_element_id, profit_centre_id);
";

const PROJECT_FORECAST_ENTRIES_SQL: &str = r"
CREATE TABLE project_forecast_entries (
    id UUID PRIMARY KEY,
    project_id UUID NOT NULL REFERENCES projects(id),
    financial_year INTEGER NOT NULL,
    financial_month INTEGER NOT NULL CHECK (financial_month BETWEEN 1 AND 12),
    entry_type project_forecast_type NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_project_forecast_entry
        UNIQUE (project_id, financial_year, financial_month, entry_type)
);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS project_forecast_entries;
DROP TABLE IF EXISTS forecast_entries;
DROP TABLE IF EXISTS forecast_elements;
DROP TABLE IF EXISTS roster_entries;
DROP TABLE IF EXISTS project_assignments;
DROP TABLE IF EXISTS projects;
DROP TABLE IF EXISTS consultants;
DROP TABLE IF EXISTS cost_centres;
DROP TABLE IF EXISTS profit_centres;
DROP TABLE IF EXISTS companies;
DROP TYPE IF EXISTS project_forecast_type;
DROP TYPE IF EXISTS project_type;
DROP TYPE IF EXISTS consultant_type;
";
