//! Database seeder for Prognos development and testing.
//!
//! Seeds the forecast element reference rows and a demo company with two
//! profit centres, consultants, projects, and a month of roster data.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use prognos_core::forecast::ElementCode;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use prognos_db::entities::{
    companies, consultants, cost_centres, forecast_elements, profit_centres, project_assignments,
    project_forecast_entries, projects, roster_entries,
    sea_orm_active_enums::{ConsultantType, ProjectForecastType, ProjectType},
};

/// Demo company ID (consistent for all seeds)
const DEMO_COMPANY_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo profit centre IDs
const DEMO_PC_CONSULTING_ID: &str = "00000000-0000-0000-0000-000000000011";
const DEMO_PC_DELIVERY_ID: &str = "00000000-0000-0000-0000-000000000012";
/// Demo cost centre IDs
const DEMO_CC_CONSULTING_ID: &str = "00000000-0000-0000-0000-000000000021";
const DEMO_CC_DELIVERY_ID: &str = "00000000-0000-0000-0000-000000000022";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = prognos_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding forecast elements...");
    seed_forecast_elements(&db).await;

    println!("Seeding demo company...");
    seed_demo_company(&db).await;

    println!("Seeding demo consultants and projects...");
    seed_demo_workforce(&db).await;

    println!("Seeding demo roster and project forecasts...");
    seed_demo_facts(&db).await;

    println!("Seeding complete!");
}

fn parse_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap()
}

async fn seed_forecast_elements(db: &DatabaseConnection) {
    let now = Utc::now().into();

    for code in ElementCode::ALL {
        let existing = forecast_elements::Entity::find()
            .filter(forecast_elements::Column::Key.eq(code.key()))
            .one(db)
            .await
            .expect("Failed to query forecast elements");

        if existing.is_some() {
            continue;
        }

        let element = forecast_elements::ActiveModel {
            id: Set(Uuid::new_v4()),
            key: Set(code.key().to_string()),
            name: Set(code.name().to_string()),
            element_type: Set(code.element_type().as_code()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        element
            .insert(db)
            .await
            .expect("Failed to insert forecast element");
    }
}

async fn seed_demo_company(db: &DatabaseConnection) {
    let now = Utc::now().into();

    if companies::Entity::find_by_id(parse_id(DEMO_COMPANY_ID))
        .one(db)
        .await
        .expect("Failed to query companies")
        .is_some()
    {
        return;
    }

    let company = companies::ActiveModel {
        id: Set(parse_id(DEMO_COMPANY_ID)),
        name: Set("Demo Consulting Group".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    company.insert(db).await.expect("Failed to insert company");

    for (pc_id, cc_id, name) in [
        (DEMO_PC_CONSULTING_ID, DEMO_CC_CONSULTING_ID, "Consulting"),
        (DEMO_PC_DELIVERY_ID, DEMO_CC_DELIVERY_ID, "Delivery"),
    ] {
        let profit_centre = profit_centres::ActiveModel {
            id: Set(parse_id(pc_id)),
            company_id: Set(parse_id(DEMO_COMPANY_ID)),
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        profit_centre
            .insert(db)
            .await
            .expect("Failed to insert profit centre");

        let cost_centre = cost_centres::ActiveModel {
            id: Set(parse_id(cc_id)),
            profit_centre_id: Set(parse_id(pc_id)),
            name: Set(format!("{name} Staff")),
            created_at: Set(now),
            updated_at: Set(now),
        };
        cost_centre
            .insert(db)
            .await
            .expect("Failed to insert cost centre");
    }
}

async fn seed_demo_workforce(db: &DatabaseConnection) {
    let now = Utc::now().into();

    if consultants::Entity::find()
        .one(db)
        .await
        .expect("Failed to query consultants")
        .is_some()
    {
        return;
    }

    let permanent = consultants::ActiveModel {
        id: Set(Uuid::new_v4()),
        cost_centre_id: Set(parse_id(DEMO_CC_CONSULTING_ID)),
        name: Set("Grace Wells".to_string()),
        consultant_type: Set(ConsultantType::Permanent),
        annual_salary: Set(Some(Decimal::from(120_000))),
        daily_rate: Set(None),
        internal_rate: Set(Some(Decimal::from(500))),
        bonus_provision: Set(Some(Decimal::from(12_000))),
        start_date: Set(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        end_date: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    permanent
        .insert(db)
        .await
        .expect("Failed to insert consultant");

    let contractor = consultants::ActiveModel {
        id: Set(Uuid::new_v4()),
        cost_centre_id: Set(parse_id(DEMO_CC_DELIVERY_ID)),
        name: Set("Ada Novak".to_string()),
        consultant_type: Set(ConsultantType::Contractor),
        annual_salary: Set(None),
        daily_rate: Set(Some(Decimal::from(900))),
        internal_rate: Set(Some(Decimal::from(650))),
        bonus_provision: Set(None),
        start_date: Set(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()),
        end_date: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    contractor
        .insert(db)
        .await
        .expect("Failed to insert consultant");

    let time_and_materials = projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        profit_centre_id: Set(parse_id(DEMO_PC_DELIVERY_ID)),
        name: Set("Platform Rollout".to_string()),
        project_type: Set(ProjectType::TimeAndMaterials),
        created_at: Set(now),
        updated_at: Set(now),
    };
    time_and_materials
        .insert(db)
        .await
        .expect("Failed to insert project");

    let fixed_price = projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        profit_centre_id: Set(parse_id(DEMO_PC_CONSULTING_ID)),
        name: Set("ERP Replacement".to_string()),
        project_type: Set(ProjectType::FixedPrice),
        created_at: Set(now),
        updated_at: Set(now),
    };
    fixed_price
        .insert(db)
        .await
        .expect("Failed to insert project");
}

async fn seed_demo_facts(db: &DatabaseConnection) {
    let now = Utc::now().into();

    if roster_entries::Entity::find()
        .one(db)
        .await
        .expect("Failed to query roster entries")
        .is_some()
    {
        return;
    }

    let contractor = consultants::Entity::find()
        .filter(consultants::Column::ConsultantType.eq(ConsultantType::Contractor))
        .one(db)
        .await
        .expect("Failed to query consultants")
        .expect("Contractor seeded");

    let time_and_materials = projects::Entity::find()
        .filter(projects::Column::ProjectType.eq(ProjectType::TimeAndMaterials))
        .one(db)
        .await
        .expect("Failed to query projects")
        .expect("Project seeded");

    let fixed_price = projects::Entity::find()
        .filter(projects::Column::ProjectType.eq(ProjectType::FixedPrice))
        .one(db)
        .await
        .expect("Failed to query projects")
        .expect("Project seeded");

    let assignment = project_assignments::ActiveModel {
        id: Set(Uuid::new_v4()),
        consultant_id: Set(contractor.id),
        project_id: Set(time_and_materials.id),
        day_rate: Set(Some(Decimal::from(1_400))),
        internal_rate: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    assignment
        .insert(db)
        .await
        .expect("Failed to insert assignment");

    // A working week of rostered days in August 2025.
    for day in 4..=8 {
        let entry = roster_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            consultant_id: Set(contractor.id),
            project_id: Set(time_and_materials.id),
            date: Set(NaiveDate::from_ymd_opt(2025, 8, day).unwrap()),
            probability: Set("100%".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        entry
            .insert(db)
            .await
            .expect("Failed to insert roster entry");
    }

    // A year of fixed-price revenue schedule for financial year 2025.
    for financial_month in 1..=12 {
        let entry = project_forecast_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(fixed_price.id),
            financial_year: Set(2025),
            financial_month: Set(financial_month),
            entry_type: Set(ProjectForecastType::Revenue),
            amount: Set(Decimal::from(5_000)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        entry
            .insert(db)
            .await
            .expect("Failed to insert project forecast entry");
    }
}
