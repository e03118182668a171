//! # Common Test Utilities
//!
//! In-memory SQLite database with the league schema applied, plus small
//! fixtures for the rows most tests need.

use std::sync::Once;

use chrono::{NaiveDate, NaiveDateTime};
use entity::{division, event, location, program, registrant, team};
use migration::{Migrator, MigratorTrait};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DatabaseConnection};

static INIT: Once = Once::new();

/// Initialize tracing once per test binary.
pub fn init_test_env() {
    INIT.call_once(|| {
        let config = logging::LoggingConfig {
            level: "debug".to_string(),
            format: "compact".to_string(),
            ..Default::default()
        };
        // A subscriber may already be installed by another test.
        let _ = logging::init_with_config(config);
    });
}

/// Connects to a fresh in-memory database and applies every migration.
pub async fn setup_db() -> DatabaseConnection {
    init_test_env();
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");
    db
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub async fn insert_registrant(db: &DatabaseConnection, first_name: &str) -> registrant::Model {
    registrant::ActiveModel {
        guardian_id: Set("guardian-1".to_string()),
        first_name: Set(first_name.to_string()),
        last_name: Set("Ruiz".to_string()),
        birth_date: Set(datetime(2015, 4, 2, 0, 0)),
        sex: Set("F".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert registrant")
}

pub async fn insert_program(db: &DatabaseConnection) -> program::Model {
    program::ActiveModel {
        name: Set("Spring 2024".to_string()),
        description: Set(Some("Recreational spring season".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert program")
}

pub async fn insert_division(db: &DatabaseConnection, program_id: i32) -> division::Model {
    division::ActiveModel {
        name: Set("U10".to_string()),
        program_id: Set(program_id),
        age_min: Set("8".to_string()),
        age_max: Set("10".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert division")
}

pub async fn insert_team(db: &DatabaseConnection, name: &str, manager_id: i32, division_id: i32) -> team::Model {
    team::ActiveModel {
        name: Set(name.to_string()),
        manager_id: Set(manager_id),
        division_id: Set(division_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert team")
}

pub async fn insert_location(db: &DatabaseConnection) -> location::Model {
    location::ActiveModel {
        name: Set("Riverside Park".to_string()),
        latitude: Set(dec!(40.5)),
        longitude: Set(dec!(-74.25)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert location")
}

pub async fn insert_event(db: &DatabaseConnection, location_id: i32, program_id: Option<i32>) -> event::Model {
    event::ActiveModel {
        name: Set("Opening Day".to_string()),
        event_type: Set(Some("tournament".to_string())),
        start_date: Set(datetime(2024, 4, 6, 9, 0)),
        end_date: Set(datetime(2024, 4, 6, 17, 0)),
        location_id: Set(location_id),
        program_id: Set(program_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert event")
}
