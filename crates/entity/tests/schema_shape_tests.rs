//! Schema shape tests for the entity crate
//!
//! Every table must expose exactly the declared column names, types and
//! nullability. These tests only inspect entity metadata and need no database.

use entity::{coach, division, enrollee, event, game, location, player, program, registrant, team};
use sea_orm::{ColumnTrait, ColumnType, EntityName, IdenStatic, Iterable, PrimaryKeyToColumn};

const NOT_NULL: bool = false;
const NULL: bool = true;

/// Collects (name, type, nullable) for every column of an entity, in declaration order.
fn shape<C>() -> Vec<(String, ColumnType, bool)>
where
    C: ColumnTrait,
{
    C::iter()
        .map(|column| {
            let def = column.def();
            (
                column.as_str().to_string(),
                def.get_column_type().clone(),
                def.is_null(),
            )
        })
        .collect()
}

fn expected(columns: &[(&str, ColumnType, bool)]) -> Vec<(String, ColumnType, bool)> {
    columns
        .iter()
        .map(|(name, ty, null)| (name.to_string(), ty.clone(), *null))
        .collect()
}

#[test]
fn test_table_names() {
    assert_eq!(registrant::Entity.table_name(), "REGISTRANT");
    assert_eq!(enrollee::Entity.table_name(), "ENROLLEE");
    assert_eq!(player::Entity.table_name(), "PLAYER");
    assert_eq!(team::Entity.table_name(), "TEAM");
    assert_eq!(coach::Entity.table_name(), "COACH");
    assert_eq!(program::Entity.table_name(), "PROGRAM");
    assert_eq!(division::Entity.table_name(), "DIVISION");
    assert_eq!(event::Entity.table_name(), "EVENT");
    assert_eq!(game::Entity.table_name(), "GAME");
    assert_eq!(location::Entity.table_name(), "LOCATION");
}

#[test]
fn test_registrant_columns() {
    assert_eq!(
        shape::<registrant::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("GUARDIAN_ID", ColumnType::Text, NOT_NULL),
            ("FIRST_NAME", ColumnType::Text, NOT_NULL),
            ("LAST_NAME", ColumnType::Text, NOT_NULL),
            ("BIRTH_DATE", ColumnType::DateTime, NOT_NULL),
            ("SEX", ColumnType::Text, NOT_NULL),
            ("NICK_NAME", ColumnType::Text, NULL),
        ])
    );
}

#[test]
fn test_enrollee_columns() {
    assert_eq!(
        shape::<enrollee::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("REGISTRANT_ID", ColumnType::Integer, NOT_NULL),
            ("PROGRAM_ID", ColumnType::Integer, NOT_NULL),
            ("ENROLLMENT_DATE", ColumnType::DateTime, NOT_NULL),
            ("PREFERENCE", ColumnType::Text, NULL),
        ])
    );
}

#[test]
fn test_player_columns() {
    assert_eq!(
        shape::<player::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("REGISTRANT_ID", ColumnType::Integer, NOT_NULL),
            ("DIVISION_ID", ColumnType::Integer, NOT_NULL),
            ("TEAM_ID", ColumnType::Integer, NOT_NULL),
            ("JERSEY_NUMBER", ColumnType::Text, NULL),
        ])
    );
}

#[test]
fn test_coach_columns_and_composite_key() {
    assert_eq!(
        shape::<coach::Column>(),
        expected(&[
            ("REGISTRANT_ID", ColumnType::Integer, NOT_NULL),
            ("TEAM_ID", ColumnType::Integer, NOT_NULL),
            ("POSITION", ColumnType::Text, NULL),
        ])
    );

    let key: Vec<String> = coach::PrimaryKey::iter()
        .map(|pk| pk.into_column().as_str().to_string())
        .collect();
    assert_eq!(key, vec!["REGISTRANT_ID", "TEAM_ID"]);
}

#[test]
fn test_team_columns() {
    assert_eq!(
        shape::<team::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("NAME", ColumnType::Text, NOT_NULL),
            ("MANAGER_ID", ColumnType::Integer, NOT_NULL),
            ("DIVISION_ID", ColumnType::Integer, NOT_NULL),
        ])
    );
}

#[test]
fn test_program_columns() {
    assert_eq!(
        shape::<program::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("NAME", ColumnType::Text, NOT_NULL),
            ("DESCRIPTION", ColumnType::Text, NULL),
        ])
    );
}

#[test]
fn test_division_columns() {
    assert_eq!(
        shape::<division::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("NAME", ColumnType::Text, NOT_NULL),
            ("DESCRIPTION", ColumnType::Text, NULL),
            ("PROGRAM_ID", ColumnType::Integer, NOT_NULL),
            ("AGE_MIN", ColumnType::Text, NOT_NULL),
            ("AGE_MAX", ColumnType::Text, NOT_NULL),
        ])
    );
}

#[test]
fn test_event_columns() {
    assert_eq!(
        shape::<event::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("NAME", ColumnType::Text, NOT_NULL),
            ("TYPE", ColumnType::Text, NULL),
            ("DESCRIPTION", ColumnType::Text, NULL),
            ("START_DATE", ColumnType::DateTime, NOT_NULL),
            ("END_DATE", ColumnType::DateTime, NOT_NULL),
            ("LOCATION_ID", ColumnType::Integer, NOT_NULL),
            ("PROGRAM_ID", ColumnType::Integer, NULL),
        ])
    );
}

#[test]
fn test_game_columns() {
    assert_eq!(
        shape::<game::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("EVENT_ID", ColumnType::Integer, NOT_NULL),
            ("HOME_TEAM_ID", ColumnType::Integer, NOT_NULL),
            ("AWAY_TEAM_ID", ColumnType::Integer, NOT_NULL),
            ("HOME_TEAM_SCORE", ColumnType::Decimal(None), NULL),
            ("AWAY_TEAM_SCORE", ColumnType::Decimal(None), NULL),
        ])
    );
}

#[test]
fn test_location_columns() {
    assert_eq!(
        shape::<location::Column>(),
        expected(&[
            ("ID", ColumnType::Integer, NOT_NULL),
            ("NAME", ColumnType::Text, NOT_NULL),
            ("PLAYABLE", ColumnType::Boolean, NOT_NULL),
            ("LATITUDE", ColumnType::Decimal(None), NOT_NULL),
            ("LONGITUDE", ColumnType::Decimal(None), NOT_NULL),
        ])
    );
}

#[test]
fn test_location_playable_has_default() {
    assert!(
        location::Column::Playable
            .def()
            .get_column_default()
            .is_some()
    );
    assert!(location::Column::Name.def().get_column_default().is_none());
}
