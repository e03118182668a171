//! # Data Model Behaviour Tests
//!
//! Relationship loading, column defaults, value round-trips and the row-level
//! invariants, exercised against the migrated SQLite schema.

mod common;

use chrono::NaiveDate;
use entity::{
    coach, division, enrollee, event,
    game::{self, GameToAwayTeam, GameToHomeTeam, Outcome},
    location, player, program, registrant, team,
};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DbErr, EntityTrait, ModelTrait};

async fn insert_game(
    db: &sea_orm::DatabaseConnection,
    event_id: i32,
    home_team_id: i32,
    away_team_id: i32,
) -> Result<game::Model, DbErr> {
    game::ActiveModel {
        event_id: Set(event_id),
        home_team_id: Set(home_team_id),
        away_team_id: Set(away_team_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[tokio::test]
async fn test_location_playable_defaults_to_true() {
    let db = common::setup_db().await;

    let location = common::insert_location(&db).await;
    assert!(location.playable);
    assert_eq!(location.coordinates(), (dec!(40.5), dec!(-74.25)));

    let reloaded = location::Entity::find_by_id(location.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.playable);
}

#[tokio::test]
async fn test_location_playable_explicit_false() {
    let db = common::setup_db().await;

    let location = location::ActiveModel {
        name: Set("Closed Field".to_string()),
        playable: Set(false),
        latitude: Set(dec!(0)),
        longitude: Set(dec!(0)),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let reloaded = location::Entity::find_by_id(location.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(!reloaded.playable);
}

#[tokio::test]
async fn test_registrant_round_trip() {
    let db = common::setup_db().await;

    let birth_date = NaiveDate::from_ymd_opt(2014, 11, 30)
        .unwrap()
        .and_hms_micro_opt(8, 30, 15, 123_456)
        .unwrap();
    let inserted = registrant::ActiveModel {
        guardian_id: Set("guardian-42".to_string()),
        first_name: Set("Théo".to_string()),
        last_name: Set("O'Brien".to_string()),
        birth_date: Set(birth_date),
        sex: Set("M".to_string()),
        nick_name: Set(Some("T".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let reloaded = registrant::Entity::find_by_id(inserted.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded, inserted);
    assert_eq!(reloaded.birth_date, birth_date);
    assert_eq!(reloaded.first_name, "Théo");
}

#[tokio::test]
async fn test_numeric_round_trip() {
    let db = common::setup_db().await;

    let location = common::insert_location(&db).await;
    let reloaded = location::Entity::find_by_id(location.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.latitude, dec!(40.5));
    assert_eq!(reloaded.longitude, dec!(-74.25));

    let event = common::insert_event(&db, location.id, None).await;
    let mut scored: game::ActiveModel = insert_game(&db, event.id, 1, 2).await.unwrap().into();
    scored.home_team_score = Set(Some(dec!(3)));
    scored.away_team_score = Set(Some(dec!(1)));
    let scored = scored.update(&db).await.unwrap();

    let reloaded = game::Entity::find_by_id(scored.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.home_team_score, Some(dec!(3)));
    assert_eq!(reloaded.away_team_score, Some(dec!(1)));
    assert_eq!(reloaded.outcome(), Some(Outcome::HomeWin));
}

#[tokio::test]
async fn test_unscored_game_has_no_outcome() {
    let db = common::setup_db().await;

    let game = insert_game(&db, 1, 1, 2).await.unwrap();
    assert_eq!(game.home_team_score, None);
    assert_eq!(game.away_team_score, None);
    assert_eq!(game.outcome(), None);
}

#[tokio::test]
async fn test_belongs_to_resolves_existing_row() {
    let db = common::setup_db().await;

    let registrant = common::insert_registrant(&db, "Ana").await;
    let program = common::insert_program(&db).await;
    let enrollment = enrollee::ActiveModel {
        registrant_id: Set(registrant.id),
        program_id: Set(program.id),
        enrollment_date: Set(common::datetime(2024, 2, 1, 12, 0)),
        preference: Set(Some("morning games".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let owner = enrollment
        .find_related(registrant::Entity)
        .one(&db)
        .await
        .unwrap();
    assert_eq!(owner, Some(registrant.clone()));

    let enrolled_in = enrollment
        .find_related(program::Entity)
        .one(&db)
        .await
        .unwrap();
    assert_eq!(enrolled_in, Some(program));

    let enrollments = registrant
        .find_related(enrollee::Entity)
        .all(&db)
        .await
        .unwrap();
    assert_eq!(enrollments, vec![enrollment]);
}

#[tokio::test]
async fn test_belongs_to_missing_row_resolves_to_none() {
    let db = common::setup_db().await;

    let orphan = enrollee::ActiveModel {
        registrant_id: Set(999),
        program_id: Set(999),
        enrollment_date: Set(common::datetime(2024, 2, 1, 12, 0)),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let owner = orphan
        .find_related(registrant::Entity)
        .one(&db)
        .await
        .unwrap();
    assert_eq!(owner, None);

    let (found, owner) = enrollee::Entity::find_by_id(orphan.id)
        .find_also_related(registrant::Entity)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, orphan);
    assert_eq!(owner, None);
}

#[tokio::test]
async fn test_team_with_nonexistent_manager_is_accepted() {
    let db = common::setup_db().await;

    // No foreign-key constraint guards MANAGER_ID.
    let team = common::insert_team(&db, "Ghost FC", 4242, 7).await;

    let manager = team
        .find_related(registrant::Entity)
        .one(&db)
        .await
        .unwrap();
    assert_eq!(manager, None);

    let division = team
        .find_related(division::Entity)
        .one(&db)
        .await
        .unwrap();
    assert_eq!(division, None);
}

#[tokio::test]
async fn test_team_roster_relations() {
    let db = common::setup_db().await;

    let program = common::insert_program(&db).await;
    let division = common::insert_division(&db, program.id).await;
    let manager = common::insert_registrant(&db, "Maria").await;
    let kid = common::insert_registrant(&db, "Leo").await;
    let team = common::insert_team(&db, "Comets", manager.id, division.id).await;

    let player = player::ActiveModel {
        registrant_id: Set(kid.id),
        division_id: Set(division.id),
        team_id: Set(team.id),
        jersey_number: Set(Some("07".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let coach = coach::ActiveModel {
        registrant_id: Set(manager.id),
        team_id: Set(team.id),
        position: Set(Some("head".to_string())),
    }
    .insert(&db)
    .await
    .unwrap();

    assert_eq!(team.find_related(player::Entity).all(&db).await.unwrap(), vec![player.clone()]);
    assert_eq!(team.find_related(coach::Entity).all(&db).await.unwrap(), vec![coach.clone()]);
    assert_eq!(
        team.find_related(registrant::Entity).one(&db).await.unwrap(),
        Some(manager.clone())
    );
    assert_eq!(
        player.find_related(division::Entity).one(&db).await.unwrap(),
        Some(division.clone())
    );
    assert_eq!(player.jersey_number.as_deref(), Some("07"));
    assert_eq!(
        manager
            .find_related(coach::Entity)
            .all(&db)
            .await
            .unwrap(),
        vec![coach]
    );
    assert_eq!(
        manager
            .find_related(team::Entity)
            .all(&db)
            .await
            .unwrap(),
        vec![team.clone()]
    );

    let divisions = division::Entity::find()
        .find_with_related(team::Entity)
        .all(&db)
        .await
        .unwrap();
    assert_eq!(divisions, vec![(division.clone(), vec![team])]);

    assert_eq!(
        division.find_related(program::Entity).one(&db).await.unwrap(),
        Some(program)
    );
}

#[tokio::test]
async fn test_duplicate_coach_assignment_is_rejected() {
    let db = common::setup_db().await;

    let assignment = || {
        coach::ActiveModel {
            registrant_id: Set(1),
            team_id: Set(1),
            position: Set(None),
        }
    };

    assignment().insert(&db).await.unwrap();
    assert!(assignment().insert(&db).await.is_err());

    // The same registrant may coach another team.
    coach::ActiveModel {
        registrant_id: Set(1),
        team_id: Set(2),
        position: Set(Some("assistant".to_string())),
    }
    .insert(&db)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_game_rejects_same_team_on_both_sides() {
    let db = common::setup_db().await;

    let err = insert_game(&db, 1, 5, 5).await.unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)));
    assert!(game::Entity::find().all(&db).await.unwrap().is_empty());

    let valid = insert_game(&db, 1, 5, 6).await.unwrap();
    let mut swapped: game::ActiveModel = valid.into();
    swapped.away_team_id = Set(5);
    assert!(matches!(swapped.update(&db).await, Err(DbErr::Custom(_))));
}

#[tokio::test]
async fn test_partial_game_update_checks_stored_side() {
    let db = common::setup_db().await;
    let game = insert_game(&db, 1, 5, 6).await.unwrap();

    // Only the home side is sent; the away side comes from the stored row.
    let clash = game::ActiveModel {
        id: Set(game.id),
        home_team_id: Set(6),
        ..Default::default()
    };
    assert!(matches!(clash.update(&db).await, Err(DbErr::Custom(_))));

    let stored = game::Entity::find_by_id(game.id).one(&db).await.unwrap().unwrap();
    assert_eq!((stored.home_team_id, stored.away_team_id), (5, 6));

    let moved = game::ActiveModel {
        id: Set(game.id),
        away_team_id: Set(7),
        ..Default::default()
    }
    .update(&db)
    .await
    .unwrap();
    assert_eq!((moved.home_team_id, moved.away_team_id), (5, 7));
}

#[tokio::test]
async fn test_home_and_away_games_are_distinguished() {
    let db = common::setup_db().await;

    let location = common::insert_location(&db).await;
    let event = common::insert_event(&db, location.id, None).await;
    let comets = common::insert_team(&db, "Comets", 1, 1).await;
    let rockets = common::insert_team(&db, "Rockets", 1, 1).await;

    let first = insert_game(&db, event.id, comets.id, rockets.id).await.unwrap();
    let second = insert_game(&db, event.id, rockets.id, comets.id).await.unwrap();
    let third = insert_game(&db, event.id, comets.id, rockets.id).await.unwrap();

    let comets_home = comets.home_games(&db).await.unwrap();
    let comets_away = comets.away_games(&db).await.unwrap();
    assert_eq!(comets_home.len(), 2);
    assert!(comets_home.contains(&first));
    assert!(comets_home.contains(&third));
    assert_eq!(comets_away, vec![second.clone()]);

    assert_eq!(rockets.home_games(&db).await.unwrap(), vec![second.clone()]);
    assert_eq!(rockets.away_games(&db).await.unwrap().len(), 2);

    let home = second.find_linked(GameToHomeTeam).one(&db).await.unwrap();
    let away = second.find_linked(GameToAwayTeam).one(&db).await.unwrap();
    assert_eq!(home, Some(rockets));
    assert_eq!(away, Some(comets));

    let games = event.find_related(game::Entity).all(&db).await.unwrap();
    assert_eq!(games.len(), 3);
    assert_eq!(
        first.find_related(event::Entity).one(&db).await.unwrap(),
        Some(event)
    );
}

#[tokio::test]
async fn test_program_and_location_events() {
    let db = common::setup_db().await;

    let program = common::insert_program(&db).await;
    let location = common::insert_location(&db).await;
    let linked = common::insert_event(&db, location.id, Some(program.id)).await;
    let unlinked = common::insert_event(&db, location.id, None).await;

    assert_eq!(
        program.find_related(event::Entity).all(&db).await.unwrap(),
        vec![linked.clone()]
    );
    assert_eq!(location.find_related(event::Entity).all(&db).await.unwrap().len(), 2);
    assert_eq!(
        unlinked.find_related(program::Entity).one(&db).await.unwrap(),
        None
    );
    assert_eq!(
        linked.find_related(location::Entity).one(&db).await.unwrap(),
        Some(location)
    );
    assert_eq!(linked.duration(), chrono::Duration::hours(8));
}
