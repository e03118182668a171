//! Game Entity
//!
//! A single match between two teams within an event. Scores stay empty until
//! the game is played.
//!
//! CUSTOMIZATION REGION START: game_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "GAME")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:              i32,
    #[sea_orm(column_name = "EVENT_ID")]
    pub event_id:        i32,
    #[sea_orm(column_name = "HOME_TEAM_ID")]
    pub home_team_id:    i32,
    #[sea_orm(column_name = "AWAY_TEAM_ID")]
    pub away_team_id:    i32,
    #[sea_orm(column_name = "HOME_TEAM_SCORE", nullable)]
    pub home_team_score: Option<Decimal>,
    #[sea_orm(column_name = "AWAY_TEAM_SCORE", nullable)]
    pub away_team_score: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwayTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    AwayTeam,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef { Relation::Event.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut home = self.home_team_id.try_as_ref().copied();
        let mut away = self.away_team_id.try_as_ref().copied();

        // A partial update carries only the side being changed.
        if !insert && (home.is_none() || away.is_none()) {
            if let Some(id) = self.id.try_as_ref() {
                if let Some(stored) = Entity::find_by_id(*id).one(db).await? {
                    home = home.or(Some(stored.home_team_id));
                    away = away.or(Some(stored.away_team_id));
                }
            }
        }

        match (home, away) {
            (Some(home), Some(away)) if home == away => {
                Err(DbErr::Custom(format!(
                    "game cannot have team {} on both the home and away side",
                    home
                )))
            },
            _ => Ok(self),
        }
    }
}

/// The team on the home side of a game.
#[derive(Debug)]
pub struct GameToHomeTeam;

impl Linked for GameToHomeTeam {
    type FromEntity = Entity;
    type ToEntity = super::team::Entity;

    fn link(&self) -> Vec<RelationDef> { vec![Relation::HomeTeam.def()] }
}

/// The team on the away side of a game.
#[derive(Debug)]
pub struct GameToAwayTeam;

impl Linked for GameToAwayTeam {
    type FromEntity = Entity;
    type ToEntity = super::team::Entity;

    fn link(&self) -> Vec<RelationDef> { vec![Relation::AwayTeam.def()] }
}

/// Result of a scored game from the home team's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

// CUSTOMIZATION REGION START: game_entity_methods
impl Model {
    /// Outcome of the game, or `None` while either score is missing.
    pub fn outcome(&self) -> Option<Outcome> {
        let (home, away) = (self.home_team_score?, self.away_team_score?);
        Some(match home.cmp(&away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }
}
// CUSTOMIZATION REGION END
