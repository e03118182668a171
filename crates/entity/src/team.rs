//! Team Entity
//!
//! A team within a division, managed by a registrant. Teams appear in games on
//! either the home or the away side; the two sides are separate links because
//! both point at the same `GAME` table.
//!
//! CUSTOMIZATION REGION START: team_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "TEAM")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:          i32,
    #[sea_orm(column_name = "NAME", column_type = "Text")]
    pub name:        String,
    #[sea_orm(column_name = "MANAGER_ID")]
    pub manager_id:  i32,
    #[sea_orm(column_name = "DIVISION_ID")]
    pub division_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Players,
    #[sea_orm(has_many = "super::coach::Entity")]
    Coaches,
    #[sea_orm(
        belongs_to = "super::division::Entity",
        from = "Column::DivisionId",
        to = "super::division::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Division,
    #[sea_orm(
        belongs_to = "super::registrant::Entity",
        from = "Column::ManagerId",
        to = "super::registrant::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Manager,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef { Relation::Players.def() }
}

impl Related<super::coach::Entity> for Entity {
    fn to() -> RelationDef { Relation::Coaches.def() }
}

impl Related<super::division::Entity> for Entity {
    fn to() -> RelationDef { Relation::Division.def() }
}

impl Related<super::registrant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Manager.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Games in which the team plays on the home side (`GAME.HOME_TEAM_ID`).
#[derive(Debug)]
pub struct TeamToHomeGames;

impl Linked for TeamToHomeGames {
    type FromEntity = Entity;
    type ToEntity = super::game::Entity;

    fn link(&self) -> Vec<RelationDef> { vec![super::game::Relation::HomeTeam.def().rev()] }
}

/// Games in which the team plays on the away side (`GAME.AWAY_TEAM_ID`).
#[derive(Debug)]
pub struct TeamToAwayGames;

impl Linked for TeamToAwayGames {
    type FromEntity = Entity;
    type ToEntity = super::game::Entity;

    fn link(&self) -> Vec<RelationDef> { vec![super::game::Relation::AwayTeam.def().rev()] }
}

// CUSTOMIZATION REGION START: team_entity_methods
impl Model {
    /// Loads the games this team hosts.
    pub async fn home_games<C>(&self, db: &C) -> Result<Vec<super::game::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.find_linked(TeamToHomeGames).all(db).await
    }

    /// Loads the games this team plays as the visitor.
    pub async fn away_games<C>(&self, db: &C) -> Result<Vec<super::game::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.find_linked(TeamToAwayGames).all(db).await
    }
}
// CUSTOMIZATION REGION END
