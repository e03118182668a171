//! Player Entity
//!
//! Assignment of a registrant to a division and team as a player.
//!
//! CUSTOMIZATION REGION START: player_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "PLAYER")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:            i32,
    #[sea_orm(column_name = "REGISTRANT_ID")]
    pub registrant_id: i32,
    #[sea_orm(column_name = "DIVISION_ID")]
    pub division_id:   i32,
    #[sea_orm(column_name = "TEAM_ID")]
    pub team_id:       i32,
    /// Kept as text so values such as "00" survive.
    #[sea_orm(column_name = "JERSEY_NUMBER", column_type = "Text", nullable)]
    pub jersey_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::registrant::Entity",
        from = "Column::RegistrantId",
        to = "super::registrant::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Registrant,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::division::Entity",
        from = "Column::DivisionId",
        to = "super::division::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Division,
}

impl Related<super::registrant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Registrant.def() }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef { Relation::Team.def() }
}

impl Related<super::division::Entity> for Entity {
    fn to() -> RelationDef { Relation::Division.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: player_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
