//! Coach Entity
//!
//! Assignment of a registrant to a team as staff. The table has no synthetic
//! identity; the (registrant, team) pair is the primary key, so a registrant can
//! hold at most one coaching position per team.
//!
//! CUSTOMIZATION REGION START: coach_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "COACH")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "REGISTRANT_ID")]
    pub registrant_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "TEAM_ID")]
    pub team_id:       i32,
    #[sea_orm(column_name = "POSITION", column_type = "Text", nullable)]
    pub position:      Option<String>,
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
}

impl Related<super::registrant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Registrant.def() }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef { Relation::Team.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: coach_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
