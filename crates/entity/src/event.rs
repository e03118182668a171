//! Event Entity
//!
//! A scheduled occurrence, such as a tournament, held at a location. The
//! program reference is optional because events predating it carry none.
//!
//! CUSTOMIZATION REGION START: event_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "EVENT")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:          i32,
    #[sea_orm(column_name = "NAME", column_type = "Text")]
    pub name:        String,
    #[sea_orm(column_name = "TYPE", column_type = "Text", nullable)]
    pub event_type:  Option<String>,
    #[sea_orm(column_name = "DESCRIPTION", column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "START_DATE")]
    pub start_date:  DateTime,
    #[sea_orm(column_name = "END_DATE")]
    pub end_date:    DateTime,
    #[sea_orm(column_name = "LOCATION_ID")]
    pub location_id: i32,
    #[sea_orm(column_name = "PROGRAM_ID", nullable)]
    pub program_id:  Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::program::Entity",
        from = "Column::ProgramId",
        to = "super::program::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Program,
    #[sea_orm(has_many = "super::game::Entity")]
    Games,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef { Relation::Location.def() }
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef { Relation::Program.def() }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef { Relation::Games.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: event_entity_methods
impl Model {
    /// Length of the event; negative when the end precedes the start.
    pub fn duration(&self) -> chrono::Duration { self.end_date - self.start_date }
}
// CUSTOMIZATION REGION END
