//! Program Entity
//!
//! A top-level offering such as a season or league. Programs group divisions,
//! events and enrollments.
//!
//! CUSTOMIZATION REGION START: program_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "PROGRAM")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:          i32,
    #[sea_orm(column_name = "NAME", column_type = "Text")]
    pub name:        String,
    #[sea_orm(column_name = "DESCRIPTION", column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::division::Entity")]
    Divisions,
    #[sea_orm(has_many = "super::event::Entity")]
    Events,
    #[sea_orm(has_many = "super::enrollee::Entity")]
    Enrollees,
}

impl Related<super::division::Entity> for Entity {
    fn to() -> RelationDef { Relation::Divisions.def() }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef { Relation::Events.def() }
}

impl Related<super::enrollee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Enrollees.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: program_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
