//! Enrollee Entity
//!
//! A registrant's enrollment in a program.
//!
//! CUSTOMIZATION REGION START: enrollee_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "ENROLLEE")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:              i32,
    #[sea_orm(column_name = "REGISTRANT_ID")]
    pub registrant_id:   i32,
    #[sea_orm(column_name = "PROGRAM_ID")]
    pub program_id:      i32,
    #[sea_orm(column_name = "ENROLLMENT_DATE")]
    pub enrollment_date: DateTime,
    #[sea_orm(column_name = "PREFERENCE", column_type = "Text", nullable)]
    pub preference:      Option<String>,
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
        belongs_to = "super::program::Entity",
        from = "Column::ProgramId",
        to = "super::program::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Program,
}

impl Related<super::registrant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Registrant.def() }
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef { Relation::Program.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: enrollee_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
