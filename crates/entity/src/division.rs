//! Division Entity
//!
//! An age or skill bracket within a program. Age limits are stored as text;
//! [`Model::age_bounds`] gives the numeric view.
//!
//! CUSTOMIZATION REGION START: division_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use std::ops::RangeInclusive;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "DIVISION")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:          i32,
    #[sea_orm(column_name = "NAME", column_type = "Text")]
    pub name:        String,
    #[sea_orm(column_name = "DESCRIPTION", column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "PROGRAM_ID")]
    pub program_id:  i32,
    #[sea_orm(column_name = "AGE_MIN", column_type = "Text")]
    pub age_min:     String,
    #[sea_orm(column_name = "AGE_MAX", column_type = "Text")]
    pub age_max:     String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::program::Entity",
        from = "Column::ProgramId",
        to = "super::program::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Program,
    #[sea_orm(has_many = "super::team::Entity")]
    Teams,
    #[sea_orm(has_many = "super::player::Entity")]
    Players,
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef { Relation::Program.def() }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef { Relation::Teams.def() }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef { Relation::Players.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: division_entity_methods
impl Model {
    /// Inclusive age range of the division.
    ///
    /// Returns `None` when either limit is not a whole number of years or when
    /// the minimum exceeds the maximum.
    pub fn age_bounds(&self) -> Option<RangeInclusive<u8>> {
        let min = self.age_min.trim().parse::<u8>().ok()?;
        let max = self.age_max.trim().parse::<u8>().ok()?;
        (min <= max).then(|| min ..= max)
    }

    /// Whether a player of `age` years fits this division.
    pub fn admits_age(&self, age: u8) -> bool { self.age_bounds().is_some_and(|r| r.contains(&age)) }
}
// CUSTOMIZATION REGION END
