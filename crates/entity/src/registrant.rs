//! Registrant Entity
//!
//! A person known to the league. Registrants are the root of every person-level
//! record: enrollments, player and coaching assignments, and team management.
//!
//! CUSTOMIZATION REGION START: registrant_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "REGISTRANT")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:          i32,
    #[sea_orm(column_name = "GUARDIAN_ID", column_type = "Text")]
    pub guardian_id: String,
    #[sea_orm(column_name = "FIRST_NAME", column_type = "Text")]
    pub first_name:  String,
    #[sea_orm(column_name = "LAST_NAME", column_type = "Text")]
    pub last_name:   String,
    #[sea_orm(column_name = "BIRTH_DATE")]
    pub birth_date:  DateTime,
    #[sea_orm(column_name = "SEX", column_type = "Text")]
    pub sex:         String,
    #[sea_orm(column_name = "NICK_NAME", column_type = "Text", nullable)]
    pub nick_name:   Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollee::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::player::Entity")]
    PlayerAssignments,
    #[sea_orm(has_many = "super::coach::Entity")]
    CoachingAssignments,
    #[sea_orm(has_many = "super::team::Entity")]
    ManagedTeams,
}

impl Related<super::enrollee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Enrollments.def() }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef { Relation::PlayerAssignments.def() }
}

impl Related<super::coach::Entity> for Entity {
    fn to() -> RelationDef { Relation::CoachingAssignments.def() }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef { Relation::ManagedTeams.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: registrant_entity_methods
impl Model {
    /// Name used on rosters: the nickname when present, otherwise the first name,
    /// followed by the last name.
    pub fn display_name(&self) -> String {
        let first = self.nick_name.as_deref().unwrap_or(&self.first_name);
        format!("{} {}", first, self.last_name)
    }
}
// CUSTOMIZATION REGION END
