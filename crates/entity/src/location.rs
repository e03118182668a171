//! Location Entity
//!
//! A venue where events take place. New locations are playable unless stated
//! otherwise.
//!
//! CUSTOMIZATION REGION START: location_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "LOCATION")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id:        i32,
    #[sea_orm(column_name = "NAME", column_type = "Text")]
    pub name:      String,
    #[sea_orm(column_name = "PLAYABLE", default_value = true)]
    pub playable:  bool,
    #[sea_orm(column_name = "LATITUDE")]
    pub latitude:  Decimal,
    #[sea_orm(column_name = "LONGITUDE")]
    pub longitude: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event::Entity")]
    Events,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef { Relation::Events.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: location_entity_methods
impl Model {
    /// (latitude, longitude) of the venue.
    pub fn coordinates(&self) -> (Decimal, Decimal) { (self.latitude, self.longitude) }
}
// CUSTOMIZATION REGION END
