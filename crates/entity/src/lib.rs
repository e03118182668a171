//! Entity definitions for the league data model
//!
//! This crate contains Sea-ORM entity definitions for every table of the league
//! schema. Table and column names are upper-snake-case and must stay in step with
//! the migrations in the `migration` crate.
//!
//! Relations are declarative only. The physical schema carries no foreign-key
//! constraints, so a dangling reference loads as `None` rather than failing.

pub mod coach;
pub use coach::Entity as Coach;
pub mod division;
pub use division::Entity as Division;
pub mod enrollee;
pub use enrollee::Entity as Enrollee;
pub mod event;
pub use event::Entity as Event;
pub mod game;
pub use game::Entity as Game;
pub mod location;
pub use location::Entity as Location;
pub mod player;
pub use player::Entity as Player;
pub mod program;
pub use program::Entity as Program;
pub mod registrant;
pub use registrant::Entity as Registrant;
pub mod team;
pub use team::Entity as Team;

pub mod prelude {
    //! Re-exports of every entity under its table-level name.

    pub use super::{Coach, Division, Enrollee, Event, Game, Location, Player, Program, Registrant, Team};
}
