//! Unit system: archetypes, deployed instances, and the catalog.
//!
//! ## Key Types
//!
//! - `TemplateId`: catalog key of an archetype (not unique per unit)
//! - `Archetype`: static template with base `Stats` and an `Ability`
//! - `UnitId`: per-deployment identity
//! - `Unit`: runtime combat state (HP, action points, flags, cooldown)
//! - `UnitCatalog`: archetype lookup, with the reference rule set in
//!   `UnitCatalog::standard`

pub mod ability;
pub mod archetype;
pub mod catalog;
pub mod unit;

pub use ability::Ability;
pub use archetype::{Archetype, Stats, TemplateId};
pub use catalog::UnitCatalog;
pub use unit::{Unit, UnitId};
