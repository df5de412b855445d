//! Ability effects.
//!
//! - `AbilityEffect`: closed set of effect variants
//! - `TargetKind` / `TargetSelector`: what an ability can be aimed at
//! - `possible_targets`: the query half of ability use
//!
//! Commits go through `engine::use_ability`, which validates coordinates
//! before handing off to the resolver.

mod effect;
mod resolver;
mod targeting;

pub use effect::AbilityEffect;
pub use resolver::possible_targets;
pub use targeting::{TargetKind, TargetSelector};

pub(crate) use resolver::resolve;
