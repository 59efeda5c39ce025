//! Curated career files and the career registry

pub mod registry;
pub mod types;

pub use registry::{CareerEntry, CareerRef, CareerRegistry};
pub use types::{
    BaseStats, Career, CuratedAbility, MasteryRequirement, TOME_TACTIC_CATEGORY,
};
