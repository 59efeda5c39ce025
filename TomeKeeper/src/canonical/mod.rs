//! Canonical ability dataset
//!
//! The authoritative view of every ability as the game defines it, assembled
//! from the extracted dumps:
//!
//! ```text
//! DumpSource -> decoders -> assemble() -> CanonicalDataset
//! ```

pub mod assembler;
pub mod dataset;
pub mod loader;
pub mod template;
pub mod types;

pub use assembler::{DumpTables, assemble};
pub use dataset::CanonicalDataset;
pub use loader::load_dataset;
pub use template::{TemplateValues, format_seconds, render_description};
pub use types::{
    AbilityFlags, AbilityType, COMPONENT_VALUE_COUNT, CanonicalAbility, Component, ComponentOp,
    DatasetStats, Stat,
};
