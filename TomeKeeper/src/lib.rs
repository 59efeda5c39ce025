//! # TomeKeeper
//!
//! Reconciles a hand-authored catalog of Warhammer Online abilities against
//! the authoritative data extracted from the game client.
//!
//! ## Pipeline
//!
//! - **Dump decoding** - UTF-8 record tables and UTF-16 string tables
//! - **Canonical dataset** - one record per game ability, keyed by id
//! - **Identity resolution** - fuzzy-matched links from curated entries to game ids
//! - **Field validation** - ordered correctors for numbers, notes and descriptions
//!
//! ## Quick Start
//!
//! ```no_run
//! use tomekeeper::prelude::*;
//!
//! let dataset = load_dataset(&DumpDirectory::new("dumps/"))?;
//! let mut store = CareerDirectory::new("src/data/abilities/");
//!
//! let careers = CareerRegistry::builtin().select(&["ironbreaker", "slayer"])?;
//! let summary = Reconciler::new(&dataset).run(&careers, &mut store, &mut DeclineAll)?;
//! println!("{} careers reconciled", summary.reports.len());
//! # Ok::<(), tomekeeper::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `tomekeeper` command-line binary

pub mod canonical;
pub mod career;
pub mod error;
pub mod formats;
pub mod reconcile;
pub mod storage;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::canonical::{
        AbilityFlags, AbilityType, CanonicalAbility, CanonicalDataset, Component, ComponentOp,
        Stat, load_dataset,
    };
    pub use crate::career::{BaseStats, Career, CareerRegistry, CuratedAbility};
    pub use crate::formats::{DecodeReport, TextEncoding, read_text_file};

    pub use crate::reconcile::{
        CareerReport, DecisionPort, DeclineAll, IdentityPrompt, LongestRunScorer, Reconciler,
        RunSummary, ScriptedDecisions, SimilarityScorer,
    };
    pub use crate::storage::{
        CareerDirectory, CareerStore, DumpDirectory, DumpKind, DumpSource, MemoryStore,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
