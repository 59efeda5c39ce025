//! Reconciliation of curated careers against the canonical dataset
//!
//! Per curated ability:
//!
//! 1. [`resolve_identity`] links it to a canonical record (automatically, or
//!    through a [`DecisionPort`])
//! 2. [`run_chain`] corrects every field that drifted from the record
//!
//! [`Reconciler`] drives both over whole careers and persists the result.

pub mod identity;
pub mod matcher;
pub mod orchestrator;
pub mod validators;

pub use identity::{
    Candidate, DecisionPort, DeclineAll, IdentityPrompt, Resolution, ScriptedDecisions,
    resolve_identity,
};
pub use matcher::{LongestRunScorer, SimilarityScorer};
pub use orchestrator::{CareerReport, Correction, Reconciler, RunSummary};
pub use validators::{AbilityPatch, ChainOutcome, VALIDATORS, ValidationContext, run_chain};
