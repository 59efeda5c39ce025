//! Per-career reconciliation
//!
//! For each career: load the curated file, resolve and correct its abilities
//! in list order, then replace the file. Careers run one after another so
//! operator prompts appear in a predictable order.

use crate::canonical::CanonicalDataset;
use crate::career::{Career, CareerRef, CuratedAbility};
use crate::error::{Error, Result};
use crate::storage::CareerStore;

use super::identity::{DecisionPort, Resolution, resolve_identity};
use super::matcher::{LongestRunScorer, SimilarityScorer};
use super::validators::{ValidationContext, run_chain};

/// Fields corrected on one ability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub ability: String,
    pub fields: Vec<&'static str>,
}

/// What happened to one career
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerReport {
    pub slug: String,
    pub auto_linked: Vec<String>,
    pub operator_linked: Vec<String>,
    pub unresolved: Vec<String>,
    pub corrected: Vec<Correction>,
    /// `TomeTactic` entries passed through untouched
    pub excluded: usize,
}

/// Outcome of a multi-career run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<CareerReport>,
    /// Careers that failed without aborting the run
    pub failures: Vec<(String, Error)>,
}

impl RunSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reconciles careers against one canonical dataset
pub struct Reconciler<'a> {
    dataset: &'a CanonicalDataset,
    scorer: Box<dyn SimilarityScorer + 'a>,
}

impl<'a> Reconciler<'a> {
    /// Reconciler using the default description scorer
    #[must_use]
    pub fn new(dataset: &'a CanonicalDataset) -> Self {
        Self::with_scorer(dataset, LongestRunScorer)
    }

    #[must_use]
    pub fn with_scorer<S: SimilarityScorer + 'a>(dataset: &'a CanonicalDataset, scorer: S) -> Self {
        Self {
            dataset,
            scorer: Box::new(scorer),
        }
    }

    /// Reconcile every career in `careers`, in order
    ///
    /// A career that is missing or cannot be written is recorded in
    /// [`RunSummary::failures`] and the run moves on to the next career.
    ///
    /// # Errors
    /// Returns the first data integrity or decision error, which aborts the run.
    pub fn run(
        &self,
        careers: &[CareerRef<'_>],
        store: &mut dyn CareerStore,
        port: &mut dyn DecisionPort,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for career in careers {
            match self.reconcile_career(*career, store, port) {
                Ok(report) => summary.reports.push(report),
                Err(err @ (Error::Write { .. } | Error::CareerNotFound(_))) => {
                    tracing::error!("Skipping career {}: {err}", career.slug);
                    summary.failures.push((career.slug.to_string(), err));
                }
                Err(err) => return Err(err),
            }
        }

        Ok(summary)
    }

    /// Load, reconcile and save one career
    ///
    /// # Errors
    /// Returns an error if the career cannot be loaded or saved, a link is
    /// stale, or the decision port fails.
    pub fn reconcile_career(
        &self,
        career: CareerRef<'_>,
        store: &mut dyn CareerStore,
        port: &mut dyn DecisionPort,
    ) -> Result<CareerReport> {
        tracing::info!("Validating {}", career.slug);

        let curated = store.load_career(career.slug)?;
        let (fixed, mut report) = self.reconcile_abilities(career, &curated, port)?;
        report.slug = career.slug.to_string();

        store.save_career(career.slug, &fixed)?;

        tracing::info!(
            "{}: {} auto-linked, {} operator-linked, {} unresolved, {} corrected, {} excluded",
            career.slug,
            report.auto_linked.len(),
            report.operator_linked.len(),
            report.unresolved.len(),
            report.corrected.len(),
            report.excluded
        );
        Ok(report)
    }

    /// Reconcile a career's abilities without touching storage
    ///
    /// # Errors
    /// Returns an error if a link is stale or the decision port fails.
    pub fn reconcile_abilities(
        &self,
        career: CareerRef<'_>,
        curated: &Career,
        port: &mut dyn DecisionPort,
    ) -> Result<(Career, CareerReport)> {
        let mut report = CareerReport::default();
        let mut data = Vec::with_capacity(curated.data.len());

        for ability in &curated.data {
            if ability.is_tome_tactic() {
                report.excluded += 1;
                data.push(ability.clone());
                continue;
            }
            data.push(self.reconcile_ability(career, curated, ability, port, &mut report)?);
        }

        let fixed = Career {
            data,
            ..curated.clone()
        };
        Ok((fixed, report))
    }

    fn reconcile_ability(
        &self,
        career: CareerRef<'_>,
        curated: &Career,
        ability: &CuratedAbility,
        port: &mut dyn DecisionPort,
        report: &mut CareerReport,
    ) -> Result<CuratedAbility> {
        let career_id = career.entry.career_id;
        let resolution =
            resolve_identity(ability, career_id, self.dataset, self.scorer.as_ref(), port)?;

        let game_id = match resolution {
            Resolution::AlreadyLinked(id) => id,
            Resolution::AutoLinked(id) => {
                report.auto_linked.push(ability.name.clone());
                id
            }
            Resolution::OperatorLinked(id) => {
                report.operator_linked.push(ability.name.clone());
                id
            }
            Resolution::Unresolved => {
                report.unresolved.push(ability.name.clone());
                return Ok(ability.clone());
            }
        };

        let canonical = self.dataset.require(&ability.name, game_id, career_id)?;
        let linked = CuratedAbility {
            game_id: Some(game_id),
            ..ability.clone()
        };

        let ctx = ValidationContext {
            canonical,
            career: curated,
            stats: &career.entry.stats,
            dataset: self.dataset,
        };
        let outcome = run_chain(&ctx, &linked);

        if !outcome.patch.is_empty() {
            report.corrected.push(Correction {
                ability: ability.name.clone(),
                fields: outcome.patch.changed_fields(),
            });
        }

        Ok(outcome.ability)
    }
}
