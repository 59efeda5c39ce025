//! Linking curated abilities to canonical records
//!
//! A curated ability without a `gameId` is matched by name against canonical
//! records the career may use, then scored by description similarity. A
//! single scoring candidate is linked automatically; anything else goes to a
//! [`DecisionPort`].

use std::collections::VecDeque;

use crate::canonical::CanonicalDataset;
use crate::career::CuratedAbility;
use crate::error::{Error, Result};

use super::matcher::SimilarityScorer;

/// Outcome of resolving one curated ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `gameId` was already set
    AlreadyLinked(u32),
    /// Linked without operator input
    AutoLinked(u32),
    /// Linked by the decision port
    OperatorLinked(u32),
    /// Left without a `gameId`
    Unresolved,
}

impl Resolution {
    #[must_use]
    pub fn game_id(self) -> Option<u32> {
        match self {
            Self::AlreadyLinked(id) | Self::AutoLinked(id) | Self::OperatorLinked(id) => Some(id),
            Self::Unresolved => None,
        }
    }
}

/// A canonical record offered to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub ability_id: u32,
    pub career_id: u16,
    pub description: String,
    pub score: usize,
}

/// Question put to the decision port
///
/// Options are "None" at index 0 followed by `candidates` (ranked by score,
/// highest first, ties by ascending id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityPrompt {
    pub ability: String,
    pub description: String,
    pub candidates: Vec<Candidate>,
    /// Preselected option index (0 = None)
    pub default: usize,
}

impl IdentityPrompt {
    /// The id behind option `index`; `None` for option 0 or out of range
    #[must_use]
    pub fn option_id(&self, index: usize) -> Option<u32> {
        index
            .checked_sub(1)
            .and_then(|idx| self.candidates.get(idx))
            .map(|c| c.ability_id)
    }

    /// The id behind the preselected option
    #[must_use]
    pub fn default_choice(&self) -> Option<u32> {
        self.option_id(self.default)
    }

    #[must_use]
    pub fn offers(&self, ability_id: u32) -> bool {
        self.candidates.iter().any(|c| c.ability_id == ability_id)
    }
}

/// Operator decision capability
pub trait DecisionPort {
    /// Pick a candidate id, or `None` to leave the ability unresolved
    ///
    /// # Errors
    /// Returns an error if no decision can be obtained.
    fn choose(&mut self, prompt: &IdentityPrompt) -> Result<Option<u32>>;
}

/// Answers prompts from a fixed queue, recording each prompt it sees
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    answers: VecDeque<Option<u32>>,
    asked: Vec<IdentityPrompt>,
}

impl ScriptedDecisions {
    pub fn new<I: IntoIterator<Item = Option<u32>>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts received so far, in order
    #[must_use]
    pub fn asked(&self) -> &[IdentityPrompt] {
        &self.asked
    }
}

impl DecisionPort for ScriptedDecisions {
    fn choose(&mut self, prompt: &IdentityPrompt) -> Result<Option<u32>> {
        self.asked.push(prompt.clone());
        self.answers.pop_front().ok_or_else(|| {
            Error::Prompt(format!("no scripted answer left for '{}'", prompt.ability))
        })
    }
}

/// Declines every prompt, leaving ambiguous abilities unresolved
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineAll;

impl DecisionPort for DeclineAll {
    fn choose(&mut self, prompt: &IdentityPrompt) -> Result<Option<u32>> {
        tracing::debug!("Declining identity prompt for '{}'", prompt.ability);
        Ok(None)
    }
}

/// Resolve the canonical identity of `ability` within career `career_id`
///
/// # Errors
/// Returns [`Error::InvalidDecision`] if the port picks an id that was not
/// offered, or any error the port itself raises.
pub fn resolve_identity(
    ability: &CuratedAbility,
    career_id: u16,
    dataset: &CanonicalDataset,
    scorer: &dyn SimilarityScorer,
    port: &mut dyn DecisionPort,
) -> Result<Resolution> {
    if let Some(game_id) = ability.game_id {
        return Ok(Resolution::AlreadyLinked(game_id));
    }

    let mut candidates: Vec<Candidate> = dataset
        .candidates_named(&ability.name, career_id)
        .map(|record| Candidate {
            ability_id: record.ability_id,
            career_id: record.career_id,
            score: scorer.score(&ability.description, &record.description),
            description: record.description.clone(),
        })
        .collect();

    if let [only] = candidates.as_slice()
        && only.score > 0
    {
        tracing::debug!("Auto-linked '{}' to {}", ability.name, only.ability_id);
        return Ok(Resolution::AutoLinked(only.ability_id));
    }

    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.ability_id.cmp(&b.ability_id))
    });
    let default = usize::from(candidates.first().is_some_and(|c| c.score > 0));

    let prompt = IdentityPrompt {
        ability: ability.name.clone(),
        description: ability.description.clone(),
        candidates,
        default,
    };

    match port.choose(&prompt)? {
        Some(game_id) if prompt.offers(game_id) => {
            tracing::debug!("Operator linked '{}' to {game_id}", ability.name);
            Ok(Resolution::OperatorLinked(game_id))
        }
        Some(game_id) => Err(Error::InvalidDecision {
            ability: ability.name.clone(),
            game_id,
        }),
        None => Ok(Resolution::Unresolved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{AbilityFlags, AbilityType, CanonicalAbility};
    use crate::reconcile::LongestRunScorer;
    use pretty_assertions::assert_eq;

    fn record(ability_id: u32, career_id: u16, name: &str, description: &str) -> CanonicalAbility {
        CanonicalAbility {
            ability_id,
            career_id,
            name: name.to_string(),
            description: description.to_string(),
            description_template: description.to_string(),
            ability_type: AbilityType::Standard,
            flags: AbilityFlags::empty(),
            cooldown_ms: 0,
            min_rank: 1,
            cast_time_ms: 0,
            min_range: 0,
            max_range: 0,
            ap_cost: 0,
            spec_line: 0,
            mastery_points: 0,
            results: Vec::new(),
            components: Vec::new(),
        }
    }

    fn curated(name: &str, description: &str) -> CuratedAbility {
        CuratedAbility {
            name: name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn dataset(records: Vec<CanonicalAbility>) -> CanonicalDataset {
        let mut dataset = CanonicalDataset::new();
        for r in records {
            dataset.insert_first(r);
        }
        dataset
    }

    #[test]
    fn test_already_linked_skips_matching() {
        let data = dataset(vec![]);
        let mut port = ScriptedDecisions::default();
        let mut ability = curated("Bellow", "");
        ability.game_id = Some(7);
        let resolution = resolve_identity(&ability, 1, &data, &LongestRunScorer, &mut port).unwrap();
        assert_eq!(resolution, Resolution::AlreadyLinked(7));
        assert!(port.asked().is_empty());
    }

    #[test]
    fn test_single_scoring_candidate_auto_links() {
        let data = dataset(vec![record(1400, 1, "Bellow", "Lets out a mighty bellow")]);
        let mut port = ScriptedDecisions::default();
        let resolution = resolve_identity(
            &curated("Bellow", "A mighty bellow"),
            1,
            &data,
            &LongestRunScorer,
            &mut port,
        )
        .unwrap();
        assert_eq!(resolution, Resolution::AutoLinked(1400));
        assert!(port.asked().is_empty());
    }

    #[test]
    fn test_single_zero_score_candidate_prompts() {
        let data = dataset(vec![record(1400, 1, "Bellow", "xyz")]);
        let mut port = ScriptedDecisions::new([None]);
        let resolution = resolve_identity(
            &curated("Bellow", "abc"),
            1,
            &data,
            &LongestRunScorer,
            &mut port,
        )
        .unwrap();
        assert_eq!(resolution, Resolution::Unresolved);
        assert_eq!(port.asked()[0].default, 0);
        assert_eq!(port.asked()[0].default_choice(), None);
    }

    #[test]
    fn test_two_candidates_never_auto_link() {
        let data = dataset(vec![
            record(10, 0, "Cleave", "Strikes the target"),
            record(11, 4, "Cleave", "Cleaves all enemies in front of you"),
        ]);
        let mut port = ScriptedDecisions::new([Some(11)]);
        let resolution = resolve_identity(
            &curated("Cleave", "Cleaves all enemies in front"),
            4,
            &data,
            &LongestRunScorer,
            &mut port,
        )
        .unwrap();
        assert_eq!(resolution, Resolution::OperatorLinked(11));

        let prompt = &port.asked()[0];
        let ids: Vec<u32> = prompt.candidates.iter().map(|c| c.ability_id).collect();
        assert_eq!(ids, vec![11, 10]);
        assert_eq!(prompt.default, 1);
        assert_eq!(prompt.default_choice(), Some(11));
    }

    #[test]
    fn test_ties_rank_by_id_and_are_deterministic() {
        let data = dataset(vec![
            record(30, 0, "Guard", "Protects an ally"),
            record(20, 2, "Guard", "Protects an ally"),
        ]);
        let ability = curated("Guard", "Protects an ally");

        let mut first = ScriptedDecisions::new([None]);
        let mut second = ScriptedDecisions::new([None]);
        resolve_identity(&ability, 2, &data, &LongestRunScorer, &mut first).unwrap();
        resolve_identity(&ability, 2, &data, &LongestRunScorer, &mut second).unwrap();

        assert_eq!(first.asked(), second.asked());
        let ids: Vec<u32> = first.asked()[0].candidates.iter().map(|c| c.ability_id).collect();
        assert_eq!(ids, vec![20, 30]);
    }

    #[test]
    fn test_zero_candidates_still_prompt() {
        let data = dataset(vec![record(5, 9, "Rampage", "Other career")]);
        let mut port = DeclineAll;
        let resolution = resolve_identity(
            &curated("Rampage", "Goes wild"),
            1,
            &data,
            &LongestRunScorer,
            &mut port,
        )
        .unwrap();
        assert_eq!(resolution, Resolution::Unresolved);

        let mut scripted = ScriptedDecisions::new([None]);
        resolve_identity(&curated("Rampage", "Goes wild"), 1, &data, &LongestRunScorer, &mut scripted)
            .unwrap();
        assert!(scripted.asked()[0].candidates.is_empty());
    }

    #[test]
    fn test_choice_outside_offered_set_is_error() {
        let data = dataset(vec![
            record(10, 0, "Cleave", "a"),
            record(11, 4, "Cleave", "b"),
        ]);
        let mut port = ScriptedDecisions::new([Some(99)]);
        let err = resolve_identity(&curated("Cleave", "c"), 4, &data, &LongestRunScorer, &mut port)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDecision { game_id: 99, .. }));
    }

    #[test]
    fn test_exhausted_script_is_prompt_error() {
        let data = dataset(vec![]);
        let mut port = ScriptedDecisions::default();
        let err = resolve_identity(&curated("X", ""), 1, &data, &LongestRunScorer, &mut port)
            .unwrap_err();
        assert!(matches!(err, Error::Prompt(_)));
    }
}
