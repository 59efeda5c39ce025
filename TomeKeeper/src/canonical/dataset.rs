//! In-memory canonical ability dataset

use std::collections::BTreeMap;

use crate::error::{Error, Result};

use super::types::{AbilityFlags, CanonicalAbility, DatasetStats};

/// Canonical abilities keyed by ability id
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CanonicalDataset {
    abilities: BTreeMap<u32, CanonicalAbility>,
}

impl CanonicalDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its id is already present
    ///
    /// Returns `false` when the id was taken and the record was dropped.
    pub fn insert_first(&mut self, ability: CanonicalAbility) -> bool {
        use std::collections::btree_map::Entry;
        match self.abilities.entry(ability.ability_id) {
            Entry::Vacant(slot) => {
                slot.insert(ability);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    // -------------------------------------------------------------------------
    // Query methods
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn get(&self, ability_id: u32) -> Option<&CanonicalAbility> {
        self.abilities.get(&ability_id)
    }

    /// Look up the record a curated ability of `career_id` links to
    ///
    /// # Errors
    /// `MissingCanonicalReference` if the id is unknown,
    /// `ForeignCanonicalReference` if it belongs to another career.
    pub fn require(
        &self,
        ability: &str,
        game_id: u32,
        career_id: u16,
    ) -> Result<&CanonicalAbility> {
        let record = self
            .get(game_id)
            .ok_or_else(|| Error::MissingCanonicalReference {
                ability: ability.to_string(),
                game_id,
            })?;

        if !record.visible_to(career_id) {
            return Err(Error::ForeignCanonicalReference {
                ability: ability.to_string(),
                game_id,
                career_id: record.career_id,
            });
        }

        Ok(record)
    }

    /// Records named `name` that `career_id` may link to and that carry a description
    pub fn candidates_named<'a>(
        &'a self,
        name: &'a str,
        career_id: u16,
    ) -> impl Iterator<Item = &'a CanonicalAbility> + 'a {
        self.abilities.values().filter(move |record| {
            record.name == name && record.visible_to(career_id) && !record.description.is_empty()
        })
    }

    /// Records carrying every bit of `flag`
    pub fn with_flag(&self, flag: AbilityFlags) -> impl Iterator<Item = &CanonicalAbility> {
        self.abilities
            .values()
            .filter(move |record| record.flags.contains(flag))
    }

    /// All records in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalAbility> {
        self.abilities.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        let shared_count = self.iter().filter(|a| a.career_id == 0).count();
        let mut careers: Vec<u16> = self
            .iter()
            .map(|a| a.career_id)
            .filter(|id| *id != 0)
            .collect();
        careers.sort_unstable();
        careers.dedup();

        DatasetStats {
            ability_count: self.abilities.len(),
            shared_count,
            career_count: careers.len(),
            component_count: self.iter().map(|a| a.components.len()).sum(),
            unnamed_count: self.iter().filter(|a| a.name.is_empty()).count(),
        }
    }
}
