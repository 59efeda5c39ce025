//! Field validator chain
//!
//! Each validator compares one aspect of a linked curated ability with its
//! canonical record and returns an [`AbilityPatch`] holding only the fields
//! that need correcting. Validators run in [`VALIDATORS`] order; each one
//! sees the ability as patched by the validators before it, so the
//! description (last) is rendered from the corrected values.

mod components;
mod description;
mod mastery;
mod note;
mod scalar;
mod timing;

pub use components::{component_magnitude, validate_component_values};
pub use description::validate_description;
pub use mastery::validate_mastery;
pub use note::{requirement_notes, validate_note};
pub use scalar::{validate_ap_cost, validate_min_rank, validate_name, validate_range, validate_type};
pub use timing::{validate_cast_time, validate_cooldown};

use crate::canonical::{AbilityType, CanonicalAbility, CanonicalDataset};
use crate::career::{BaseStats, Career, CuratedAbility, MasteryRequirement};

/// Read-only inputs shared by every validator
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// The record the curated ability links to
    pub canonical: &'a CanonicalAbility,
    pub career: &'a Career,
    pub stats: &'a BaseStats,
    /// Full dataset, for abilities that reference other abilities
    pub dataset: &'a CanonicalDataset,
}

/// Partial override of curated fields
///
/// `None` leaves a field alone. Nullable fields use a nested option where
/// `Some(None)` clears the value.
#[allow(clippy::option_option)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbilityPatch {
    pub cooldown: Option<u32>,
    pub min_rank: Option<u8>,
    pub mastery: Option<Option<MasteryRequirement>>,
    pub cast_time: Option<f64>,
    pub range: Option<u32>,
    pub min_range: Option<u32>,
    pub ap_cost: Option<u32>,
    pub name: Option<String>,
    pub note: Option<Option<String>>,
    pub values: Option<Vec<i64>>,
    pub ability_type: Option<AbilityType>,
    pub description: Option<String>,
}

impl AbilityPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Curated field names this patch overrides
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("cooldown", self.cooldown.is_some()),
            ("minrank", self.min_rank.is_some()),
            ("mastery", self.mastery.is_some()),
            ("castTime", self.cast_time.is_some()),
            ("range", self.range.is_some()),
            ("minRange", self.min_range.is_some()),
            ("apCost", self.ap_cost.is_some()),
            ("name", self.name.is_some()),
            ("note", self.note.is_some()),
            ("values", self.values.is_some()),
            ("abilityType", self.ability_type.is_some()),
            ("description", self.description.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, set)| set.then_some(field))
        .collect()
    }

    /// Write every overridden field into `ability`
    pub fn apply_to(&self, ability: &mut CuratedAbility) {
        if let Some(cooldown) = self.cooldown {
            ability.cooldown = Some(cooldown);
        }
        if let Some(min_rank) = self.min_rank {
            ability.min_rank = Some(min_rank);
        }
        if let Some(mastery) = &self.mastery {
            ability.mastery.clone_from(mastery);
        }
        if let Some(cast_time) = self.cast_time {
            ability.cast_time = Some(cast_time);
        }
        if let Some(range) = self.range {
            ability.range = Some(range);
        }
        if let Some(min_range) = self.min_range {
            ability.min_range = Some(min_range);
        }
        if let Some(ap_cost) = self.ap_cost {
            ability.ap_cost = Some(ap_cost);
        }
        if let Some(name) = &self.name {
            ability.name.clone_from(name);
        }
        if let Some(note) = &self.note {
            ability.note.clone_from(note);
        }
        if let Some(values) = &self.values {
            ability.values.clone_from(values);
        }
        if let Some(ability_type) = self.ability_type {
            ability.ability_type = Some(ability_type);
        }
        if let Some(description) = &self.description {
            ability.description.clone_from(description);
        }
    }

    /// Fold `later` over `self`; fields set in `later` win
    pub fn merge(&mut self, later: Self) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if later.$field.is_some() { self.$field = later.$field; })*
            };
        }
        take!(
            cooldown, min_rank, mastery, cast_time, range, min_range, ap_cost, name, note, values,
            ability_type, description
        );
    }
}

/// A correction rule
pub type Validator = fn(&ValidationContext<'_>, &CuratedAbility) -> AbilityPatch;

/// The chain, in application order
pub const VALIDATORS: &[(&str, Validator)] = &[
    ("cooldown", validate_cooldown),
    ("min_rank", validate_min_rank),
    ("mastery", validate_mastery),
    ("cast_time", validate_cast_time),
    ("range", validate_range),
    ("ap_cost", validate_ap_cost),
    ("name", validate_name),
    ("note", validate_note),
    ("component_values", validate_component_values),
    ("type", validate_type),
    ("description", validate_description),
];

/// Result of running the chain over one ability
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutcome {
    /// The fully corrected ability
    pub ability: CuratedAbility,
    /// Every correction applied
    pub patch: AbilityPatch,
}

/// Run every validator over a linked curated ability
#[must_use]
pub fn run_chain(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> ChainOutcome {
    let mut current = ability.clone();
    let mut total = AbilityPatch::default();

    for (name, validator) in VALIDATORS {
        let patch = validator(ctx, &current);
        if patch.is_empty() {
            continue;
        }
        tracing::debug!(
            "{}: {name} corrected {:?}",
            current.name,
            patch.changed_fields()
        );
        patch.apply_to(&mut current);
        total.merge(patch);
    }

    ChainOutcome {
        ability: current,
        patch: total,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::canonical::{AbilityFlags, AbilityType, CanonicalAbility, Component, ComponentOp};

    pub fn canonical(ability_id: u32) -> CanonicalAbility {
        CanonicalAbility {
            ability_id,
            career_id: 1,
            name: "Test Ability".to_string(),
            description: String::new(),
            description_template: String::new(),
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

    pub fn component(operation: ComponentOp, a00: i32) -> Component {
        Component {
            component_id: 1,
            operation,
            values: [a00, 0, 0, 0, 0, 0, 0, 0],
            duration_ms: 0,
            interval_ms: 0,
            radius: 0,
            scaling: None,
            coefficient: 0,
        }
    }
}
