//! Per-component magnitudes (`values`)

use crate::canonical::{CanonicalDataset, Component};
use crate::career::{BaseStats, CuratedAbility};

use super::{AbilityPatch, ValidationContext};

/// How many `TriggerAbility` hops are followed before giving up
const MAX_TRIGGER_DEPTH: usize = 4;

/// Magnitude a player sees for `component` at the career's reference stats
///
/// `TriggerAbility` components show the first component of the ability they
/// fire. Everything else is `|A00|`, plus `(stat / 5) * coefficient / 100`
/// when the component scales with a stat.
pub fn component_magnitude(
    component: &Component,
    dataset: &CanonicalDataset,
    stats: &BaseStats,
) -> i64 {
    magnitude_at_depth(component, dataset, stats, 0)
}

fn magnitude_at_depth(
    component: &Component,
    dataset: &CanonicalDataset,
    stats: &BaseStats,
    depth: usize,
) -> i64 {
    if let Some(linked_id) = component.linked_ability() {
        if depth >= MAX_TRIGGER_DEPTH {
            tracing::warn!("Trigger chain through ability {linked_id} is too deep");
            return 0;
        }
        return match dataset.get(linked_id).and_then(|a| a.components.first()) {
            Some(first) => magnitude_at_depth(first, dataset, stats, depth + 1),
            None => {
                tracing::debug!("Triggered ability {linked_id} has no components");
                0
            }
        };
    }

    let base = component.base_magnitude();
    match component.scaling {
        Some(stat) => {
            let bonus = i64::from(stats.get(stat)) / 5 * i64::from(component.coefficient) / 100;
            base + bonus
        }
        None => base,
    }
}

pub fn validate_component_values(
    ctx: &ValidationContext<'_>,
    ability: &CuratedAbility,
) -> AbilityPatch {
    let expected: Vec<i64> = ctx
        .canonical
        .components
        .iter()
        .map(|c| component_magnitude(c, ctx.dataset, ctx.stats))
        .collect();

    if ability.values == expected {
        return AbilityPatch::default();
    }
    AbilityPatch {
        values: Some(expected),
        ..Default::default()
    }
}
