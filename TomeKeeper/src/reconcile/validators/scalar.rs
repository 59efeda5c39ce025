//! Direct one-to-one field copies

use crate::career::CuratedAbility;

use super::{AbilityPatch, ValidationContext};

pub fn validate_min_rank(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let expected = ctx.canonical.min_rank;
    if ability.min_rank.unwrap_or(0) == expected {
        return AbilityPatch::default();
    }
    AbilityPatch {
        min_rank: Some(expected),
        ..Default::default()
    }
}

/// Max range goes to `range`, min range to `minRange`
pub fn validate_range(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let canonical = ctx.canonical;
    AbilityPatch {
        range: (ability.range.unwrap_or(0) != canonical.max_range).then_some(canonical.max_range),
        min_range: (ability.min_range.unwrap_or(0) != canonical.min_range)
            .then_some(canonical.min_range),
        ..Default::default()
    }
}

pub fn validate_ap_cost(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let expected = ctx.canonical.ap_cost;
    if ability.ap_cost.unwrap_or(0) == expected {
        return AbilityPatch::default();
    }
    AbilityPatch {
        ap_cost: Some(expected),
        ..Default::default()
    }
}

/// Unnamed canonical records never blank a curated name
pub fn validate_name(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let expected = &ctx.canonical.name;
    if expected.is_empty() || ability.name == *expected {
        return AbilityPatch::default();
    }
    AbilityPatch {
        name: Some(expected.clone()),
        ..Default::default()
    }
}

pub fn validate_type(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let expected = ctx.canonical.ability_type;
    if ability.ability_type == Some(expected) {
        return AbilityPatch::default();
    }
    AbilityPatch {
        ability_type: Some(expected),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::canonical;
    use super::*;
    use crate::canonical::{AbilityType, CanonicalAbility, CanonicalDataset};
    use crate::career::{BaseStats, Career};

    fn run(
        record: &CanonicalAbility,
        ability: &CuratedAbility,
        validator: fn(&ValidationContext<'_>, &CuratedAbility) -> AbilityPatch,
    ) -> AbilityPatch {
        let career = Career::default();
        let stats = BaseStats::default();
        let dataset = CanonicalDataset::new();
        let ctx = ValidationContext {
            canonical: record,
            career: &career,
            stats: &stats,
            dataset: &dataset,
        };
        validator(&ctx, ability)
    }

    #[test]
    fn test_ap_cost_corrected() {
        let record = CanonicalAbility {
            ap_cost: 20,
            ..canonical(1)
        };
        let ability = CuratedAbility {
            ap_cost: Some(25),
            ..Default::default()
        };
        assert_eq!(run(&record, &ability, validate_ap_cost).ap_cost, Some(20));
    }

    #[test]
    fn test_range_only_patches_differing_side() {
        let record = CanonicalAbility {
            min_range: 5,
            max_range: 100,
            ..canonical(1)
        };
        let ability = CuratedAbility {
            range: Some(100),
            ..Default::default()
        };
        let patch = run(&record, &ability, validate_range);
        assert_eq!(patch.range, None);
        assert_eq!(patch.min_range, Some(5));
    }

    #[test]
    fn test_name_and_type() {
        let record = CanonicalAbility {
            name: "Grapple".into(),
            ability_type: AbilityType::Morale,
            ..canonical(1)
        };
        let ability = CuratedAbility {
            name: "grapple".into(),
            ability_type: Some(AbilityType::Standard),
            ..Default::default()
        };
        assert_eq!(run(&record, &ability, validate_name).name.as_deref(), Some("Grapple"));
        assert_eq!(
            run(&record, &ability, validate_type).ability_type,
            Some(AbilityType::Morale)
        );

        let unnamed = CanonicalAbility {
            name: String::new(),
            ..canonical(1)
        };
        assert!(run(&unnamed, &ability, validate_name).is_empty());
    }

    #[test]
    fn test_min_rank() {
        let record = CanonicalAbility {
            min_rank: 12,
            ..canonical(1)
        };
        let ability = CuratedAbility {
            min_rank: Some(10),
            ..Default::default()
        };
        assert_eq!(run(&record, &ability, validate_min_rank).min_rank, Some(12));
    }
}
