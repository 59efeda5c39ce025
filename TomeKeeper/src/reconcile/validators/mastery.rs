//! Mastery path requirement

use crate::career::{CuratedAbility, MasteryRequirement};

use super::{AbilityPatch, ValidationContext};

/// Map the canonical specialization line onto the career's mastery paths
///
/// Line `n` is `masteryPaths[n - 1]`; line 0 is a core ability with no
/// requirement. A line the career file does not lay out is logged and left
/// alone.
pub fn validate_mastery(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let canonical = ctx.canonical;

    let expected = match canonical.spec_line {
        0 => None,
        line => {
            let Some(path) = ctx.career.mastery_paths.get(usize::from(line) - 1) else {
                tracing::warn!(
                    "{}: specialization line {line} has no mastery path in this career ({} paths)",
                    ability.name,
                    ctx.career.mastery_paths.len()
                );
                return AbilityPatch::default();
            };
            Some(MasteryRequirement {
                path: path.clone(),
                points: canonical.mastery_points,
            })
        }
    };

    if ability.mastery == expected {
        return AbilityPatch::default();
    }
    AbilityPatch {
        mastery: Some(expected),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::canonical;
    use super::*;
    use crate::canonical::{CanonicalAbility, CanonicalDataset};
    use crate::career::{BaseStats, Career};

    fn run(spec_line: u8, points: u8, ability: &CuratedAbility) -> AbilityPatch {
        let record = CanonicalAbility {
            spec_line,
            mastery_points: points,
            ..canonical(1)
        };
        let career = Career {
            mastery_paths: vec!["Path of Asuryan".into(), "Path of Vaul".into()],
            ..Default::default()
        };
        let stats = BaseStats::default();
        let dataset = CanonicalDataset::new();
        validate_mastery(
            &ValidationContext {
                canonical: &record,
                career: &career,
                stats: &stats,
                dataset: &dataset,
            },
            ability,
        )
    }

    #[test]
    fn test_line_maps_to_path() {
        let patch = run(2, 9, &CuratedAbility::default());
        assert_eq!(
            patch.mastery,
            Some(Some(MasteryRequirement {
                path: "Path of Vaul".into(),
                points: 9
            }))
        );
    }

    #[test]
    fn test_core_ability_clears_requirement() {
        let ability = CuratedAbility {
            mastery: Some(MasteryRequirement {
                path: "Path of Asuryan".into(),
                points: 3,
            }),
            ..Default::default()
        };
        assert_eq!(run(0, 0, &ability).mastery, Some(None));
        assert!(run(0, 0, &CuratedAbility::default()).is_empty());
    }

    #[test]
    fn test_line_outside_layout_left_alone() {
        assert!(run(3, 5, &CuratedAbility::default()).is_empty());
    }
}
