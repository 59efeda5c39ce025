//! Usage note built from flags and result strings

use crate::canonical::{AbilityFlags, CanonicalAbility};
use crate::career::CuratedAbility;

use super::{AbilityPatch, ValidationContext};

/// Flags that carry a player-facing requirement, in note order
const REQUIREMENT_NOTES: &[(AbilityFlags, &str)] = &[
    (AbilityFlags::REQUIRES_SHIELD, "Requires a shield"),
    (AbilityFlags::REQUIRES_TWO_HANDED, "Requires a two-handed weapon"),
    (AbilityFlags::REQUIRES_DUAL_WIELD, "Requires dual wielding"),
    (AbilityFlags::BEHIND_TARGET, "Must be behind target"),
    (AbilityFlags::FRONT_OF_TARGET, "Must be in front of target"),
    (AbilityFlags::CAST_WHILE_MOVING, "Usable while moving"),
];

/// Requirement notes implied by the record's flags
pub fn requirement_notes<'a>(record: &'a CanonicalAbility) -> impl Iterator<Item = &'a str> + 'a {
    REQUIREMENT_NOTES
        .iter()
        .filter(|(flag, _)| record.flags.contains(*flag))
        .map(|(_, text)| *text)
}

/// Requirement notes then result strings, joined with `. `
pub fn validate_note(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let record = ctx.canonical;
    let parts: Vec<&str> = requirement_notes(record)
        .chain(
            record
                .results
                .iter()
                .map(String::as_str)
                .filter(|r| !r.is_empty()),
        )
        .collect();

    let expected = (!parts.is_empty()).then(|| parts.join(". "));
    if ability.note == expected {
        return AbilityPatch::default();
    }
    AbilityPatch {
        note: Some(expected),
        ..Default::default()
    }
}
