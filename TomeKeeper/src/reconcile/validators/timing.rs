//! Cooldown and cast time
//!
//! An absent curated value counts as zero.

use crate::career::CuratedAbility;

use super::{AbilityPatch, ValidationContext};

/// Cooldown in whole seconds
pub fn validate_cooldown(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let expected = ctx.canonical.cooldown_secs();
    if ability.cooldown.unwrap_or(0) == expected {
        return AbilityPatch::default();
    }
    AbilityPatch {
        cooldown: Some(expected),
        ..Default::default()
    }
}

/// Cast time, compared in milliseconds so float noise never triggers a rewrite
pub fn validate_cast_time(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    if ability.cast_time_ms().unwrap_or(0) == ctx.canonical.cast_time_ms {
        return AbilityPatch::default();
    }
    AbilityPatch {
        cast_time: Some(ctx.canonical.cast_time_secs()),
        ..Default::default()
    }
}
