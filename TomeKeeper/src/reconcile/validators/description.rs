//! Description text, rendered from corrected values
//!
//! Must run after every validator that touches a rendered field.

use crate::canonical::{TemplateValues, render_description};
use crate::career::CuratedAbility;

use super::{AbilityPatch, ValidationContext};

pub fn validate_description(ctx: &ValidationContext<'_>, ability: &CuratedAbility) -> AbilityPatch {
    let canonical = ctx.canonical;
    if canonical.description_template.is_empty() {
        return AbilityPatch::default();
    }

    let rendered = render_description(
        &canonical.description_template,
        &TemplateValues {
            ap_cost: ability.ap_cost.unwrap_or(0),
            cooldown_secs: ability.cooldown.unwrap_or(0),
            cast_time_ms: ability.cast_time_ms().unwrap_or(0),
            min_range: ability.min_range.unwrap_or(0),
            max_range: ability.range.unwrap_or(0),
            magnitudes: &ability.values,
            components: &canonical.components,
        },
    );

    if rendered == ability.description {
        return AbilityPatch::default();
    }
    AbilityPatch {
        description: Some(rendered),
        ..Default::default()
    }
}
