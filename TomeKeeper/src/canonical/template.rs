//! Description template rendering
//!
//! Game descriptions carry `{TOKEN}` placeholders that are filled from the
//! ability's scalar fields and its components:
//!
//! | token        | value                               |
//! |--------------|-------------------------------------|
//! | `{AP}`       | AP cost                             |
//! | `{COOLDOWN}` | cooldown in seconds                 |
//! | `{CAST}`     | cast time in seconds                |
//! | `{RANGE}`    | max range                           |
//! | `{MINRANGE}` | min range                           |
//! | `{V<n>}`     | magnitude of component `n`          |
//! | `{D<n>}`     | duration of component `n` (seconds) |
//! | `{I<n>}`     | tick interval of component `n`      |
//! | `{R<n>}`     | radius of component `n`             |
//!
//! Unknown tokens and out-of-range component indices are left verbatim.

use super::types::Component;

/// Values a description template is rendered from
#[derive(Debug, Clone, Copy)]
pub struct TemplateValues<'a> {
    pub ap_cost: u32,
    pub cooldown_secs: u32,
    pub cast_time_ms: u32,
    pub min_range: u32,
    pub max_range: u32,
    /// One magnitude per component
    pub magnitudes: &'a [i64],
    pub components: &'a [Component],
}

impl TemplateValues<'_> {
    fn lookup(&self, token: &str) -> Option<String> {
        match token {
            "AP" => return Some(self.ap_cost.to_string()),
            "COOLDOWN" => return Some(self.cooldown_secs.to_string()),
            "CAST" => return Some(format_seconds(self.cast_time_ms)),
            "RANGE" => return Some(self.max_range.to_string()),
            "MINRANGE" => return Some(self.min_range.to_string()),
            _ => {}
        }

        let mut chars = token.chars();
        let kind = chars.next()?;
        let index: usize = chars.as_str().parse().ok()?;

        match kind {
            'V' => self.magnitudes.get(index).map(ToString::to_string),
            'D' => self
                .components
                .get(index)
                .map(|c| format_seconds(c.duration_ms)),
            'I' => self
                .components
                .get(index)
                .map(|c| format_seconds(c.interval_ms)),
            'R' => self.components.get(index).map(|c| c.radius.to_string()),
            _ => None,
        }
    }
}

/// Substitute every known `{TOKEN}` in `template`
#[must_use]
pub fn render_description(template: &str, values: &TemplateValues<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let token = &after[..close];
        match values.lookup(token) {
            Some(value) => out.push_str(&value),
            None => {
                tracing::debug!("Leaving unknown description token {{{token}}}");
                out.push('{');
                out.push_str(token);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Milliseconds as seconds without trailing zeros (`1500` -> `1.5`, `2000` -> `2`)
#[must_use]
pub fn format_seconds(ms: u32) -> String {
    if ms % 1000 == 0 {
        (ms / 1000).to_string()
    } else {
        (f64::from(ms) / 1000.0).to_string()
    }
}
