//! Ability component table decoding
//!
//! Column order (16 fields, tab-separated):
//!
//! ```text
//! AbilityID ComponentID Operation A00 A01 A02 A03 A04 A05 A06 A07 DurationMs IntervalMs Radius ScalingStat Coefficient
//! ```
//!
//! Component order within an ability mirrors effect application order, so rows
//! are grouped per ability without reordering.

use std::collections::BTreeMap;

use crate::canonical::{COMPONENT_VALUE_COUNT, Component, ComponentOp, Stat};

use super::{DecodeReport, data_lines, numeric_fields};

const COMPONENT_FIELDS: usize = 16;

/// Components grouped by owning ability id
#[derive(Debug, Clone, Default)]
pub struct ComponentTable {
    pub by_ability: BTreeMap<u32, Vec<Component>>,
    pub report: DecodeReport,
}

impl ComponentTable {
    /// Components of `ability_id` in file order (empty if none)
    #[must_use]
    pub fn components_for(&self, ability_id: u32) -> &[Component] {
        self.by_ability
            .get(&ability_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of decoded components
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.by_ability.values().map(Vec::len).sum()
    }
}

/// Decode the component table dump
#[must_use]
pub fn decode_component_table(content: &str) -> ComponentTable {
    let mut table = ComponentTable::default();

    for (line_no, line) in data_lines(content) {
        match parse_component_row(line) {
            Some((ability_id, component)) => {
                table.by_ability.entry(ability_id).or_default().push(component);
                table.report.record(true);
            }
            None => {
                tracing::debug!("Skipping malformed component row {line_no}: {line:?}");
                table.report.record(false);
            }
        }
    }

    table
}

fn parse_component_row(line: &str) -> Option<(u32, Component)> {
    let f = numeric_fields::<COMPONENT_FIELDS>(line)?;

    let ability_id = u32::try_from(f[0]).ok().filter(|id| *id != 0)?;

    let mut values = [0i32; COMPONENT_VALUE_COUNT];
    for (slot, raw) in values.iter_mut().zip(&f[3..3 + COMPONENT_VALUE_COUNT]) {
        *slot = i32::try_from(*raw).ok()?;
    }

    let scaling = match u8::try_from(f[14]).ok()? {
        0 => None,
        code => Some(Stat::from_code(code)?),
    };

    let component = Component {
        component_id: u32::try_from(f[1]).ok()?,
        operation: ComponentOp::from_code(u16::try_from(f[2]).ok()?),
        values,
        duration_ms: u32::try_from(f[11]).ok()?,
        interval_ms: u32::try_from(f[12]).ok()?,
        radius: u32::try_from(f[13]).ok()?,
        scaling,
        coefficient: u32::try_from(f[15]).ok()?,
    };

    Some((ability_id, component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_preserve_file_order() {
        let content = "\
200\t3\t1\t150\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t1\t100
201\t1\t2\t80\t0\t0\t0\t0\t0\t0\t0\t9000\t3000\t0\t4\t50
200\t1\t7\t40\t0\t0\t0\t0\t0\t0\t0\t5000\t0\t0\t0\t0
200\t2\t8\t201\t0\t0\t0\t0\t0\t0\t0\t0\t0\t30\t0\t0
";
        let table = decode_component_table(content);
        let ids: Vec<u32> = table
            .components_for(200)
            .iter()
            .map(|c| c.component_id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let first = &table.components_for(200)[0];
        assert_eq!(first.operation, ComponentOp::Damage);
        assert_eq!(first.scaling, Some(Stat::Strength));
        assert_eq!(first.coefficient, 100);

        let heal = &table.components_for(201)[0];
        assert_eq!(heal.operation, ComponentOp::Heal);
        assert_eq!(heal.duration_ms, 9000);
        assert_eq!(heal.interval_ms, 3000);
        assert_eq!(heal.scaling, Some(Stat::Willpower));

        assert_eq!(table.component_count(), 4);
        assert!(table.components_for(999).is_empty());
    }

    #[test]
    fn test_unknown_operation_is_kept() {
        let content = "5\t1\t77\t0\t0\t0\t0\t0\t0\t0\t12\t0\t0\t0\t0\t0\n";
        let table = decode_component_table(content);
        let component = &table.components_for(5)[0];
        assert_eq!(component.operation, ComponentOp::Unknown(77));
        assert_eq!(component.values[7], 12);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let content = "\
AbilityID\tComponentID\tOperation
5\t1\t1\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t9\t0
5\t1\t1\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0
5\t2\t1\t99999999999\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0
";
        let table = decode_component_table(content);
        assert_eq!(table.component_count(), 1);
        assert_eq!(table.report, DecodeReport { parsed: 1, skipped: 3 });
    }
}
