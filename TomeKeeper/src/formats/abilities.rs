//! Ability record table decoding
//!
//! Column order (12 fields, tab-separated):
//!
//! ```text
//! AbilityID CareerID AbilityType Flags CooldownMs MinRank CastTimeMs MinRange MaxRange APCost SpecLine MasteryPoints
//! ```

use crate::canonical::{AbilityFlags, AbilityType};

use super::{DecodeReport, data_lines, numeric_fields};

const ABILITY_FIELDS: usize = 12;

/// One decoded row of the ability table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRow {
    pub ability_id: u32,
    pub career_id: u16,
    pub ability_type: AbilityType,
    pub flags: AbilityFlags,
    pub cooldown_ms: u32,
    pub min_rank: u8,
    pub cast_time_ms: u32,
    pub min_range: u32,
    pub max_range: u32,
    pub ap_cost: u32,
    pub spec_line: u8,
    pub mastery_points: u8,
}

/// Decoded ability table, rows in file order
#[derive(Debug, Clone, Default)]
pub struct AbilityTable {
    pub rows: Vec<AbilityRow>,
    pub report: DecodeReport,
}

/// Decode the ability table dump
#[must_use]
pub fn decode_ability_table(content: &str) -> AbilityTable {
    let mut table = AbilityTable::default();

    for (line_no, line) in data_lines(content) {
        match parse_ability_row(line) {
            Some(row) => {
                table.rows.push(row);
                table.report.record(true);
            }
            None => {
                tracing::debug!("Skipping malformed ability row {line_no}: {line:?}");
                table.report.record(false);
            }
        }
    }

    table
}

fn parse_ability_row(line: &str) -> Option<AbilityRow> {
    let f = numeric_fields::<ABILITY_FIELDS>(line)?;

    Some(AbilityRow {
        ability_id: u32::try_from(f[0]).ok().filter(|id| *id != 0)?,
        career_id: u16::try_from(f[1]).ok()?,
        ability_type: AbilityType::from_code(u8::try_from(f[2]).ok()?)?,
        flags: AbilityFlags::from_bits(u32::try_from(f[3]).ok()?),
        cooldown_ms: u32::try_from(f[4]).ok()?,
        min_rank: u8::try_from(f[5]).ok()?,
        cast_time_ms: u32::try_from(f[6]).ok()?,
        min_range: u32::try_from(f[7]).ok()?,
        max_range: u32::try_from(f[8]).ok()?,
        ap_cost: u32::try_from(f[9]).ok()?,
        spec_line: u8::try_from(f[10]).ok()?,
        mastery_points: u8::try_from(f[11]).ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
# AbilityID\tCareerID\tAbilityType\tFlags\tCooldownMs\tMinRank\tCastTimeMs\tMinRange\tMaxRange\tAPCost\tSpecLine\tMasteryPoints
1400\t1\t0\t0x0001\t10000\t4\t0\t0\t5\t25\t0\t0
1401\t0\t1\t0\t60000\t20\t1500\t0\t100\t0\t2\t5
";

    #[test]
    fn test_decode_rows() {
        let table = decode_ability_table(TABLE);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.report.skipped, 0);

        let first = &table.rows[0];
        assert_eq!(first.ability_id, 1400);
        assert_eq!(first.career_id, 1);
        assert_eq!(first.ability_type, AbilityType::Standard);
        assert!(first.flags.contains(AbilityFlags::REQUIRES_SHIELD));
        assert_eq!(first.ap_cost, 25);

        let second = &table.rows[1];
        assert_eq!(second.ability_type, AbilityType::Morale);
        assert_eq!(second.cast_time_ms, 1500);
        assert_eq!(second.spec_line, 2);
        assert_eq!(second.mastery_points, 5);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let content = "\
AbilityID\tCareerID
1\t0\t9\t0\t0\t1\t0\t0\t0\t0\t0\t0
0\t0\t0\t0\t0\t1\t0\t0\t0\t0\t0\t0
2\t0\t0\t0\t0\t1\t0\t0\t0\t0\t0
3\t0\t0\t0\t0\t1\t0\t0\t0\t0\t0\t0
";
        let table = decode_ability_table(content);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].ability_id, 3);
        assert_eq!(table.report, DecodeReport { parsed: 1, skipped: 4 });
    }
}
