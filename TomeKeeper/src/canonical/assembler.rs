//! Joins decoded dump tables into the canonical dataset

use rayon::prelude::*;

use crate::formats::{AbilityRow, AbilityTable, ComponentTable, StringTable};

use super::dataset::CanonicalDataset;
use super::template::{TemplateValues, render_description};
use super::types::{CanonicalAbility, Component};

/// Decoded tables the assembler joins by ability id
#[derive(Debug, Clone, Copy)]
pub struct DumpTables<'a> {
    pub abilities: &'a AbilityTable,
    pub names: &'a StringTable,
    pub descriptions: &'a StringTable,
    pub components: &'a ComponentTable,
    pub results: &'a StringTable,
}

/// Build the canonical dataset from decoded tables
///
/// Rows missing a name or description still produce a record (with empty
/// text). When an ability id appears more than once the first row wins.
#[must_use]
pub fn assemble(tables: DumpTables<'_>) -> CanonicalDataset {
    let records: Vec<CanonicalAbility> = tables
        .abilities
        .rows
        .par_iter()
        .map(|row| build_record(row, &tables))
        .collect();

    let mut dataset = CanonicalDataset::new();
    for record in records {
        let ability_id = record.ability_id;
        if !dataset.insert_first(record) {
            tracing::warn!("Duplicate ability id {ability_id} in ability table, keeping first row");
        }
    }

    dataset
}

fn build_record(row: &AbilityRow, tables: &DumpTables<'_>) -> CanonicalAbility {
    let components = tables.components.components_for(row.ability_id).to_vec();
    let template = tables
        .descriptions
        .get(row.ability_id)
        .unwrap_or_default()
        .to_string();
    let description = render_canonical(row, &template, &components);

    CanonicalAbility {
        ability_id: row.ability_id,
        career_id: row.career_id,
        name: tables.names.get(row.ability_id).unwrap_or_default().to_string(),
        description,
        description_template: template,
        ability_type: row.ability_type,
        flags: row.flags,
        cooldown_ms: row.cooldown_ms,
        min_rank: row.min_rank,
        cast_time_ms: row.cast_time_ms,
        min_range: row.min_range,
        max_range: row.max_range,
        ap_cost: row.ap_cost,
        spec_line: row.spec_line,
        mastery_points: row.mastery_points,
        results: tables.results.get_all(row.ability_id).to_vec(),
        components,
    }
}

fn render_canonical(row: &AbilityRow, template: &str, components: &[Component]) -> String {
    let magnitudes: Vec<i64> = components.iter().map(Component::base_magnitude).collect();
    render_description(
        template,
        &TemplateValues {
            ap_cost: row.ap_cost,
            cooldown_secs: row.cooldown_ms / 1000,
            cast_time_ms: row.cast_time_ms,
            min_range: row.min_range,
            max_range: row.max_range,
            magnitudes: &magnitudes,
            components,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{decode_ability_table, decode_component_table, decode_string_table};
    use pretty_assertions::assert_eq;

    const ABILITIES: &str = "\
100\t4\t0\t0\t10000\t1\t0\t0\t5\t20\t0\t0
101\t0\t0\t0\t0\t1\t2000\t0\t80\t30\t1\t3
102\t4\t2\t0\t0\t10\t0\t0\t0\t0\t0\t0
100\t4\t1\t0\t0\t1\t0\t0\t0\t0\t0\t0
";
    const COMPONENTS: &str = "\
100\t1\t1\t-150\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t1\t100
";

    fn tables() -> (AbilityTable, StringTable, StringTable, ComponentTable, StringTable) {
        (
            decode_ability_table(ABILITIES),
            decode_string_table("100\tBellow\n101\tRally^n\n"),
            decode_string_table("100\tCosts {AP} AP, deals {V0} damage.\n"),
            decode_component_table(COMPONENTS),
            decode_string_table("100\tKnocked Down\n100\tStaggered\n"),
        )
    }

    #[test]
    fn test_assemble_joins_by_id() {
        let (abilities, names, descriptions, components, results) = tables();
        let dataset = assemble(DumpTables {
            abilities: &abilities,
            names: &names,
            descriptions: &descriptions,
            components: &components,
            results: &results,
        });

        assert_eq!(dataset.len(), 3);

        let bellow = dataset.get(100).unwrap();
        assert_eq!(bellow.name, "Bellow");
        assert_eq!(bellow.description, "Costs 20 AP, deals 150 damage.");
        assert_eq!(bellow.description_template, "Costs {AP} AP, deals {V0} damage.");
        assert_eq!(bellow.results, vec!["Knocked Down", "Staggered"]);
        assert_eq!(bellow.components.len(), 1);

        let rally = dataset.get(101).unwrap();
        assert_eq!(rally.name, "Rally");
        assert_eq!(rally.description, "");
        assert!(rally.components.is_empty());

        let unnamed = dataset.get(102).unwrap();
        assert_eq!(unnamed.name, "");
    }

    #[test]
    fn test_duplicate_id_keeps_first_row() {
        let (abilities, names, descriptions, components, results) = tables();
        let dataset = assemble(DumpTables {
            abilities: &abilities,
            names: &names,
            descriptions: &descriptions,
            components: &components,
            results: &results,
        });

        let ids: Vec<u32> = dataset.iter().map(|a| a.ability_id).collect();
        assert_eq!(ids, vec![100, 101, 102]);
        assert_eq!(dataset.get(100).unwrap().cooldown_ms, 10000);
    }
}
