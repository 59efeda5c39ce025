//! CLI commands for inspecting the canonical dataset

use std::path::Path;

use console::style;

use crate::canonical::{AbilityFlags, CanonicalAbility, CanonicalDataset, load_dataset};
use crate::cli::progress::{DISK, print_step};
use crate::storage::DumpDirectory;

fn build(dumps: &Path) -> anyhow::Result<CanonicalDataset> {
    Ok(load_dataset(&DumpDirectory::new(dumps))?)
}

/// Write canonical records as JSON, one file per ability or to stdout
pub fn dump(dumps: &Path, ids: &[u32], output: Option<&Path>) -> anyhow::Result<()> {
    let dataset = build(dumps)?;

    let mut records = Vec::with_capacity(ids.len());
    for id in ids {
        let record = dataset
            .get(*id)
            .ok_or_else(|| anyhow::anyhow!("Ability {id} is not in the canonical dataset"))?;
        records.push(record);
    }

    match output {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            for (idx, record) in records.iter().enumerate() {
                let path = dir.join(dump_file_name(record));
                print_step(
                    idx + 1,
                    records.len(),
                    DISK,
                    &format!("Writing {}", path.display()),
                );
                std::fs::write(&path, serde_json::to_string_pretty(record)?)?;
            }
        }
        None => {
            for record in records {
                println!("{}", serde_json::to_string_pretty(record)?);
            }
        }
    }

    Ok(())
}

/// `<id>_<Name>.json` with whitespace and apostrophes collapsed to `_`
fn dump_file_name(record: &CanonicalAbility) -> String {
    let mut name = String::with_capacity(record.name.len());
    let mut in_gap = false;
    for c in record.name.chars() {
        if c.is_whitespace() || c == '\'' {
            if !in_gap {
                name.push('_');
            }
            in_gap = true;
        } else {
            name.push(c);
            in_gap = false;
        }
    }
    format!("{}_{name}.json", record.ability_id)
}

/// List abilities carrying `flag` with each component's `A07`
pub fn flags(dumps: &Path, flag: AbilityFlags) -> anyhow::Result<()> {
    let dataset = build(dumps)?;

    let mut count = 0;
    for ability in dataset.with_flag(flag) {
        let a07: Vec<i32> = ability.components.iter().map(|c| c.values[7]).collect();
        println!(
            "{} {} {} {} {:?}",
            style(&ability.name).cyan(),
            style(ability.ability_id).red(),
            ability.ability_type,
            ability.description,
            a07
        );
        count += 1;
    }

    let names: Vec<&str> = flag.names().collect();
    println!(
        "\n{count} abilities with flag {}",
        if names.is_empty() {
            format!("{:#x}", flag.bits())
        } else {
            names.join("|")
        }
    );
    Ok(())
}

/// Print dataset statistics
pub fn stats(dumps: &Path) -> anyhow::Result<()> {
    let dataset = build(dumps)?;
    let stats = dataset.stats();

    println!("Abilities:       {}", stats.ability_count);
    println!("  shared:        {}", stats.shared_count);
    println!("  unnamed:       {}", stats.unnamed_count);
    println!("Careers:         {}", stats.career_count);
    println!("Components:      {}", stats.component_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::AbilityType;

    #[test]
    fn test_dump_file_name() {
        let record = CanonicalAbility {
            ability_id: 14313,
            career_id: 0,
            name: "Khaine's  Embrace".into(),
            description: String::new(),
            description_template: String::new(),
            ability_type: AbilityType::Standard,
            flags: AbilityFlags::empty(),
            cooldown_ms: 0,
            min_rank: 1,
            cast_time_ms: 0,
            min_range: 0,
            max_range: 0,
            ap_cost: 0,
            spec_line: 0,
            mastery_points: 0,
            results: Vec::new(),
            components: Vec::new(),
        };
        assert_eq!(dump_file_name(&record), "14313_Khaine_s_Embrace.json");
    }
}
