//! Builds the canonical dataset from a dump source

use crate::error::Result;
use crate::formats::{
    DecodeReport, decode_ability_table, decode_component_table, decode_string_table,
};
use crate::storage::{DumpKind, DumpSource};

use super::assembler::{DumpTables, assemble};
use super::dataset::CanonicalDataset;

/// Read, decode and assemble every dump
///
/// # Errors
/// Returns an error if any dump is missing or fails to decode. Malformed rows
/// are skipped and only logged.
pub fn load_dataset(source: &dyn DumpSource) -> Result<CanonicalDataset> {
    tracing::info!("Building canonical dataset");

    let abilities = decode_ability_table(&source.read_dump(DumpKind::Abilities)?);
    log_report(DumpKind::Abilities, abilities.report);

    let components = decode_component_table(&source.read_dump(DumpKind::Components)?);
    log_report(DumpKind::Components, components.report);

    let names = decode_string_table(&source.read_dump(DumpKind::Names)?);
    log_report(DumpKind::Names, names.report);

    let descriptions = decode_string_table(&source.read_dump(DumpKind::Descriptions)?);
    log_report(DumpKind::Descriptions, descriptions.report);

    let results = decode_string_table(&source.read_dump(DumpKind::Results)?);
    log_report(DumpKind::Results, results.report);

    let dataset = assemble(DumpTables {
        abilities: &abilities,
        names: &names,
        descriptions: &descriptions,
        components: &components,
        results: &results,
    });
    log_stats(&dataset);

    Ok(dataset)
}

fn log_report(kind: DumpKind, report: DecodeReport) {
    if report.skipped > 0 {
        tracing::info!(
            "{}: {} rows decoded, {} malformed rows skipped",
            kind.file_name(),
            report.parsed,
            report.skipped
        );
    } else {
        tracing::debug!("{}: {} rows decoded", kind.file_name(), report.parsed);
    }
}

/// Log dataset statistics
fn log_stats(dataset: &CanonicalDataset) {
    let stats = dataset.stats();
    tracing::info!(
        "Built dataset: {} abilities ({} shared, {} careers), {} components, {} unnamed",
        stats.ability_count,
        stats.shared_count,
        stats.career_count,
        stats.component_count,
        stats.unnamed_count
    );
}
