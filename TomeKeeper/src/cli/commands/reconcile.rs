//! CLI commands for career reconciliation and the career registry

use std::path::Path;
use std::time::Instant;

use console::style;

use crate::canonical::load_dataset;
use crate::career::CareerRegistry;
use crate::cli::progress::{
    LINK, LOOKING_GLASS, SCROLL, WARNING, print_done, print_step, simple_spinner,
};
use crate::cli::prompt::TerminalPrompt;
use crate::reconcile::{CareerReport, DeclineAll, Reconciler};
use crate::storage::{CareerDirectory, DumpDirectory};

/// Build the dataset and reconcile the selected careers
pub fn execute(
    dumps: &Path,
    careers_dir: &Path,
    registry_path: Option<&Path>,
    careers: &[String],
    no_prompt: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();

    print_step(1, 3, LOOKING_GLASS, "Reading dumps...");
    let spinner = simple_spinner("Building canonical dataset");
    let dataset = load_dataset(&DumpDirectory::new(dumps));
    spinner.finish_and_clear();
    let dataset = dataset?;

    print_step(2, 3, SCROLL, "Loading career registry...");
    let loaded;
    let registry = match registry_path {
        Some(path) => {
            loaded = CareerRegistry::from_file(path)?;
            &loaded
        }
        None => CareerRegistry::builtin(),
    };
    let selected = registry.select(careers)?;

    print_step(
        3,
        3,
        LINK,
        &format!("Reconciling {} career(s)...", selected.len()),
    );
    let mut store = CareerDirectory::new(careers_dir);
    let reconciler = Reconciler::new(&dataset);
    let summary = if no_prompt {
        reconciler.run(&selected, &mut store, &mut DeclineAll)?
    } else {
        reconciler.run(&selected, &mut store, &mut TerminalPrompt::new())?
    };

    println!();
    for report in &summary.reports {
        print_report(report);
    }
    for (slug, err) in &summary.failures {
        println!("{}{}: {}", WARNING, style(slug).red().bold(), err);
    }

    print_done(started.elapsed());

    if !summary.is_success() {
        anyhow::bail!(
            "{} of {} career(s) failed",
            summary.failures.len(),
            selected.len()
        );
    }
    Ok(())
}

fn print_report(report: &CareerReport) {
    println!(
        "{}: {} auto-linked, {} chosen, {} unresolved, {} corrected, {} tome tactics skipped",
        style(&report.slug).green().bold(),
        report.auto_linked.len(),
        report.operator_linked.len(),
        report.unresolved.len(),
        report.corrected.len(),
        report.excluded
    );
    for name in &report.unresolved {
        println!("  {} {}", style("unresolved").yellow(), name);
    }
    for correction in &report.corrected {
        println!(
            "  {} {} ({})",
            style("corrected").cyan(),
            correction.ability,
            correction.fields.join(", ")
        );
    }
}

/// Print the career registry
pub fn careers(registry_path: Option<&Path>) -> anyhow::Result<()> {
    let loaded;
    let registry = match registry_path {
        Some(path) => {
            loaded = CareerRegistry::from_file(path)?;
            &loaded
        }
        None => CareerRegistry::builtin(),
    };

    println!(
        "{:<28} {:>4}  {:>4} {:>4} {:>4} {:>4}",
        "Career", "ID", "STR", "BS", "INT", "WP"
    );
    for career in registry.iter() {
        let stats = career.entry.stats;
        println!(
            "{:<28} {:>4}  {:>4} {:>4} {:>4} {:>4}",
            career.slug,
            career.entry.career_id,
            stats.strength,
            stats.ballistic_skill,
            stats.intelligence,
            stats.willpower
        );
    }
    println!("\n{} careers", registry.len());
    Ok(())
}
