//! Command execution implementations

use super::definitions::Commands;
use super::{inspect, reconcile};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Reconcile {
                dumps,
                careers,
                registry,
                career,
                no_prompt,
            } => reconcile::execute(dumps, careers, registry.as_deref(), career, *no_prompt),
            Commands::Dump {
                dumps,
                ability,
                output,
            } => inspect::dump(dumps, ability, output.as_deref()),
            Commands::Flags { dumps, flag } => inspect::flags(dumps, flag.0),
            Commands::Stats { dumps } => inspect::stats(dumps),
            Commands::Careers { registry } => reconcile::careers(registry.as_deref()),
        }
    }
}
