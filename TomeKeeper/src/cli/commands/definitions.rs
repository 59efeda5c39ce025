//! Subcommand enum definitions for CLI

use clap::Subcommand;
use std::path::PathBuf;

use super::FlagArg;

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile curated career files against the extracted game data
    Reconcile {
        /// Directory containing the extracted dumps
        #[arg(short, long)]
        dumps: PathBuf,

        /// Directory containing `<slug>.json` career files
        #[arg(short, long)]
        careers: PathBuf,

        /// Career registry TOML (built-in registry if omitted)
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Only reconcile these careers (repeatable; all registry careers if omitted)
        #[arg(long = "career")]
        career: Vec<String>,

        /// Leave ambiguous abilities unresolved instead of prompting
        #[arg(long)]
        no_prompt: bool,
    },

    /// Write canonical ability records as JSON
    Dump {
        /// Directory containing the extracted dumps
        #[arg(short, long)]
        dumps: PathBuf,

        /// Ability id(s) to dump (repeatable or comma-separated)
        #[arg(short, long, required = true, value_delimiter = ',')]
        ability: Vec<u32>,

        /// Output directory for `<id>_<Name>.json` files (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List canonical abilities carrying a flag, with their component A07 values
    Flags {
        /// Directory containing the extracted dumps
        #[arg(short, long)]
        dumps: PathBuf,

        /// Flag name (e.g. flag13, requires_shield) or bit mask (e.g. 0x2000)
        #[arg(short, long)]
        flag: FlagArg,
    },

    /// Show canonical dataset statistics
    Stats {
        /// Directory containing the extracted dumps
        #[arg(short, long)]
        dumps: PathBuf,
    },

    /// List registered careers
    Careers {
        /// Career registry TOML (built-in registry if omitted)
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },
}
