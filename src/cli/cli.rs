use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Simulated directory tree driven by mkdir, cd, pwd and ls commands.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Commands to run, one per argument. Reads stdin when none are given
    pub commands: Vec<String>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// YAML file with limits and prompt settings
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Longest node name in bytes; longer names are cut
    #[clap(long)]
    pub name_limit: Option<NonZeroUsize>,

    /// Longest path in bytes; longer paths are cut
    #[clap(long)]
    pub path_limit: Option<NonZeroUsize>,

    /// Never color the output
    #[clap(long)]
    pub no_color: bool,
}
