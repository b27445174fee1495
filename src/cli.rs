use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_MAPPING_FILE;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "cfpx",
    about = "Launch the command described in argmap.toml, or <cmd> when invoked as <cmd>-proxy"
)]
pub struct Cli {
    /// Path to the TOML-formatted argument mapping file
    #[arg(short = 'm', long = "mapping", default_value = DEFAULT_MAPPING_FILE)]
    pub mapping: PathBuf,

    /// Exit (code 5) when the mapping file cannot be decoded instead of continuing without it
    #[arg(long)]
    pub strict: bool,

    /// Wait for the command and exit with its status
    #[arg(long)]
    pub wait: bool,

    /// Print the resolved command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Extra arguments, appended after command.args
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
