// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "respec")]
#[command(about = "Derive re-creatable launch specs from live Docker and Podman containers")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output encoding for the derived spec
    #[arg(long, value_enum, default_value_t = Format::Yaml, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a running container and derive its launch spec
    Derive {
        /// Container name or id
        container: String,

        /// Explicit runtime socket path (overrides auto-detection)
        #[arg(long)]
        socket: Option<String>,
    },

    /// Convert a saved inspect report to a launch spec
    Convert {
        /// Path to inspect JSON, or '-' for stdin
        #[arg(default_value = "-")]
        input: String,
    },
}
