// ABOUTME: Entry point for the respec CLI application.
// ABOUTME: Parses arguments and dispatches to derive or convert.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, Format};
use respec::derive::derive_spec;
use respec::error::Result;
use respec::model::ContainerDetails;
use respec::runtime::{EngineClient, RuntimeConfig, detect_local};
use respec::spec::ContainerSpec;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let details = match cli.command {
        Commands::Derive { container, socket } => inspect_live(&container, socket).await?,
        Commands::Convert { input } => read_report(&input)?,
    };

    let spec = derive_spec(&details)?;
    print_spec(&spec, cli.format)
}

/// Connect to the local engine and fetch the inspect report.
async fn inspect_live(container: &str, socket: Option<String>) -> Result<ContainerDetails> {
    let config = RuntimeConfig {
        runtime: None,
        socket,
    };
    let info = detect_local(Some(&config))?;
    tracing::debug!("using {} at {}", info.runtime_type, info.socket_path);

    let client = EngineClient::connect(&info)?;
    Ok(client.inspect(container).await?)
}

/// Read an inspect report from a file or stdin.
fn read_report(input: &str) -> Result<ContainerDetails> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    Ok(ContainerDetails::from_json(&json)?)
}

fn print_spec(spec: &ContainerSpec, format: Format) -> Result<()> {
    match format {
        Format::Yaml => print!("{}", spec.to_yaml()?),
        Format::Json => println!("{}", spec.to_json()?),
    }
    Ok(())
}
