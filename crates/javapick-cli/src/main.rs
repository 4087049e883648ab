use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod dispatch;
mod render;

use dispatch::run_cli;

#[derive(Parser, Debug)]
#[command(name = "javapick")]
#[command(about = "Pick a Java runtime for a Minecraft server", long_about = None)]
struct Cli {
    /// TOML requirement table; the built-in Minecraft table is used otherwise.
    #[arg(long, global = true)]
    requirements: Option<PathBuf>,
    /// Overrides the table's fallback for unknown targets.
    #[arg(long, global = true)]
    default_java: Option<u32>,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Required {
        target: String,
    },
    Resolve {
        target: String,
        #[arg(long)]
        installations: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Classify {
        version: String,
        #[arg(long)]
        required: u32,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run_cli(cli)
}
