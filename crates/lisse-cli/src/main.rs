//! Lisse CLI - synthesize and run low-pass filters from the command line.

mod commands;
mod preset;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lisse")]
#[command(author, version, about = "Low-pass filter synthesis CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a WAV file through a synthesized low-pass
    Process(commands::process::ProcessArgs),

    /// Print the step or impulse response of a configured filter as CSV
    Response(commands::response::ResponseArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Response(args) => commands::response::run(args),
    }
}
