use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "signage-cli", version, about = "Signage schedule tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a schedule source loads and normalizes cleanly
    Validate {
        #[command(flatten)]
        source: commands::SourceArgs,
    },
    /// Print the normalized schedule as JSON
    Show {
        #[command(flatten)]
        source: commands::SourceArgs,
    },
    /// Resolve which event and item are on screen at an instant
    Resolve {
        #[command(flatten)]
        source: commands::SourceArgs,
        /// Time of day to resolve, HH:MM or HH:MM:SS (default: now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Run the refresh and resolution loops, printing each item change
    Watch {
        #[command(flatten)]
        source: commands::SourceArgs,
        /// Seconds between schedule source reloads
        #[arg(long)]
        refresh_secs: Option<u64>,
        /// Seconds between resolution ticks
        #[arg(long)]
        tick_secs: Option<u64>,
        /// Optional TOML settings file supplying defaults for the above
        #[arg(long)]
        settings: Option<std::path::PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Validate { source } => commands::validate::run(source),
        Commands::Show { source } => commands::show::run(source),
        Commands::Resolve { source, at } => commands::resolve::run(source, at),
        Commands::Watch {
            source,
            refresh_secs,
            tick_secs,
            settings,
        } => commands::watch::run(source, refresh_secs, tick_secs, settings),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
