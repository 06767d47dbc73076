use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "marisolat", version, about = "MariSolat prayer schedule CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current prayer, waktu and countdown for one instant
    Now(commands::now::NowArgs),
    /// Recompute once per second until interrupted
    Watch(commands::watch::WatchArgs),
    /// Last third of the night
    Night(commands::night::NightArgs),
    /// Qibla bearing and compass alignment
    Qibla(commands::qibla::QiblaArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Now(args) => commands::now::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Night(args) => commands::night::run(args),
        Commands::Qibla(args) => commands::qibla::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
