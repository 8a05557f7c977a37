//! pbd2d CLI — run canned scenarios and inspect configuration.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pbd2d")]
#[command(version, about = "pbd2d — 2D XPBD deformable body simulator")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and report per-step statistics.
    Simulate {
        /// Scenario to run (see `pbd2d scenarios`).
        #[arg(short, long, default_value = "box_on_ground")]
        scenario: String,

        /// Path to a JSON simulation config; defaults are used if omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of world steps.
        #[arg(short = 'n', long, default_value_t = 120)]
        steps: u32,

        /// Write final body positions to this JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the default simulation config as JSON.
    Config,

    /// List the available scenarios.
    Scenarios,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let result = match cli.command {
        Commands::Simulate {
            scenario,
            config,
            steps,
            output,
        } => commands::simulate(&scenario, config.as_deref(), steps, output.as_deref()),
        Commands::Config => commands::print_config(),
        Commands::Scenarios => commands::list_scenarios(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
