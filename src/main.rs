use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use namechain::config::{CONFIG_FILE, Config};
use namechain::search::SearchMode;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "namechain")]
#[command(about = "Find chains and loops of names where each last name is the next first name")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./namechain.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for chains or loops of each length in a range
    Search {
        /// JSON array of names
        #[arg(long)]
        input: Option<PathBuf>,

        /// "chain" or "loop"
        #[arg(long)]
        mode: Option<SearchMode>,

        /// Shortest length to search
        #[arg(long)]
        min: Option<usize>,

        /// Longest length to search
        #[arg(long)]
        max: Option<usize>,

        /// Maximum results per length
        #[arg(long)]
        per_length: Option<usize>,

        /// Only start from names with both incoming and outgoing links
        #[arg(long)]
        connected_only: bool,

        /// Search lengths concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// Filter and lowercase a raw name list
    Clean {
        /// Raw JSON array of names
        input: PathBuf,

        /// Where to write the cleaned list
        output: PathBuf,

        /// Keep only names with exactly two parts
        #[arg(long)]
        strict: bool,
    },

    /// Count first letters across yearly name-count files
    Letters {
        /// Directory containing yob*.txt files
        data_dir: PathBuf,

        /// Where to write normalized frequencies
        output: PathBuf,
    },

    /// Show graph statistics for a name list
    Stats {
        /// JSON array of names
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&PathBuf::from(CONFIG_FILE))?,
    };

    match cli.command {
        Commands::Search {
            input,
            mode,
            min,
            max,
            per_length,
            connected_only,
            parallel,
        } => {
            let config = Config {
                input: input.unwrap_or(config.input),
                mode: mode.unwrap_or(config.mode),
                min_length: min.unwrap_or(config.min_length),
                max_length: max.unwrap_or(config.max_length),
                max_per_length: per_length.unwrap_or(config.max_per_length),
                connected_only: connected_only || config.connected_only,
                parallel: parallel || config.parallel,
                ..config
            };
            commands::search::run(&config, cli.json)
        }
        Commands::Clean {
            input,
            output,
            strict,
        } => commands::clean::run(&input, &output, strict || config.strict, cli.json),
        Commands::Letters { data_dir, output } => {
            commands::letters::run(&data_dir, &output, cli.json)
        }
        Commands::Stats { input } => {
            commands::stats::run(&input.unwrap_or(config.input), cli.json)
        }
    }
}
