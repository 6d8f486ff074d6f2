use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use ttttrps_namegen::config::AppConfig;
use ttttrps_namegen::core::logging;
use ttttrps_namegen::core::name_gen::{CommandOutcome, FsSeedStore, NameCommand, SeedSelector};

/// Interpret name command arguments and load the matching seed lists.
#[derive(Parser, Debug)]
#[command(name = "ttttrps-namegen", version, about)]
struct Cli {
    /// Directory holding `{race}[.{gender}].json` seed files
    #[arg(long)]
    seed_dir: Option<PathBuf>,

    /// Fixed RNG seed for reproducible race/gender picks
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Print the full outcome as JSON
    #[arg(long)]
    json: bool,

    /// Also log to stdout
    #[arg(short, long)]
    verbose: bool,

    /// Command words, e.g. `half-elf girl 3`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (mut config, config_source) = AppConfig::load();
    if let Some(dir) = cli.seed_dir {
        config.seeds.seed_dir = Some(dir);
    }
    if let Some(seed) = cli.rng_seed {
        config.seeds.rng_seed = Some(seed);
    }
    config.logging.stdout |= cli.verbose;
    // Keep stdout clean for the JSON document
    config.logging.stderr |= cli.json;

    let _log_guard = logging::init(&config.logging, &config.log_dir());
    log::info!("{} v{} starting", ttttrps_namegen::NAME, ttttrps_namegen::VERSION);
    config_source.log();

    let store = FsSeedStore::new(config.seed_dir());
    let selector = match config.seeds.rng_seed {
        Some(seed) => SeedSelector::with_seed(store, seed),
        None => SeedSelector::new(store),
    };
    let mut command = NameCommand::new(selector);

    let outcome = command.run(&cli.args.join(" ")).await;

    if cli.json {
        let json = serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?;
        println!("{json}");
    } else {
        print_outcome(&outcome);
    }

    // Returning lets the log guard flush before exit
    if outcome.error().is_some() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_outcome(outcome: &CommandOutcome) {
    for line in outcome.message().lines() {
        println!("*{line}*");
    }

    if let Some(error) = outcome.error() {
        eprintln!("**{error}**");
        return;
    }

    let Some(selection) = &outcome.selection else {
        return;
    };
    if let (Some(race), Some(gender)) = (selection.selected_race, selection.selected_gender) {
        println!(
            "race: {}  gender: {}  names: {}",
            race, gender, outcome.request.name_count
        );
    }
    println!("given-name seeds: {}", selection.seeds.len());
    println!("surname seeds: {}", selection.surname_seeds.len());
}
