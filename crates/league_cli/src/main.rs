//! League CLI
//!
//! Generates a field, prints the schedule and plays a round-robin group.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use league_core::{
    FixtureGenerator, GenerationType, LeagueConfig, MatchSimulator, SimulationStats, Team,
    TeamGenerator, Tournament,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Round-robin group stage simulator", long_about = None)]
#[command(version = league_core::VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and list a field of teams
    Teams {
        #[arg(long, default_value_t = 4)]
        count: usize,

        /// mixed, world-class, excellent or good
        #[arg(long, default_value = "mixed")]
        tier: GenerationType,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Print the round-by-round schedule for a generated field
    Schedule {
        #[arg(long, default_value_t = 4)]
        count: usize,

        #[arg(long, default_value = "mixed")]
        tier: GenerationType,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Play a full group and print results, table and statistics
    Run {
        #[arg(long, default_value_t = 4)]
        count: usize,

        #[arg(long, default_value = "mixed")]
        tier: GenerationType,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// YAML or JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the table after every round
        #[arg(long, default_value = "false")]
        step: bool,
    },

    /// Run a JSON tournament request
    Json {
        /// Request JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Response JSON file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Teams { count, tier, seed } => {
            let teams = generate(count, tier, &mut ChaCha8Rng::seed_from_u64(seed))?;
            print!("{}", render::teams_table(&teams));
        }

        Commands::Schedule { count, tier, seed } => {
            let teams = generate(count, tier, &mut ChaCha8Rng::seed_from_u64(seed))?;
            let fixtures = FixtureGenerator::default()
                .generate(&teams)
                .context("Failed to build schedule")?;
            print!("{}", render::schedule(&fixtures, &teams));
        }

        Commands::Run { count, tier, seed, config, step } => {
            let config = match config {
                Some(path) => LeagueConfig::from_path(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => LeagueConfig::default(),
            };
            run(count, tier, seed, &config, step)?;
        }

        Commands::Json { r#in, out } => {
            log::info!("reading request {}", r#in.display());
            let request = std::fs::read_to_string(&r#in)
                .with_context(|| format!("Failed to read {}", r#in.display()))?;
            let response = league_core::simulate_tournament_json(&request)
                .context("Tournament request failed")?;

            match out {
                Some(path) => {
                    std::fs::write(&path, response)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Response written to {}", path.display());
                }
                None => println!("{}", response),
            }
        }
    }

    Ok(())
}

fn generate(count: usize, tier: GenerationType, rng: &mut ChaCha8Rng) -> Result<Vec<Team>> {
    log::debug!("generating {} {} teams", count, tier);
    TeamGenerator::generate(count, tier, rng)
        .with_context(|| format!("Failed to generate {} {} teams", count, tier))
}

fn run(
    count: usize,
    tier: GenerationType,
    seed: u64,
    config: &LeagueConfig,
    step: bool,
) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let teams = generate(count, tier, &mut rng)?;

    let mut tournament = Tournament::new(config.tournament.clone());
    tournament.initialize(teams).context("Failed to start tournament")?;
    let simulator =
        MatchSimulator::new(config.simulation.clone()).context("Invalid simulation config")?;
    log::info!("running {} {} teams with seed {}", count, tier, seed);

    print!("{}", render::teams_table(tournament.teams()));

    while tournament.has_more_fixtures() {
        let round = tournament.current_round();
        log::debug!("playing round {}/{}", round, tournament.total_rounds());
        println!("\nRound {}/{}", round, tournament.total_rounds());
        for m in tournament.play_round(&simulator, &mut rng)? {
            println!("  {}", render::match_line(&m, tournament.teams()));
        }
        if step {
            print!("{}", render::standings_table(&tournament.current_table(), tournament.teams()));
        }
    }

    let table = tournament.current_table();
    println!("\nFinal table");
    print!("{}", render::standings_table(&table, tournament.teams()));

    println!("\nQualification");
    let statuses = tournament.qualification();
    print!("{}", render::qualification(&statuses, tournament.teams()));

    println!();
    print!("{}", render::stats(&SimulationStats::from_table(&table)));
    Ok(())
}
