use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use game_core::{Estimate, RunReport, Simulation, load_dungeon};
use log::info;
use serde::Serialize;
use troll_tools::console::{ConsoleInput, ConsoleNarrator};
use troll_tools::seed::{SeedChoice, clock_seed};

const PLAY_MAX_STEPS: u32 = 1000;
const TRIAL_MAX_STEPS: u32 = 10;

#[derive(Parser)]
#[command(author, version, about = "Supply details for Troll Treasure game.", long_about = None)]
struct Args {
    /// Dungeon file to load (.toml or .json)
    #[arg(short, long)]
    dungeon_file: PathBuf,
    /// Estimate outcome probabilities instead of playing one game
    #[arg(short, long)]
    probabilities: bool,
    #[arg(long, default_value_t = 10_000)]
    trials: u64,
    /// Step budget per game [default: 1000 when playing, 10 per trial]
    #[arg(long)]
    max_steps: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Print a JSON report instead of the narrated game
    #[arg(long)]
    json: bool,
    /// Wait for enter before the first turn
    #[arg(long)]
    start_prompt: bool,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn,troll_core=info")).init();

    let args = Args::parse();
    let seed = SeedChoice::from_flag(args.seed, clock_seed);
    if seed.was_drawn() {
        info!("seed {seed}");
    }

    let dungeon = load_dungeon(&args.dungeon_file, seed.value())
        .with_context(|| format!("Failed to load dungeon file: {}", args.dungeon_file.display()))?;
    let simulation = Simulation::new(dungeon);

    if args.probabilities {
        let max_steps = args.max_steps.unwrap_or(TRIAL_MAX_STEPS);
        let estimate = simulation
            .estimate_probabilities(args.trials, max_steps, seed.value())
            .context("Failed to estimate outcome probabilities")?;
        print_estimate(&estimate, args.json)
    } else {
        let max_steps = args.max_steps.unwrap_or(PLAY_MAX_STEPS);
        play(&simulation, max_steps, seed.value(), &args)
    }
}

fn play(simulation: &Simulation, max_steps: u32, seed: u64, args: &Args) -> Result<()> {
    let mut input = ConsoleInput::stdio();
    if args.json {
        let report = simulation.run_once(max_steps, seed, &mut input).context("Game aborted")?;
        return print_json(&report);
    }

    let mut narrator = ConsoleNarrator::new(io::stdout()).with_start_prompt(args.start_prompt);
    let report: RunReport = simulation
        .run_observed(max_steps, seed, &mut input, &mut narrator)
        .context("Game aborted")?;
    narrator.finish().context("Failed to write game narration")?;
    info!("finished after {} turns with {:?}", report.turns, report.outcome);
    Ok(())
}

fn print_estimate(estimate: &Estimate, json: bool) -> Result<()> {
    if json {
        return print_json(estimate);
    }
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "Outcome probabilities over {} trials (max {} steps, seed {}):",
        estimate.trials, estimate.max_steps, estimate.seed
    )?;
    writeln!(out, "  adventurer wins: {:.4}", estimate.probabilities.adventurer_wins)?;
    writeln!(out, "  troll wins:      {:.4}", estimate.probabilities.troll_wins)?;
    writeln!(out, "  stalemate:       {:.4}", estimate.probabilities.stalemate)?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}
