use anyhow::{Result, bail};
use clap::Parser;
use env_logger::{Builder, Env};
use game_core::{
    Dungeon, LogEvent, Outcome, OutcomeTally, RunObserver, RunReport, Simulation, Unattended,
    simulation::trial_seed,
};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use troll_tools::generate::random_blueprint;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of random dungeons to generate
    #[arg(short, long, default_value_t = 200)]
    dungeons: u64,
    #[arg(short, long, default_value_t = 1000)]
    max_steps: u32,
    #[arg(long, default_value_t = 6)]
    width: i32,
    #[arg(long, default_value_t = 5)]
    height: i32,
}

/// Checks every logged move against the room graph as the run unfolds.
#[derive(Default)]
struct Invariants {
    violations: Vec<String>,
}

impl RunObserver for Invariants {
    fn on_update(&mut self, dungeon: &Dungeon, events: &[LogEvent]) {
        let rooms = dungeon.rooms();
        for event in events {
            let agent = dungeon.agent(event.role());
            match *event {
                LogEvent::Moved { from, to, .. } if from == to && !agent.allow_wait => {
                    self.violations.push(format!("{} waited at {from}", agent.name));
                }
                LogEvent::Moved { from, to, .. } if from != to && !rooms.is_linked(from, to) => {
                    self.violations.push(format!("{} moved {from} -> {to}", agent.name));
                }
                LogEvent::Trapped { at, .. } if !rooms.links(at).is_empty() => {
                    self.violations.push(format!("{} trapped in linked room {at}", agent.name));
                }
                _ => {}
            }
            if !rooms.contains(agent.point) {
                self.violations.push(format!("{} left the dungeon", agent.name));
            }
        }
    }

    fn on_finish(&mut self, dungeon: &Dungeon, report: &RunReport) {
        if report.outcome.is_terminal() && report.outcome != dungeon.outcome() {
            self.violations.push(format!("reported {:?} for a different board", report.outcome));
        }
    }
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    println!(
        "Starting fuzz harness on seed {} for {} dungeons of max {} steps...",
        args.seed, args.dungeons, args.max_steps
    );

    let mut tally = OutcomeTally::default();
    for index in 0..args.dungeons {
        let dungeon_seed = trial_seed(args.seed, index);
        let mut rng = ChaCha8Rng::seed_from_u64(dungeon_seed);
        let blueprint = random_blueprint(&mut rng, args.width, args.height);
        let simulation = Simulation::new(blueprint.build(dungeon_seed)?);

        let mut invariants = Invariants::default();
        let report = simulation.run_observed(
            args.max_steps,
            dungeon_seed,
            &mut Unattended,
            &mut invariants,
        )?;
        if let Some(violation) = invariants.violations.first() {
            bail!("Invariant failed on dungeon seed {dungeon_seed}: {violation}");
        }
        if report.turns > args.max_steps {
            bail!("Invariant failed: {} turns exceed the budget", report.turns);
        }
        tally.record(report.outcome);
    }

    println!(
        "Fuzzing completed successfully: {} adventurer wins, {} troll wins, {} stalemates.",
        tally.count(Outcome::AdventurerWins),
        tally.count(Outcome::TrollWins),
        tally.count(Outcome::Ongoing)
    );
    Ok(())
}
