//! Simulation driver: single runs to an outcome or step budget, and Monte-Carlo batches.
//!
//! Every run works on its own clone of the dungeon, reseeded for that run, so repeated
//! runs and parallel trials never share agent state.

use std::error::Error;
use std::fmt;

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::agent::{InputProvider, Unattended};
use crate::dungeon::{Dungeon, DungeonError};
use crate::types::{LogEvent, Outcome};

mod seed;

pub use seed::trial_seed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulationError {
    NoTrials,
    /// Batches run unattended, so interactive agents cannot take part.
    RequiresInput { agent: String },
    Dungeon(DungeonError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTrials => write!(f, "at least one trial is required"),
            Self::RequiresInput { agent } => {
                write!(f, "{agent} needs interactive input and cannot be simulated in batch")
            }
            Self::Dungeon(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dungeon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DungeonError> for SimulationError {
    fn from(e: DungeonError) -> Self {
        Self::Dungeon(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub outcome: Outcome,
    /// Number of `update` calls performed.
    pub turns: u32,
    pub seed: u64,
    pub final_snapshot_hash: u64,
}

/// Output sink for observed runs. Every hook defaults to doing nothing.
pub trait RunObserver {
    /// Whether the dungeon should collect [`LogEvent`]s for [`RunObserver::on_update`].
    fn wants_log(&self) -> bool {
        true
    }

    fn on_start(&mut self, _dungeon: &Dungeon) {}

    /// Called before each update with the 1-based turn number.
    fn on_turn(&mut self, _turn: u32, _dungeon: &Dungeon) {}

    fn on_update(&mut self, _dungeon: &Dungeon, _events: &[LogEvent]) {}

    fn on_finish(&mut self, _dungeon: &Dungeon, _report: &RunReport) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl RunObserver for Silent {
    fn wants_log(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeTally {
    pub adventurer_wins: u64,
    pub troll_wins: u64,
    pub stalemates: u64,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::AdventurerWins => self.adventurer_wins += 1,
            Outcome::TrollWins => self.troll_wins += 1,
            Outcome::Ongoing => self.stalemates += 1,
        }
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::AdventurerWins => self.adventurer_wins,
            Outcome::TrollWins => self.troll_wins,
            Outcome::Ongoing => self.stalemates,
        }
    }

    pub fn total(&self) -> u64 {
        self.adventurer_wins + self.troll_wins + self.stalemates
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            adventurer_wins: self.adventurer_wins + other.adventurer_wins,
            troll_wins: self.troll_wins + other.troll_wins,
            stalemates: self.stalemates + other.stalemates,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Probabilities {
    pub adventurer_wins: f64,
    pub troll_wins: f64,
    pub stalemate: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub trials: u64,
    pub max_steps: u32,
    pub seed: u64,
    pub tally: OutcomeTally,
    pub probabilities: Probabilities,
}

impl Estimate {
    fn from_tally(tally: OutcomeTally, max_steps: u32, seed: u64) -> Self {
        let trials = tally.total();
        let frequency = |count: u64| count as f64 / trials as f64;
        Self {
            trials,
            max_steps,
            seed,
            tally,
            probabilities: Probabilities {
                adventurer_wins: frequency(tally.adventurer_wins),
                troll_wins: frequency(tally.troll_wins),
                stalemate: frequency(tally.stalemates),
            },
        }
    }

    pub fn probability(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::AdventurerWins => self.probabilities.adventurer_wins,
            Outcome::TrollWins => self.probabilities.troll_wins,
            Outcome::Ongoing => self.probabilities.stalemate,
        }
    }
}

#[derive(Clone)]
pub struct Simulation {
    dungeon: Dungeon,
}

impl Simulation {
    pub fn new(dungeon: Dungeon) -> Self {
        Self { dungeon }
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// Runs one silent game. Returns [`Outcome::Ongoing`] when `max_steps` checks pass
    /// without a winner.
    pub fn run_once(
        &self,
        max_steps: u32,
        seed: u64,
        input: &mut dyn InputProvider,
    ) -> Result<RunReport, DungeonError> {
        self.run_observed(max_steps, seed, input, &mut Silent)
    }

    pub fn run_observed(
        &self,
        max_steps: u32,
        seed: u64,
        input: &mut dyn InputProvider,
        observer: &mut dyn RunObserver,
    ) -> Result<RunReport, DungeonError> {
        let mut dungeon = self.dungeon.clone();
        dungeon.reseed(seed);
        dungeon.set_verbose(observer.wants_log());
        observer.on_start(&dungeon);

        let mut outcome = Outcome::Ongoing;
        let mut turns = 0;
        while turns < max_steps {
            outcome = dungeon.outcome();
            if outcome.is_terminal() {
                break;
            }
            observer.on_turn(turns + 1, &dungeon);
            dungeon.update(input)?;
            turns += 1;
            let events = dungeon.take_log();
            observer.on_update(&dungeon, &events);
        }

        let report =
            RunReport { outcome, turns, seed, final_snapshot_hash: dungeon.snapshot_hash() };
        observer.on_finish(&dungeon, &report);
        Ok(report)
    }

    /// Runs `trials` independent games in parallel and reports outcome frequencies.
    ///
    /// Trial `i` is seeded with [`trial_seed`]`(seed, i)`, so the estimate depends only on
    /// the arguments, not on how the work was split across threads.
    pub fn estimate_probabilities(
        &self,
        trials: u64,
        max_steps: u32,
        seed: u64,
    ) -> Result<Estimate, SimulationError> {
        if trials == 0 {
            return Err(SimulationError::NoTrials);
        }
        if let Some(agent) = self.dungeon.needs_input() {
            return Err(SimulationError::RequiresInput { agent: agent.name.clone() });
        }
        info!("estimating outcomes over {trials} trials of at most {max_steps} steps");

        let tally = (0..trials)
            .into_par_iter()
            .map(|trial| {
                self.run_once(max_steps, trial_seed(seed, trial), &mut Unattended)
                    .map(|report| report.outcome)
            })
            .try_fold(OutcomeTally::default, |mut tally, outcome| {
                tally.record(outcome?);
                Ok::<_, DungeonError>(tally)
            })
            .try_reduce(OutcomeTally::default, |left, right| Ok(left.merge(right)))?;

        debug!("tally {tally:?}");
        Ok(Estimate::from_tally(tally, max_steps, seed))
    }
}

#[cfg(test)]
mod tests;
