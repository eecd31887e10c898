//! Seed selection for a game. `--seed` is used as given; otherwise one is drawn from the clock.

use std::fmt;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use game_core::simulation::trial_seed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Flag(u64),
    Drawn(u64),
}

impl SeedChoice {
    /// Falls back to `draw` only when no flag was passed.
    pub fn from_flag(flag: Option<u64>, draw: impl FnOnce() -> u64) -> Self {
        flag.map_or_else(|| Self::Drawn(draw()), Self::Flag)
    }

    pub fn value(self) -> u64 {
        match self {
            Self::Flag(seed) | Self::Drawn(seed) => seed,
        }
    }

    pub fn was_drawn(self) -> bool {
        matches!(self, Self::Drawn(_))
    }
}

impl fmt::Display for SeedChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(seed) => write!(f, "{seed} (from --seed)"),
            Self::Drawn(seed) => write!(f, "{seed} (drawn; pass --seed {seed} to replay)"),
        }
    }
}

static DRAWS: AtomicU64 = AtomicU64::new(0);

/// Clock and process id, scrambled through the same mixer that spreads trial seeds.
/// Successive draws in one process never repeat.
pub fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let draw = DRAWS.fetch_add(1, Ordering::Relaxed);
    trial_seed(nanos ^ (u64::from(process::id()) << 32), draw)
}
