//! Random sources for combat. Every roll goes through [`DiceSource`] so a
//! session can be replayed from its seed or from a fixed script.

use rand::{rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 42;
const DIE_FACES: u8 = 6;

/// Anything that can throw a six-sided die.
pub trait DiceSource {
    /// Returns a value in `1..=6`.
    fn roll_d6(&mut self) -> u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationParams {
    pub seed: u64,
}

impl SimulationParams {
    pub fn from_env() -> Self {
        let seed = std::env::var("WAR_SEED")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        Self { seed }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// Seeded generator used for dice and for the mission draw.
#[derive(Debug, Clone)]
pub struct SimulationRng {
    seed: u64,
    rng: StdRng,
}

impl SimulationRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl From<SimulationParams> for SimulationRng {
    fn from(params: SimulationParams) -> Self {
        Self::new(params.seed)
    }
}

impl DiceSource for SimulationRng {
    fn roll_d6(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of rolls, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Returns `None` for an empty script or a face outside `1..=6`.
    pub fn new(rolls: impl Into<Vec<u8>>) -> Option<Self> {
        let rolls = rolls.into();
        if rolls.is_empty() || rolls.iter().any(|r| !(1..=DIE_FACES).contains(r)) {
            return None;
        }
        Some(Self { rolls, cursor: 0 })
    }

    /// Number of rolls handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_d6(&mut self) -> u8 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}
