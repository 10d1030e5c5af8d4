//! Rules engine for a single-player territory conquest game: combat between
//! territories, win-condition checks and the per-session bookkeeping around
//! them. Terminal I/O lives in `war_cli`.

pub mod combat;
pub mod config;
pub mod dice;
pub mod error;
pub mod mission;
pub mod objective;
pub mod session;
pub mod territory;

pub use combat::{resolve, CombatOutcome};
pub use config::GameConfig;
pub use dice::{DiceSource, ScriptedDice, SimulationParams, SimulationRng, DEFAULT_SEED};
pub use error::{CombatError, ObjectiveError};
pub use mission::{Mission, MissionCatalog, MissionTracker};
pub use objective::{evaluate, is_satisfied, Evaluation, Objective, ObjectiveSpec, Reason};
pub use session::{Session, TurnReport};
pub use territory::{Map, Territory};
