//! Turn bookkeeping for a single-player session.

use serde::Serialize;
use tracing::{info, warn};

use crate::combat::{self, CombatOutcome};
use crate::dice::DiceSource;
use crate::error::CombatError;
use crate::mission::{Mission, MissionTracker};
use crate::territory::Map;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub turn: u32,
    pub outcome: CombatOutcome,
    pub mission_complete: bool,
}

/// Owns the board, the mission and the dice for one game.
#[derive(Debug)]
pub struct Session<D> {
    map: Map,
    tracker: MissionTracker,
    dice: D,
    turn: u32,
    complete: bool,
}

impl<D: DiceSource> Session<D> {
    pub fn new(map: Map, mission: Mission, dice: D) -> Self {
        Self {
            map,
            tracker: MissionTracker::new(mission),
            dice,
            turn: 1,
            complete: false,
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn mission(&self) -> &Mission {
        self.tracker.mission()
    }

    pub fn tracker(&self) -> &MissionTracker {
        &self.tracker
    }

    /// Number of the turn about to be played.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.complete
    }

    /// Plays one attack. A rejected attack does not use up the turn.
    pub fn play_turn(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> Result<TurnReport, CombatError> {
        let outcome = match combat::resolve(attacker, defender, &mut self.map, &mut self.dice) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(target: "war_core.session", turn = self.turn, %err, "attack rejected");
                return Err(err);
            }
        };

        self.tracker.record(&outcome, &self.map);
        self.complete = self.tracker.is_complete(&self.map);
        let report = TurnReport {
            turn: self.turn,
            outcome,
            mission_complete: self.complete,
        };
        info!(
            target: "war_core.session",
            turn = self.turn,
            mission_complete = self.complete,
            "turn finished"
        );
        self.turn += 1;
        Ok(report)
    }
}
