//! Helpers for deterministic regression tests.

use serde::Serialize;
use war_core::{combat, DiceSource, Map, SimulationRng, Territory};

pub const DEFAULT_SEED: u64 = war_core::DEFAULT_SEED;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplayStep {
    Battle {
        outcome: war_core::CombatOutcome,
    },
    Rejected {
        attacker: usize,
        defender: usize,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replay {
    pub steps: Vec<ReplayStep>,
    pub final_map: Map,
}

/// Three territories, two factions: the smallest board with a bystander.
pub fn skirmish_map() -> Map {
    Map::new(vec![
        Territory::new("A", "red", 10),
        Territory::new("B", "blue", 4),
        Territory::new("C", "red", 2),
    ])
}

/// Plays `attacks` in order against `map`, recording rejected ones too.
pub fn replay<D: DiceSource>(mut map: Map, attacks: &[(usize, usize)], dice: &mut D) -> Replay {
    let steps = attacks
        .iter()
        .map(|&(attacker, defender)| match combat::resolve(attacker, defender, &mut map, dice) {
            Ok(outcome) => ReplayStep::Battle { outcome },
            Err(err) => ReplayStep::Rejected {
                attacker,
                defender,
                reason: err.to_string(),
            },
        })
        .collect();
    Replay {
        steps,
        final_map: map,
    }
}

pub fn seeded_replay(seed: u64, map: Map, attacks: &[(usize, usize)]) -> Replay {
    replay(map, attacks, &mut SimulationRng::new(seed))
}

/// Compact JSON trace, one line per replay.
pub fn replay_json(replay: &Replay) -> serde_json::Result<String> {
    serde_json::to_string(replay)
}
