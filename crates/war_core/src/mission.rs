//! Secret missions drawn at the start of a session.
//!
//! Most missions are plain [`Objective`]s. Two depend on what happened during
//! the session rather than only on the board, so the [`MissionTracker`] keeps
//! the small amount of history they need.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::CombatOutcome;
use crate::dice::SimulationRng;
use crate::error::ObjectiveError;
use crate::objective::{self, Objective, ObjectiveSpec};
use crate::territory::Map;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mission", rename_all = "snake_case")]
pub enum Mission {
    Territorial { objective: Objective },
    /// Win any battle that hands a territory to `faction`.
    FirstConquest { faction: String },
    /// Keep at least `count` territories for `turns` consecutive turns.
    HoldTerritories {
        faction: String,
        count: usize,
        turns: u32,
    },
}

impl Mission {
    pub fn faction(&self) -> &str {
        match self {
            Mission::Territorial { objective } => objective.faction(),
            Mission::FirstConquest { faction } | Mission::HoldTerritories { faction, .. } => faction,
        }
    }
}

impl From<Objective> for Mission {
    fn from(objective: Objective) -> Self {
        Mission::Territorial { objective }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mission::Territorial { objective } => write!(f, "{objective}"),
            Mission::FirstConquest { faction } => {
                write!(f, "Conquer any enemy territory for the {faction} army")
            }
            Mission::HoldTerritories {
                faction,
                count,
                turns,
            } => write!(
                f,
                "Hold at least {count} {faction} territories for {turns} turns in a row"
            ),
        }
    }
}

impl TryFrom<ObjectiveSpec> for Mission {
    type Error = ObjectiveError;

    fn try_from(spec: ObjectiveSpec) -> Result<Self, Self::Error> {
        let rule = spec.rule.clone();
        let missing = |parameter| ObjectiveError::MissingParameter {
            rule: rule.clone(),
            parameter,
        };
        match rule.as_str() {
            "first_conquest" => Ok(Mission::FirstConquest {
                faction: spec.faction.clone().ok_or_else(|| missing("faction"))?,
            }),
            "hold_territories" => Ok(Mission::HoldTerritories {
                faction: spec.faction.clone().ok_or_else(|| missing("faction"))?,
                count: spec.count.ok_or_else(|| missing("count"))?,
                turns: spec.turns.ok_or_else(|| missing("turns"))?,
            }),
            _ => Objective::try_from(spec).map(Mission::from),
        }
    }
}

/// Fixed list of missions a session draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionCatalog {
    missions: Vec<Mission>,
}

impl MissionCatalog {
    pub fn new(missions: Vec<Mission>) -> Self {
        Self { missions }
    }

    /// The classic five missions for `player` against `enemy`.
    pub fn standard(player: &str, enemy: &str) -> Self {
        Self::new(vec![
            Objective::ConquerCount {
                faction: player.to_owned(),
                count: 3,
            }
            .into(),
            Objective::EliminateFaction {
                faction: enemy.to_owned(),
            }
            .into(),
            Objective::DominateAll {
                faction: player.to_owned(),
            }
            .into(),
            Mission::FirstConquest {
                faction: player.to_owned(),
            },
            Mission::HoldTerritories {
                faction: player.to_owned(),
                count: 2,
                turns: 3,
            },
        ])
    }

    pub fn from_specs(
        specs: impl IntoIterator<Item = ObjectiveSpec>,
    ) -> Result<Self, ObjectiveError> {
        let missions = specs
            .into_iter()
            .map(Mission::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(missions))
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Uniform draw; `None` when the catalog is empty.
    pub fn draw(&self, rng: &mut SimulationRng) -> Option<Mission> {
        if self.missions.is_empty() {
            return None;
        }
        let index = rng.gen_index(self.missions.len());
        self.missions.get(index).cloned()
    }
}

/// Follows one mission through a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionTracker {
    mission: Mission,
    conquests: u32,
    hold_streak: u32,
}

impl MissionTracker {
    pub fn new(mission: Mission) -> Self {
        Self {
            mission,
            conquests: 0,
            hold_streak: 0,
        }
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn conquests(&self) -> u32 {
        self.conquests
    }

    pub fn hold_streak(&self) -> u32 {
        self.hold_streak
    }

    /// Call once after every resolved battle, with the board as it stands after it.
    pub fn record(&mut self, outcome: &CombatOutcome, map: &Map) {
        let faction = self.mission.faction();
        if outcome.conquered && outcome.defender_faction_after == faction {
            self.conquests += 1;
        }
        if let Mission::HoldTerritories { faction, count, .. } = &self.mission {
            if map.count_faction(faction) >= *count {
                self.hold_streak += 1;
            } else {
                self.hold_streak = 0;
            }
        }
        debug!(
            target: "war_core.mission",
            conquests = self.conquests,
            hold_streak = self.hold_streak,
            "mission progress"
        );
    }

    pub fn is_complete(&self, map: &Map) -> bool {
        match &self.mission {
            Mission::Territorial { objective } => {
                objective::is_satisfied(objective, map.as_slice())
            }
            Mission::FirstConquest { .. } => self.conquests > 0,
            Mission::HoldTerritories { turns, .. } => self.hold_streak >= *turns,
        }
    }
}
