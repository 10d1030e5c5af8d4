//! Win conditions that can be read straight off the board.
//!
//! The evaluator is stateless: it re-derives the answer from the current
//! territories every time, so calling it after each turn is always safe.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ObjectiveError;
use crate::territory::{count_faction, Territory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Objective {
    /// Hold at least `count` territories with `faction`.
    ConquerCount { faction: String, count: usize },
    /// No territory may be held by `faction`.
    EliminateFaction { faction: String },
    /// Every territory must be held by `faction`.
    DominateAll { faction: String },
}

impl Objective {
    pub fn faction(&self) -> &str {
        match self {
            Objective::ConquerCount { faction, .. }
            | Objective::EliminateFaction { faction }
            | Objective::DominateAll { faction } => faction,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::ConquerCount { faction, count } => {
                write!(f, "Control {count} territories with the {faction} army")
            }
            Objective::EliminateFaction { faction } => {
                write!(f, "Eliminate every {faction} army from the map")
            }
            Objective::DominateAll { faction } => {
                write!(f, "Bring every territory under {faction} control")
            }
        }
    }
}

/// Why an objective is or is not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    ThresholdReached { controlled: usize, required: usize },
    BelowThreshold { controlled: usize, required: usize },
    FactionEliminated,
    FactionRemaining { remaining: usize },
    FullControl,
    Contested { foreign: usize },
    EmptyMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub satisfied: bool,
    pub reason: Reason,
}

pub fn evaluate(objective: &Objective, territories: &[Territory]) -> Evaluation {
    let (satisfied, reason) = match objective {
        Objective::ConquerCount { faction, count } => {
            let controlled = count_faction(territories, faction);
            if controlled >= *count {
                (
                    true,
                    Reason::ThresholdReached {
                        controlled,
                        required: *count,
                    },
                )
            } else {
                (
                    false,
                    Reason::BelowThreshold {
                        controlled,
                        required: *count,
                    },
                )
            }
        }
        Objective::EliminateFaction { .. } | Objective::DominateAll { .. }
            if territories.is_empty() =>
        {
            (true, Reason::EmptyMap)
        }
        Objective::EliminateFaction { faction } => match count_faction(territories, faction) {
            0 => (true, Reason::FactionEliminated),
            remaining => (false, Reason::FactionRemaining { remaining }),
        },
        Objective::DominateAll { faction } => {
            match territories.len() - count_faction(territories, faction) {
                0 => (true, Reason::FullControl),
                foreign => (false, Reason::Contested { foreign }),
            }
        }
    };
    Evaluation { satisfied, reason }
}

pub fn is_satisfied(objective: &Objective, territories: &[Territory]) -> bool {
    evaluate(objective, territories).satisfied
}

/// Loosely typed objective as written in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectiveSpec {
    pub rule: String,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub turns: Option<u32>,
}

impl TryFrom<ObjectiveSpec> for Objective {
    type Error = ObjectiveError;

    fn try_from(spec: ObjectiveSpec) -> Result<Self, Self::Error> {
        let ObjectiveSpec {
            rule,
            faction,
            count,
            ..
        } = spec;
        let missing = |parameter| ObjectiveError::MissingParameter {
            rule: rule.clone(),
            parameter,
        };
        match rule.as_str() {
            "conquer_count" => Ok(Objective::ConquerCount {
                faction: faction.ok_or_else(|| missing("faction"))?,
                count: count.ok_or_else(|| missing("count"))?,
            }),
            "eliminate_faction" => Ok(Objective::EliminateFaction {
                faction: faction.ok_or_else(|| missing("faction"))?,
            }),
            "dominate_all" => Ok(Objective::DominateAll {
                faction: faction.ok_or_else(|| missing("faction"))?,
            }),
            _ => Err(ObjectiveError::UnknownObjective(rule.clone())),
        }
    }
}
