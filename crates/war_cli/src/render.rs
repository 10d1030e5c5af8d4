use war_core::{evaluate, CombatOutcome, Map, Mission, MissionTracker, Reason, Territory};

pub fn map_table(map: &Map) -> String {
    let mut out = String::from("=== CURRENT MAP ===\n");
    for (i, territory) in map.iter().enumerate() {
        out.push_str(&format!(
            "[{i}] {} | Faction: {} | Troops: {}\n",
            territory.name(),
            territory.faction(),
            territory.troops()
        ));
    }
    out
}

pub fn battle_report(outcome: &CombatOutcome, map: &Map) -> String {
    let name = |index| map.get(index).map(Territory::name).unwrap_or("?");
    let result = if outcome.conquered {
        format!(
            "Result: attacker wins! {} now belongs to {} with {} troops.",
            name(outcome.defender),
            outcome.defender_faction_after,
            outcome.defender_troops_after
        )
    } else {
        format!(
            "Result: defender holds. {} is down to {} troops.",
            name(outcome.attacker),
            outcome.attacker_troops_after
        )
    };
    format!(
        "--- ATTACK ---\n{} attacks {}\nAttacker rolled: {}\nDefender rolled: {}\n{result}\n--------------",
        name(outcome.attacker),
        name(outcome.defender),
        outcome.attack_roll,
        outcome.defense_roll,
    )
}

/// One line on how far the player is from completing the mission.
pub fn mission_status(tracker: &MissionTracker, map: &Map) -> String {
    match tracker.mission() {
        Mission::Territorial { objective } => match evaluate(objective, map.as_slice()).reason {
            Reason::ThresholdReached { controlled, required }
            | Reason::BelowThreshold { controlled, required } => {
                format!("{controlled} of {required} territories held")
            }
            Reason::FactionEliminated => "faction eliminated".to_owned(),
            Reason::FactionRemaining { remaining } => format!("{remaining} territories left"),
            Reason::FullControl => "every territory held".to_owned(),
            Reason::Contested { foreign } => format!("{foreign} territories still foreign"),
            Reason::EmptyMap => "the map is empty".to_owned(),
        },
        Mission::FirstConquest { .. } => format!("{} conquests", tracker.conquests()),
        Mission::HoldTerritories { turns, .. } => {
            format!("held for {} of {turns} turns", tracker.hold_streak())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_territory() {
        let map = Map::new(vec![
            Territory::new("A", "red", 10),
            Territory::new("B", "blue", 4),
        ]);
        assert_eq!(
            "=== CURRENT MAP ===\n[0] A | Faction: red | Troops: 10\n[1] B | Faction: blue | Troops: 4\n",
            map_table(&map)
        );
    }

    #[test]
    fn status_explains_the_evaluation() {
        let map = Map::new(vec![
            Territory::new("A", "red", 10),
            Territory::new("B", "blue", 4),
            Territory::new("C", "red", 2),
        ]);
        let eliminate = MissionTracker::new(Mission::from(war_core::Objective::EliminateFaction {
            faction: "red".into(),
        }));
        assert_eq!("2 territories left", mission_status(&eliminate, &map));

        let hold = MissionTracker::new(Mission::HoldTerritories {
            faction: "blue".into(),
            count: 2,
            turns: 3,
        });
        assert_eq!("held for 0 of 3 turns", mission_status(&hold, &map));
    }

    #[test]
    fn report_names_the_new_owner() {
        let map = Map::new(vec![
            Territory::new("A", "blue", 2),
            Territory::new("B", "blue", 4),
        ]);
        let outcome = CombatOutcome {
            attacker: 1,
            defender: 0,
            attack_roll: 6,
            defense_roll: 1,
            conquered: true,
            attacker_troops_after: 4,
            defender_troops_after: 2,
            defender_faction_after: "blue".into(),
        };
        let report = battle_report(&outcome, &map);
        assert!(report.starts_with(
            "--- ATTACK ---\nB attacks A\nAttacker rolled: 6\nDefender rolled: 1\n"
        ));
        assert!(report.ends_with("troops.\n--------------"));
        assert!(report.contains("A now belongs to blue with 2 troops"));
    }
}
