use war_core::{is_satisfied, Objective, ScriptedDice};
use war_regression::{replay, skirmish_map};

#[test]
fn scripted_skirmish_matches_golden() {
    let mut dice = ScriptedDice::new(vec![6, 1]).expect("valid script");
    let trace = replay(skirmish_map(), &[(1, 0), (0, 2), (0, 1)], &mut dice);

    let eliminate_red = Objective::EliminateFaction {
        faction: "red".into(),
    };
    assert!(is_satisfied(&eliminate_red, trace.final_map.as_slice()));

    insta::assert_json_snapshot!(trace, @r###"
    {
      "steps": [
        {
          "kind": "battle",
          "outcome": {
            "attacker": 1,
            "defender": 0,
            "attack_roll": 6,
            "defense_roll": 1,
            "conquered": true,
            "attacker_troops_after": 4,
            "defender_troops_after": 2,
            "defender_faction_after": "blue"
          }
        },
        {
          "kind": "battle",
          "outcome": {
            "attacker": 0,
            "defender": 2,
            "attack_roll": 6,
            "defense_roll": 1,
            "conquered": true,
            "attacker_troops_after": 2,
            "defender_troops_after": 1,
            "defender_faction_after": "blue"
          }
        },
        {
          "kind": "rejected",
          "attacker": 0,
          "defender": 1,
          "reason": "cannot attack a territory of the same faction (blue)"
        }
      ],
      "final_map": [
        {
          "name": "A",
          "faction": "blue",
          "troops": 2
        },
        {
          "name": "B",
          "faction": "blue",
          "troops": 4
        },
        {
          "name": "C",
          "faction": "blue",
          "troops": 1
        }
      ]
    }
    "###);
}

#[test]
fn repelled_attack_matches_golden() {
    let mut dice = ScriptedDice::new(vec![2, 5]).expect("valid script");
    let trace = replay(skirmish_map(), &[(0, 1)], &mut dice);

    insta::assert_json_snapshot!(trace.steps, @r###"
    [
      {
        "kind": "battle",
        "outcome": {
          "attacker": 0,
          "defender": 1,
          "attack_roll": 2,
          "defense_roll": 5,
          "conquered": false,
          "attacker_troops_after": 9,
          "defender_troops_after": 4,
          "defender_faction_after": "blue"
        }
      }
    ]
    "###);
}
