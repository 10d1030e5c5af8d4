//! Combat resolution between two territories.
//!
//! One die each side. A strictly higher attack roll conquers the defender,
//! which then holds half of the attacker's troops (the attacker keeps all of
//! its own). Anything else costs the attacker one troop, floored at zero.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dice::DiceSource;
use crate::error::CombatError;
use crate::territory::Map;

/// Everything a caller needs to print a battle report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub attacker: usize,
    pub defender: usize,
    pub attack_roll: u8,
    pub defense_roll: u8,
    pub conquered: bool,
    pub attacker_troops_after: u32,
    pub defender_troops_after: u32,
    pub defender_faction_after: String,
}

/// Checks that `attacker` may attack `defender` on `map`.
pub fn validate(attacker: usize, defender: usize, map: &Map) -> Result<(), CombatError> {
    let len = map.len();
    let attacking = map
        .get(attacker)
        .ok_or(CombatError::InvalidIndex { index: attacker, len })?;
    let defending = map
        .get(defender)
        .ok_or(CombatError::InvalidIndex { index: defender, len })?;

    if attacker == defender {
        return Err(CombatError::SelfAttack(attacker));
    }
    if attacking.faction() == defending.faction() {
        return Err(CombatError::SameFactionAttack {
            faction: attacking.faction().to_owned(),
        });
    }
    Ok(())
}

/// Resolves one attack. Only the two referenced territories are touched.
pub fn resolve<D>(
    attacker: usize,
    defender: usize,
    map: &mut Map,
    dice: &mut D,
) -> Result<CombatOutcome, CombatError>
where
    D: DiceSource + ?Sized,
{
    validate(attacker, defender, map)?;

    let attack_roll = dice.roll_d6();
    let defense_roll = dice.roll_d6();
    let conquered = attack_roll > defense_roll;

    let len = map.len();
    let missing = |index| CombatError::InvalidIndex { index, len };
    let (attacker_faction, attacker_troops) = {
        let attacking = map.get(attacker).ok_or_else(|| missing(attacker))?;
        (attacking.faction().to_owned(), attacking.troops())
    };

    if conquered {
        let defending = map.get_mut(defender).ok_or_else(|| missing(defender))?;
        defending.faction = attacker_faction;
        defending.troops = attacker_troops / 2;
    } else {
        let attacking = map.get_mut(attacker).ok_or_else(|| missing(attacker))?;
        attacking.troops = attacking.troops.saturating_sub(1);
    }

    let attacking = map.get(attacker).ok_or_else(|| missing(attacker))?;
    let defending = map.get(defender).ok_or_else(|| missing(defender))?;
    let outcome = CombatOutcome {
        attacker,
        defender,
        attack_roll,
        defense_roll,
        conquered,
        attacker_troops_after: attacking.troops(),
        defender_troops_after: defending.troops(),
        defender_faction_after: defending.faction().to_owned(),
    };

    info!(
        target: "war_core.combat",
        attacker = attacking.name(),
        defender = defending.name(),
        attack_roll,
        defense_roll,
        conquered,
        "battle resolved"
    );
    Ok(outcome)
}
