use serde::{Deserialize, Serialize};

/// One contested region on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: String,
    pub(crate) faction: String,
    pub(crate) troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, faction: impl Into<String>, troops: u32) -> Self {
        Self {
            name: name.into(),
            faction: faction.into(),
            troops,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faction(&self) -> &str {
        &self.faction
    }

    pub fn troops(&self) -> u32 {
        self.troops
    }

    pub fn is_held_by(&self, faction: &str) -> bool {
        self.faction == faction
    }
}

/// Fixed-length, index-stable collection of territories for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map {
    territories: Vec<Territory>,
}

impl Map {
    pub fn new(territories: Vec<Territory>) -> Self {
        Self { territories }
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Territory> {
        self.territories.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }

    pub fn as_slice(&self) -> &[Territory] {
        &self.territories
    }

    pub fn count_faction(&self, faction: &str) -> usize {
        count_faction(&self.territories, faction)
    }

    /// Distinct factions in first-seen order.
    pub fn factions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for territory in &self.territories {
            if !seen.contains(&territory.faction()) {
                seen.push(territory.faction());
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a Territory;
    type IntoIter = std::slice::Iter<'a, Territory>;

    fn into_iter(self) -> Self::IntoIter {
        self.territories.iter()
    }
}

impl From<Vec<Territory>> for Map {
    fn from(territories: Vec<Territory>) -> Self {
        Self::new(territories)
    }
}

pub(crate) fn count_faction(territories: &[Territory], faction: &str) -> usize {
    territories.iter().filter(|t| t.is_held_by(faction)).count()
}
