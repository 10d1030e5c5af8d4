use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::dice::SimulationParams;
use crate::mission::MissionCatalog;
use crate::objective::ObjectiveSpec;
use crate::territory::{Map, Territory};

const DEFAULT_PLAYER_FACTION: &str = "blue";
const DEFAULT_ENEMY_FACTION: &str = "red";

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub game: GameSection,
    #[serde(default)]
    pub territories: Option<Vec<Territory>>,
    #[serde(default)]
    pub missions: Option<Vec<ObjectiveSpec>>,
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

impl GameConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        let cfg: GameConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    /// Configured seed, else `WAR_SEED`, else the default.
    pub fn params(&self) -> SimulationParams {
        self.game
            .seed
            .map(SimulationParams::from_seed)
            .unwrap_or_else(SimulationParams::from_env)
    }

    pub fn player_faction(&self) -> &str {
        self.game
            .player_faction
            .as_deref()
            .unwrap_or(DEFAULT_PLAYER_FACTION)
    }

    pub fn enemy_faction(&self) -> &str {
        self.game
            .enemy_faction
            .as_deref()
            .unwrap_or(DEFAULT_ENEMY_FACTION)
    }

    /// Territories declared in the file, if any.
    pub fn map(&self) -> Option<Map> {
        self.territories.clone().map(Map::new)
    }

    /// Declared missions, or the standard catalog for the configured factions.
    pub fn catalog(&self) -> Result<MissionCatalog> {
        match &self.missions {
            Some(specs) => {
                let catalog = MissionCatalog::from_specs(specs.iter().cloned())?;
                if catalog.is_empty() {
                    anyhow::bail!("config declares an empty mission list");
                }
                Ok(catalog)
            }
            None => Ok(MissionCatalog::standard(
                self.player_faction(),
                self.enemy_faction(),
            )),
        }
    }

    pub fn trace_filter(&self) -> Option<&str> {
        self.telemetry
            .as_ref()
            .and_then(|t| t.trace_filter.as_deref())
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct GameSection {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub player_faction: Option<String>,
    #[serde(default)]
    pub enemy_faction: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub trace_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObjectiveError;
    use crate::mission::Mission;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = GameConfig::from_toml("").unwrap();
        assert_eq!("blue", cfg.player_faction());
        assert_eq!("red", cfg.enemy_faction());
        assert!(cfg.map().is_none());
        assert_eq!(5, cfg.catalog().unwrap().missions().len());
        assert!(cfg.trace_filter().is_none());
    }

    #[test]
    fn full_file_parses() {
        let cfg = GameConfig::from_toml(
            r#"
            [game]
            seed = 7
            player_faction = "azure"
            enemy_faction = "crimson"

            [[territories]]
            name = "North"
            faction = "azure"
            troops = 5

            [[territories]]
            name = "South"
            faction = "crimson"
            troops = 3

            [[missions]]
            rule = "hold_territories"
            faction = "azure"
            count = 2
            turns = 4

            [telemetry]
            trace_filter = "war_core=debug"
            "#,
        )
        .unwrap();

        assert_eq!(7, cfg.params().seed);
        let map = cfg.map().unwrap();
        assert_eq!(2, map.len());
        assert_eq!("South", map.get(1).unwrap().name());
        assert_eq!(
            vec![Mission::HoldTerritories {
                faction: "azure".into(),
                count: 2,
                turns: 4
            }],
            cfg.catalog().unwrap().missions().to_vec()
        );
        assert_eq!(Some("war_core=debug"), cfg.trace_filter());
    }

    #[test]
    fn unknown_mission_rule_is_an_error() {
        let cfg = GameConfig::from_toml(
            r#"
            [[missions]]
            rule = "conquer_the_world"
            faction = "blue"
            "#,
        )
        .unwrap();
        let err = cfg.catalog().unwrap_err();
        assert_eq!(
            Some(&ObjectiveError::UnknownObjective("conquer_the_world".into())),
            err.downcast_ref::<ObjectiveError>()
        );
    }

    #[test]
    fn negative_troops_are_rejected_at_parse_time() {
        let parsed = GameConfig::from_toml(
            r#"
            [[territories]]
            name = "North"
            faction = "blue"
            troops = -1
            "#,
        );
        assert!(parsed.is_err());
    }
}
