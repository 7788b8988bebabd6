use crate::phishing::ScoringConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub simulation: SimulationConfig,
    pub statistics: Option<StatisticsConfig>,
}

/// Pacing for the animated demos. Zero disables the delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub encryption_tick_ms: u64,
    pub kill_chain_stage_ms: u64,
    pub terminal_scan_ms: u64,
    pub terminal_encrypt_ms: u64,
    pub network_step_ms: u64,
    pub assets_dir: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            encryption_tick_ms: 30,
            kill_chain_stage_ms: 800,
            terminal_scan_ms: 200,
            terminal_encrypt_ms: 250,
            network_step_ms: 700,
            assets_dir: "assets".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Same layout with every delay removed.
    pub fn instant() -> Self {
        Self {
            encryption_tick_ms: 0,
            kill_chain_stage_ms: 0,
            terminal_scan_ms: 0,
            terminal_encrypt_ms: 0,
            network_step_ms: 0,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsConfig {
    pub enabled: bool,
    pub database_path: String,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            database_path: "ransomshield.db".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Statistics settings, only when persistence is switched on.
    pub fn enabled_statistics(&self) -> Option<&StatisticsConfig> {
        self.statistics.as_ref().filter(|s| s.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
simulation:
  kill_chain_stage_ms: 10
scoring:
  max_score: 40
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.simulation.kill_chain_stage_ms, 10);
        assert_eq!(config.simulation.encryption_tick_ms, 30);
        assert_eq!(config.scoring.max_score, 40);
        assert_eq!(config.scoring.keyword_weights.get("urgent"), Some(&2));
        assert!(config.enabled_statistics().is_none());
    }

    #[test]
    fn test_instant_simulation_keeps_assets_dir() {
        let instant = SimulationConfig::instant();
        assert_eq!(instant.encryption_tick_ms, 0);
        assert_eq!(instant.kill_chain_stage_ms, 0);
        assert_eq!(instant.terminal_scan_ms, 0);
        assert_eq!(instant.terminal_encrypt_ms, 0);
        assert_eq!(instant.network_step_ms, 0);
        assert_eq!(instant.assets_dir, SimulationConfig::default().assets_dir);
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!(
            "ransomshield-config-{}.yaml",
            std::process::id()
        ));
        let path = path.to_str().unwrap();

        let mut config = Config::default();
        config.statistics = Some(StatisticsConfig {
            enabled: true,
            database_path: "/tmp/stats.db".to_string(),
        });
        config.to_file(path).unwrap();

        let loaded = Config::from_file(path).unwrap();
        assert_eq!(loaded.scoring, config.scoring);
        assert_eq!(
            loaded.enabled_statistics().map(|s| s.database_path.as_str()),
            Some("/tmp/stats.db")
        );
        std::fs::remove_file(path).unwrap();
    }
}
