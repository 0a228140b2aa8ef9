use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::balances::PointBalance;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub balances: Vec<BalanceEntry>,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// Home airport code, e.g. "BOS". Empty means unset.
    #[serde(default)]
    pub home_airport: String,
    /// Destination free text applied when no --destination is given.
    #[serde(default)]
    pub default_destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub program: String,
    pub points: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_watch_interval_secs")]
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub home_airport: Option<String>,
    pub destination: Option<String>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/award-compass/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(home_airport) = overrides.home_airport {
            self.profile.home_airport = home_airport;
        }
        if let Some(destination) = overrides.destination {
            self.profile.default_destination = destination;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    /// Configured balances as engine input, stamped at load time.
    pub fn point_balances(&self) -> Vec<PointBalance> {
        self.balances
            .iter()
            .map(|entry| PointBalance::new(entry.program.clone(), entry.points))
            .collect()
    }

    pub fn home_airport(&self) -> String {
        self.profile.home_airport.trim().to_ascii_uppercase()
    }

    pub fn default_template() -> String {
        let template = r#"[profile]
home_airport = "BOS"
default_destination = ""

[watch]
interval_secs = 60

[[balances]]
program = "chase-ur"
points = 80000

[[balances]]
program = "bilt"
points = 25000
"#;
        template.to_string()
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_watch_interval_secs(),
        }
    }
}

fn default_watch_interval_secs() -> u64 {
    60
}
