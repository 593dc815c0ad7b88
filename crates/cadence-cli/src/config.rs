use cadence_core::expand::ExpansionConfig;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Where the JSON task store lives.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    #[serde(default)]
    pub expansion: ExpansionSettings,
}

/// Configuration for recurring-task expansion
#[derive(Deserialize, Debug)]
pub struct ExpansionSettings {
    /// Default generation horizon in days
    pub horizon_days: i64,
    /// Hard ceiling on expansion loop iterations per rule
    pub max_iterations: u32,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("cadence.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            expansion: ExpansionSettings::default(),
        }
    }
}

impl Default for ExpansionSettings {
    fn default() -> Self {
        let core = ExpansionConfig::default();
        Self {
            horizon_days: core.horizon_days,
            max_iterations: core.max_iterations,
        }
    }
}

impl ExpansionSettings {
    pub fn to_core(&self) -> ExpansionConfig {
        ExpansionConfig {
            horizon_days: self.horizon_days,
            max_iterations: self.max_iterations,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("cadence.toml"))
            .merge(Env::prefixed("CADENCE_").split("__"))
            .extract()
    }
}
