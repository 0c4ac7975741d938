//! Configuration - TOML file with per-section defaults

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::calibration::{MacroPolicy, NutritionTargets, Thresholds};
use crate::tree::TrainingMode;

pub const DEFAULT_CONFIG_PATH: &str = "calibra.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub athlete: AthleteConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
    #[serde(default)]
    pub readiness: Thresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TrainingConfig {
    #[serde(default)]
    pub mode: TrainingMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AthleteConfig {
    #[serde(default = "default_bodyweight_kg")]
    pub bodyweight_kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    #[serde(default)]
    pub policy: MacroPolicy,
    #[serde(default = "default_base_targets")]
    pub base: NutritionTargets,
}

fn default_db_path() -> String {
    "calibra.db".to_string()
}

fn default_bodyweight_kg() -> f64 {
    75.0
}

fn default_base_targets() -> NutritionTargets {
    NutritionTargets::new(2500, 180, 250, 70)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { db_path: default_db_path() }
    }
}

impl Default for AthleteConfig {
    fn default() -> Self {
        Self { bodyweight_kg: default_bodyweight_kg() }
    }
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            policy: MacroPolicy::default(),
            base: default_base_targets(),
        }
    }
}

impl Config {
    /// Load from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("invalid config: {}", path.display()))
    }

    /// Parse and check a TOML document
    pub fn parse(data: &str) -> Result<Self> {
        let config: Self = toml::from_str(data).context("failed parsing TOML config")?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if !self.readiness.is_valid() {
            bail!(
                "readiness thresholds must descend within 0-10 (intense {} > moderate {} > light {})",
                self.readiness.intense,
                self.readiness.moderate,
                self.readiness.light
            );
        }
        if !self.athlete.bodyweight_kg.is_finite() || self.athlete.bodyweight_kg <= 0.0 {
            bail!("athlete.bodyweight_kg must be positive, got {}", self.athlete.bodyweight_kg);
        }
        Ok(())
    }
}
