//! Scenario file loading and validation

use anyhow::{Context, Result};
use harvest_contracts::simulator::DEFAULT_BLOCK_HEIGHT;
use harvest_core::{Response, Value};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete scenario file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    pub simulator: SimulatorSection,

    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulatorSection {
    /// Deploying sender, becomes owner of both registries
    pub owner: String,
    #[serde(default = "default_block_height")]
    pub block_height: u64,
}

/// One contract call plus the context changes that precede it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Step {
    /// Label used in reports
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub block_height: Option<u64>,
    /// Applied after `block_height`
    #[serde(default)]
    pub advance_blocks: Option<u64>,
    pub contract: String,
    pub method: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub expect: Option<Response>,
}

impl Step {
    /// Human-readable label
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => format!("#{} {}", index + 1, name),
            None => format!("#{} {}::{}", index + 1, self.contract, self.method),
        }
    }
}

fn default_block_height() -> u64 { DEFAULT_BLOCK_HEIGHT }

impl ScenarioConfig {
    /// Load scenario from TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read scenario file {:?}", path.as_ref()))?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ScenarioConfig = toml::from_str(contents)
            .context("Failed to parse scenario file")?;

        Ok(config)
    }

    /// Validate scenario
    pub fn validate(&self) -> Result<()> {
        if self.simulator.owner.trim().is_empty() {
            anyhow::bail!("Simulator owner must not be empty");
        }

        for (index, step) in self.steps.iter().enumerate() {
            if step.contract.trim().is_empty() {
                anyhow::bail!("Step #{} has no contract", index + 1);
            }
            if step.method.trim().is_empty() {
                anyhow::bail!("Step #{} has no method", index + 1);
            }
            if let Some(sender) = &step.sender {
                if sender.trim().is_empty() {
                    anyhow::bail!("Step #{} sets an empty sender", index + 1);
                }
            }
        }

        Ok(())
    }
}
