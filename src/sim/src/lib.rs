//! Harvest Scenario Runner
//!
//! Replays TOML scenarios against the simulated registries: each step may
//! change the sender or block height, then calls a contract method and
//! optionally compares the response with an expected one.

pub mod config;
pub mod runner;

pub use config::ScenarioConfig;
pub use runner::{RunReport, ScenarioRunner, StepOutcome};
