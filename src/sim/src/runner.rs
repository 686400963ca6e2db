//! Scenario execution

use crate::config::{ScenarioConfig, Step};
use anyhow::{Context, Result};
use harvest_contracts::Simulator;
use harvest_core::Response;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of a single step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub label: String,
    pub sender: String,
    pub block_height: u64,
    pub contract: String,
    pub method: String,
    pub response: Response,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Response>,
}

impl StepOutcome {
    /// A step without an expectation always passes
    pub fn passed(&self) -> bool {
        self.expected
            .as_ref()
            .map_or(true, |expected| expected == &self.response)
    }
}

/// Outcomes of a full scenario run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<StepOutcome>,
}

impl RunReport {
    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Drives a `Simulator` through the steps of a scenario
pub struct ScenarioRunner {
    sim: Simulator,
}

impl ScenarioRunner {
    /// Deploy fresh registries as described by the scenario's `[simulator]` section
    pub fn new(config: &ScenarioConfig) -> Self {
        Self {
            sim: Simulator::new(config.simulator.owner.as_str(), config.simulator.block_height),
        }
    }

    pub fn simulator(&self) -> &Simulator {
        &self.sim
    }

    /// Execute one step
    ///
    /// A dispatch fault (unknown contract or method, malformed arguments)
    /// is returned as an error; a business-rule rejection is a normal
    /// `Response::Err`.
    pub fn run_step(&mut self, index: usize, step: &Step) -> Result<StepOutcome> {
        let label = step.label(index);

        if let Some(sender) = &step.sender {
            self.sim.set_sender(sender.as_str());
        }
        if let Some(height) = step.block_height {
            self.sim.set_block_height(height);
        }
        if let Some(blocks) = step.advance_blocks {
            self.sim.advance_blocks(blocks);
        }

        let response = self
            .sim
            .call(&step.contract, &step.method, &step.args)
            .with_context(|| format!("Step {} failed to dispatch", label))?;

        let context = self.sim.context();
        let outcome = StepOutcome {
            label,
            sender: context.sender.to_string(),
            block_height: context.block_height,
            contract: step.contract.clone(),
            method: step.method.clone(),
            response,
            expected: step.expect.clone(),
        };

        if outcome.passed() {
            debug!(step = %outcome.label, response = %outcome.response, "Step completed");
        } else {
            warn!(
                step = %outcome.label,
                response = %outcome.response,
                expected = ?outcome.expected,
                "Step did not match expectation"
            );
        }

        Ok(outcome)
    }

    /// Execute every step in order, stopping at the first dispatch fault
    pub fn run(&mut self, config: &ScenarioConfig) -> Result<RunReport> {
        let mut report = RunReport::default();

        for (index, step) in config.steps.iter().enumerate() {
            report.outcomes.push(self.run_step(index, step)?);
        }

        info!(
            steps = report.outcomes.len(),
            failures = report.failure_count(),
            "Scenario finished"
        );
        Ok(report)
    }
}
