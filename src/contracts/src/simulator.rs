//! Simulated chain harness
//!
//! Owns the execution context and both deployed registries. Tests and the
//! scenario runner set the sender and block height here, then issue calls
//! by contract and method name. Every call receives the context explicitly.

use crate::certification::{self, CertificationRegistry};
use crate::producer::{self, ProducerRegistry};
use harvest_core::{
    BlockHeight, Contract, DispatchError, ExecutionContext, Principal, Response, Value,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default starting block height
pub const DEFAULT_BLOCK_HEIGHT: BlockHeight = 100;

/// Sender/block-height harness with both registries deployed
#[derive(Debug, Clone)]
pub struct Simulator {
    context: ExecutionContext,
    producers: ProducerRegistry,
    certifications: CertificationRegistry,
}

/// Serializable view of the simulator state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorSnapshot {
    pub context: ExecutionContext,
    pub producers: ProducerRegistry,
    pub certifications: CertificationRegistry,
}

impl Simulator {
    /// Deploy both registries with `owner` as the deploying sender
    pub fn new<P: Into<Principal>>(owner: P, block_height: BlockHeight) -> Self {
        let context = ExecutionContext::new(owner, block_height);
        debug!(owner = %context.sender, block_height, "Deploying registries");

        Self {
            producers: ProducerRegistry::new(&context),
            certifications: CertificationRegistry::new(&context),
            context,
        }
    }

    pub fn set_sender<P: Into<Principal>>(&mut self, sender: P) {
        self.context.sender = sender.into();
        trace!(sender = %self.context.sender, "Sender changed");
    }

    pub fn set_block_height(&mut self, block_height: BlockHeight) {
        self.context.block_height = block_height;
        trace!(block_height, "Block height changed");
    }

    /// Move the chain forward by `blocks`
    pub fn advance_blocks(&mut self, blocks: BlockHeight) {
        self.set_block_height(self.context.block_height.saturating_add(blocks));
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    pub fn producers(&self) -> &ProducerRegistry {
        &self.producers
    }

    pub fn certifications(&self) -> &CertificationRegistry {
        &self.certifications
    }

    fn contract_mut(&mut self, name: &str) -> Result<&mut dyn Contract, DispatchError> {
        let contract: &mut dyn Contract = match name {
            producer::CONTRACT_NAME => &mut self.producers,
            certification::CONTRACT_NAME => &mut self.certifications,
            _ => return Err(DispatchError::unknown_contract(name)),
        };
        Ok(contract)
    }

    /// Call `method` on the named contract under the current context
    pub fn call(
        &mut self,
        contract: &str,
        method: &str,
        args: &[Value],
    ) -> Result<Response, DispatchError> {
        let context = self.context.clone();
        let response = self.contract_mut(contract)?.call(&context, method, args)?;
        debug!(contract, method, %response, "Call completed");
        Ok(response)
    }

    /// Deployed contracts and the methods each accepts
    pub fn contracts(&self) -> Vec<(&'static str, &'static [&'static str])> {
        vec![
            (self.producers.name(), self.producers.methods()),
            (self.certifications.name(), self.certifications.methods()),
        ]
    }

    pub fn snapshot(&self) -> SimulatorSnapshot {
        SimulatorSnapshot {
            context: self.context.clone(),
            producers: self.producers.clone(),
            certifications: self.certifications.clone(),
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new("ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5", DEFAULT_BLOCK_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_bound_at_deployment() {
        let mut sim = Simulator::new("owner", 100);
        sim.set_sender("someone-else");

        assert_eq!(sim.producers().owner(), &Principal::from("owner"));
        assert_eq!(sim.certifications().owner(), &Principal::from("owner"));
    }

    #[test]
    fn test_context_setters() {
        let mut sim = Simulator::new("owner", 100);
        sim.set_sender("certifier");
        sim.advance_blocks(50);
        assert_eq!(sim.context(), &ExecutionContext::new("certifier", 150));

        sim.set_block_height(u64::MAX);
        sim.advance_blocks(1);
        assert_eq!(sim.context().block_height, u64::MAX);
    }

    #[test]
    fn test_routes_by_contract_name() {
        let mut sim = Simulator::new("owner", 100);

        let response = sim
            .call("producer-verification", "get-contract-owner", &[])
            .unwrap();
        assert_eq!(response, Response::ok(Principal::from("owner")));

        let response = sim.call("certification", "get-product-count", &[]).unwrap();
        assert_eq!(response, Response::ok(0u64));

        let err = sim.call("marketplace", "list", &[]).unwrap_err();
        assert_eq!(err, DispatchError::unknown_contract("marketplace"));
    }

    #[test]
    fn test_registries_are_independent() {
        let mut sim = Simulator::new("owner", 100);

        sim.call(
            "producer-verification",
            "register-producer",
            &["farm".into(), "Farm".into(), "Iowa".into()],
        )
        .unwrap();

        // A registered producer is not a certifier
        sim.set_sender("farm");
        let response = sim
            .call(
                "certification",
                "certify-product",
                &["farm".into(), Value::Int(10), Value::List(vec![])],
            )
            .unwrap();
        assert_eq!(response, Response::err(2));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut sim = Simulator::new("owner", 100);
        sim.call(
            "certification",
            "register-certifier",
            &["cert".into(), "Body".into()],
        )
        .unwrap();

        let json = serde_json::to_value(sim.snapshot()).unwrap();
        assert_eq!(json["context"]["block_height"], 100);
        assert_eq!(json["certifications"]["certifiers"]["cert"]["active"], true);
    }
}
