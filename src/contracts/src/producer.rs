//! Producer Verification Registry
//!
//! Tracks producer identities registered by the contract owner and whether
//! the owner has verified them. Anyone may query verification status.

use crate::error::ProducerError;
use harvest_core::{
    Args, BlockHeight, Contract, DispatchError, ExecutionContext, Principal, Response, Value,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Name the registry is deployed under
pub const CONTRACT_NAME: &str = "producer-verification";

/// Registered producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Producer {
    /// Display name
    pub name: String,
    /// Location
    pub location: String,
    /// Set by the owner through `verify_producer`
    pub verified: bool,
    /// Block height at registration
    pub registration_date: BlockHeight,
}

impl Producer {
    fn new(name: String, location: String, registered_at: BlockHeight) -> Self {
        Self {
            name,
            location,
            verified: false,
            registration_date: registered_at,
        }
    }
}

/// Owner-gated producer registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerRegistry {
    /// Fixed at deployment
    owner: Principal,

    /// Producers by identity
    producers: HashMap<Principal, Producer>,
}

impl ProducerRegistry {
    /// Deploy the registry; the deploying sender becomes the owner
    pub fn new(ctx: &ExecutionContext) -> Self {
        Self {
            owner: ctx.sender.clone(),
            producers: HashMap::new(),
        }
    }

    fn ensure_owner(&self, ctx: &ExecutionContext, action: &str) -> Result<(), ProducerError> {
        if !ctx.is_sender(&self.owner) {
            warn!(sender = %ctx.sender, action, "Rejected non-owner call");
            return Err(ProducerError::NotOwner);
        }
        Ok(())
    }

    /// Register a new producer
    ///
    /// # Errors
    /// - `NotOwner` unless the sender is the owner
    /// - `AlreadyRegistered` if `producer_id` already has a record
    pub fn register_producer(
        &mut self,
        ctx: &ExecutionContext,
        producer_id: Principal,
        name: String,
        location: String,
    ) -> Result<(), ProducerError> {
        self.ensure_owner(ctx, "register-producer")?;

        if self.producers.contains_key(&producer_id) {
            return Err(ProducerError::AlreadyRegistered);
        }

        info!(producer = %producer_id, height = ctx.block_height, "Producer registered");
        self.producers
            .insert(producer_id, Producer::new(name, location, ctx.block_height));

        Ok(())
    }

    /// Mark an existing producer as verified
    ///
    /// Repeating the call on a verified producer succeeds and changes nothing.
    ///
    /// # Errors
    /// - `NotOwner` unless the sender is the owner
    /// - `NotFound` if `producer_id` has no record
    pub fn verify_producer(
        &mut self,
        ctx: &ExecutionContext,
        producer_id: &Principal,
    ) -> Result<(), ProducerError> {
        self.ensure_owner(ctx, "verify-producer")?;

        let producer = self
            .producers
            .get_mut(producer_id)
            .ok_or(ProducerError::NotFound)?;

        if !producer.verified {
            info!(producer = %producer_id, "Producer verified");
        }
        producer.verified = true;

        Ok(())
    }

    /// Verification status of a producer; callable by anyone
    pub fn is_producer_verified(&self, producer_id: &Principal) -> Result<bool, ProducerError> {
        self.producers
            .get(producer_id)
            .map(|p| p.verified)
            .ok_or(ProducerError::UnknownProducer)
    }

    /// Contract owner
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Look up a producer record
    pub fn producer(&self, producer_id: &Principal) -> Option<&Producer> {
        self.producers.get(producer_id)
    }

    /// Number of registered producers
    pub fn producer_count(&self) -> usize {
        self.producers.len()
    }
}

impl Contract for ProducerRegistry {
    fn name(&self) -> &'static str {
        CONTRACT_NAME
    }

    fn methods(&self) -> &'static [&'static str] {
        &[
            "register-producer",
            "verify-producer",
            "is-producer-verified",
            "get-contract-owner",
        ]
    }

    fn call(
        &mut self,
        ctx: &ExecutionContext,
        method: &str,
        args: &[Value],
    ) -> harvest_core::Result<Response> {
        debug!(method, sender = %ctx.sender, height = ctx.block_height, "Dispatching call");

        let result = match method {
            "register-producer" => {
                let args = Args::new(method, args, 3)?;
                self.register_producer(ctx, args.principal(0)?, args.text(1)?, args.text(2)?)
                    .map(|()| Value::Bool(true))
            }
            "verify-producer" => {
                let args = Args::new(method, args, 1)?;
                self.verify_producer(ctx, &args.principal(0)?)
                    .map(|()| Value::Bool(true))
            }
            "is-producer-verified" => {
                let args = Args::new(method, args, 1)?;
                self.is_producer_verified(&args.principal(0)?)
                    .map(Value::Bool)
            }
            "get-contract-owner" => {
                Args::new(method, args, 0)?;
                Ok(Value::Principal(self.owner.clone()))
            }
            _ => return Err(DispatchError::unknown_method(CONTRACT_NAME, method)),
        };

        Ok(Response::from(result))
    }
}
