//! Transaction metadata handed to every contract call

use super::identity::Principal;
use serde::{Deserialize, Serialize};

/// Simulated chain time
pub type BlockHeight = u64;

/// Sender and block height of the call being executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Identity attributed to the call
    pub sender: Principal,
    /// Current block height
    pub block_height: BlockHeight,
}

impl ExecutionContext {
    pub fn new<P: Into<Principal>>(sender: P, block_height: BlockHeight) -> Self {
        Self {
            sender: sender.into(),
            block_height,
        }
    }

    /// Same height, different sender
    pub fn with_sender<P: Into<Principal>>(&self, sender: P) -> Self {
        Self {
            sender: sender.into(),
            block_height: self.block_height,
        }
    }

    /// Same sender, different height
    pub fn at_height(&self, block_height: BlockHeight) -> Self {
        Self {
            sender: self.sender.clone(),
            block_height,
        }
    }

    /// Check whether the call was sent by `principal`
    pub fn is_sender(&self, principal: &Principal) -> bool {
        &self.sender == principal
    }
}
