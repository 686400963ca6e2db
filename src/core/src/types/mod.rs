//! Shared types for the Harvest registries

pub mod identity;
pub mod context;
pub mod value;

// Re-export commonly used types
pub use identity::Principal;
pub use context::{BlockHeight, ExecutionContext};
pub use value::{ErrorCode, Response, Value};
