//! # Harvest Core
//!
//! Shared types, traits, and error handling for the Harvest registries.
//! Contracts depend on this crate for the execution context they run under,
//! the values they exchange with callers, and the `Contract` dispatch trait.

pub mod types;
pub mod traits;
pub mod error;

// Re-export commonly used types
pub use error::{DispatchError, Result};
pub use traits::{Args, Contract};
pub use types::{BlockHeight, ErrorCode, ExecutionContext, Principal, Response, Value};
