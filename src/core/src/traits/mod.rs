//! Shared traits for the Harvest registries

pub mod contract;

// Re-export commonly used traits
pub use contract::{Args, Contract};
