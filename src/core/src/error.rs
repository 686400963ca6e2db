//! Dispatch error types
//!
//! Business-rule failures never travel through this type: contracts report
//! them as `Response::Err(code)`. A `DispatchError` means the caller asked
//! for something the contract cannot even attempt.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Caller defects detected while routing a contract call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No contract is deployed under this name
    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    /// The contract has no public method with this name
    #[error("Unknown method: {method} on contract {contract}")]
    UnknownMethod { contract: String, method: String },

    /// Wrong number of arguments
    #[error("{method}: expected {expected} arguments, got {actual}")]
    ArgumentCount {
        method: String,
        expected: usize,
        actual: usize,
    },

    /// Argument has the wrong shape
    #[error("{method}: argument {index} must be {expected}")]
    ArgumentType {
        method: String,
        index: usize,
        expected: &'static str,
    },
}

impl DispatchError {
    /// Create an unknown method error
    pub fn unknown_method<C: Into<String>, M: Into<String>>(contract: C, method: M) -> Self {
        DispatchError::UnknownMethod {
            contract: contract.into(),
            method: method.into(),
        }
    }

    /// Create an unknown contract error
    pub fn unknown_contract<S: Into<String>>(name: S) -> Self {
        DispatchError::UnknownContract(name.into())
    }
}
