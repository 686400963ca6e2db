//! Error codes for the registries
//!
//! Each contract has its own code space. Code 1 means "sender is not the
//! owner" in both, but the remaining codes differ, so the enums are kept
//! separate.

use harvest_core::ErrorCode;
use thiserror::Error;

/// Producer verification failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProducerError {
    #[error("Sender is not the contract owner")]
    NotOwner,

    #[error("Producer already registered")]
    AlreadyRegistered,

    #[error("Producer not found")]
    NotFound,

    #[error("Producer not found (read)")]
    UnknownProducer,
}

impl ProducerError {
    /// Numeric code returned in `(err uN)`
    pub fn code(&self) -> ErrorCode {
        match self {
            ProducerError::NotOwner => 1,
            ProducerError::AlreadyRegistered => 2,
            ProducerError::NotFound => 3,
            ProducerError::UnknownProducer => 4,
        }
    }
}

impl From<ProducerError> for ErrorCode {
    fn from(e: ProducerError) -> Self {
        e.code()
    }
}

/// Certification failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CertificationError {
    #[error("Sender is not the contract owner")]
    NotOwner,

    #[error("Sender is not a registered certifier")]
    CertifierNotRegistered,

    #[error("Certifier is not active")]
    CertifierInactive,

    #[error("Certified product not found")]
    ProductNotFound,
}

impl CertificationError {
    /// Numeric code returned in `(err uN)`
    pub fn code(&self) -> ErrorCode {
        match self {
            CertificationError::NotOwner => 1,
            CertificationError::CertifierNotRegistered => 2,
            CertificationError::CertifierInactive => 4,
            CertificationError::ProductNotFound => 5,
        }
    }
}

impl From<CertificationError> for ErrorCode {
    fn from(e: CertificationError) -> Self {
        e.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_codes() {
        assert_eq!(ProducerError::NotOwner.code(), 1);
        assert_eq!(ProducerError::AlreadyRegistered.code(), 2);
        assert_eq!(ProducerError::NotFound.code(), 3);
        assert_eq!(ProducerError::UnknownProducer.code(), 4);
    }

    #[test]
    fn test_certification_codes() {
        assert_eq!(CertificationError::NotOwner.code(), 1);
        assert_eq!(CertificationError::CertifierNotRegistered.code(), 2);
        assert_eq!(CertificationError::CertifierInactive.code(), 4);
        assert_eq!(CertificationError::ProductNotFound.code(), 5);
    }
}
