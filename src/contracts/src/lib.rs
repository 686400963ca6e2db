//! # Harvest Contracts
//!
//! In-memory registries for agricultural provenance, modelled on on-chain
//! contracts that run under a sender identity and a block height.
//!
//! ## Features
//!
//! - **Producer Verification**: owner-gated producer registration and verification
//! - **Certification**: owner-gated certifier registration and certifier-issued,
//!   block-height-expiring product certificates
//! - **Simulator**: a harness owning the execution context and both contracts
//!
//! ## Module Structure
//!
//! ```text
//! contracts/
//! ├── producer/       - Producer verification registry
//! ├── certification/  - Certifier and certified-product registry
//! ├── simulator/      - Sender/block-height harness and call routing
//! └── error/          - Per-contract error codes
//! ```
//!
//! ## Example
//!
//! ```
//! use harvest_contracts::Simulator;
//! use harvest_core::Value;
//!
//! let mut sim = Simulator::new("ST1OWNER", 100);
//! sim.call("certification", "register-certifier", &["ST2CERT".into(), "Organic Body".into()])
//!     .unwrap();
//!
//! sim.set_sender("ST2CERT");
//! let response = sim
//!     .call(
//!         "certification",
//!         "certify-product",
//!         &["ST3FARM".into(), Value::Int(1000), vec!["Organic"].into()],
//!     )
//!     .unwrap();
//! assert!(response.is_ok());
//!
//! sim.set_block_height(1200);
//! let response = sim.call("certification", "is-product-certified", &[Value::UInt(1)]).unwrap();
//! assert_eq!(response.value(), Some(&Value::Bool(false)));
//! ```

pub mod certification;
pub mod error;
pub mod producer;
pub mod simulator;

pub use certification::{CertificationRegistry, CertifiedProduct, Certifier, ProductId};
pub use error::{CertificationError, ProducerError};
pub use producer::{Producer, ProducerRegistry};
pub use simulator::{Simulator, SimulatorSnapshot};
