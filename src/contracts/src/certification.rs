//! Certification Registry
//!
//! The owner registers certifiers. A registered, active certifier can then
//! certify products for a number of blocks; a certificate is valid while
//! the current block height is strictly below its expiry date.
//!
//! Expiry is evaluated at read time. Nothing is rewritten when a
//! certificate lapses.

use crate::error::CertificationError;
use harvest_core::{
    Args, BlockHeight, Contract, DispatchError, ExecutionContext, Principal, Response, Value,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// Name the registry is deployed under
pub const CONTRACT_NAME: &str = "certification";

/// Certified product identifier, starting at 1
pub type ProductId = u64;

/// Registered certification body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certifier {
    pub name: String,
    pub active: bool,
}

/// Certificate issued for a producer's product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertifiedProduct {
    /// Producer the certificate was issued for (not checked against the producer registry)
    pub producer_id: Principal,
    /// Block height at issuance
    pub certification_date: BlockHeight,
    /// First block height at which the certificate is no longer valid
    pub expiry_date: BlockHeight,
    /// Certifier that issued it
    pub certifier: Principal,
    /// Standards in the order the certifier listed them
    pub standards_met: Vec<String>,
}

impl CertifiedProduct {
    /// Check validity at a given block height
    pub fn is_valid_at(&self, height: BlockHeight) -> bool {
        height < self.expiry_date
    }
}

/// Certifier and certified-product tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationRegistry {
    /// Fixed at deployment
    owner: Principal,

    /// Certifiers by identity
    certifiers: HashMap<Principal, Certifier>,

    /// Certificates by id
    products: BTreeMap<ProductId, CertifiedProduct>,

    /// Last issued product id (0 before the first certificate)
    product_counter: ProductId,
}

impl CertificationRegistry {
    /// Deploy the registry; the deploying sender becomes the owner
    pub fn new(ctx: &ExecutionContext) -> Self {
        Self {
            owner: ctx.sender.clone(),
            certifiers: HashMap::new(),
            products: BTreeMap::new(),
            product_counter: 0,
        }
    }

    /// Register a certifier as active
    ///
    /// An existing record for `certifier_id` is replaced.
    ///
    /// # Errors
    /// - `NotOwner` unless the sender is the owner
    pub fn register_certifier(
        &mut self,
        ctx: &ExecutionContext,
        certifier_id: Principal,
        name: String,
    ) -> Result<(), CertificationError> {
        if !ctx.is_sender(&self.owner) {
            warn!(sender = %ctx.sender, "Rejected non-owner certifier registration");
            return Err(CertificationError::NotOwner);
        }

        let previous = self
            .certifiers
            .insert(certifier_id.clone(), Certifier { name, active: true });

        if previous.is_some() {
            warn!(certifier = %certifier_id, "Certifier re-registered, previous record replaced");
        } else {
            info!(certifier = %certifier_id, "Certifier registered");
        }

        Ok(())
    }

    /// Issue a certificate from the calling certifier
    ///
    /// The certificate expires `expiry_blocks` after the current height.
    /// Negative offsets are accepted and yield a certificate that is
    /// already expired.
    ///
    /// # Returns
    /// The new product id
    ///
    /// # Errors
    /// - `CertifierNotRegistered` if the sender has no certifier record
    /// - `CertifierInactive` if the sender's record is inactive
    pub fn certify_product(
        &mut self,
        ctx: &ExecutionContext,
        producer_id: Principal,
        expiry_blocks: i64,
        standards_met: Vec<String>,
    ) -> Result<ProductId, CertificationError> {
        let certifier = self
            .certifiers
            .get(&ctx.sender)
            .ok_or(CertificationError::CertifierNotRegistered)?;

        if !certifier.active {
            return Err(CertificationError::CertifierInactive);
        }

        self.product_counter += 1;
        let product_id = self.product_counter;

        let product = CertifiedProduct {
            producer_id,
            certification_date: ctx.block_height,
            expiry_date: ctx.block_height.saturating_add_signed(expiry_blocks),
            certifier: ctx.sender.clone(),
            standards_met,
        };

        info!(
            product_id,
            producer = %product.producer_id,
            certifier = %product.certifier,
            expiry = product.expiry_date,
            "Product certified"
        );
        self.products.insert(product_id, product);

        Ok(product_id)
    }

    /// Check whether a certificate is still valid at the context's block height
    ///
    /// # Errors
    /// - `ProductNotFound` if no certificate has this id
    pub fn is_product_certified(
        &self,
        ctx: &ExecutionContext,
        product_id: ProductId,
    ) -> Result<bool, CertificationError> {
        self.products
            .get(&product_id)
            .map(|p| p.is_valid_at(ctx.block_height))
            .ok_or(CertificationError::ProductNotFound)
    }

    /// Contract owner
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Look up a certifier record
    pub fn certifier(&self, certifier_id: &Principal) -> Option<&Certifier> {
        self.certifiers.get(certifier_id)
    }

    /// Look up a certificate
    pub fn product(&self, product_id: ProductId) -> Option<&CertifiedProduct> {
        self.products.get(&product_id)
    }

    /// Number of certificates issued so far
    pub fn product_count(&self) -> ProductId {
        self.product_counter
    }

    /// All certificates issued for a producer, in id order
    pub fn products_for(&self, producer_id: &Principal) -> Vec<(ProductId, &CertifiedProduct)> {
        self.products
            .iter()
            .filter(|(_, p)| &p.producer_id == producer_id)
            .map(|(id, p)| (*id, p))
            .collect()
    }
}

impl Contract for CertificationRegistry {
    fn name(&self) -> &'static str {
        CONTRACT_NAME
    }

    fn methods(&self) -> &'static [&'static str] {
        &[
            "register-certifier",
            "certify-product",
            "is-product-certified",
            "get-product-count",
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
            "register-certifier" => {
                let args = Args::new(method, args, 2)?;
                self.register_certifier(ctx, args.principal(0)?, args.text(1)?)
                    .map(|()| Value::Bool(true))
            }
            "certify-product" => {
                let args = Args::new(method, args, 3)?;
                self.certify_product(ctx, args.principal(0)?, args.int(1)?, args.text_list(2)?)
                    .map(|_| Value::Bool(true))
            }
            "is-product-certified" => {
                let args = Args::new(method, args, 1)?;
                self.is_product_certified(ctx, args.uint(0)?)
                    .map(Value::Bool)
            }
            "get-product-count" => {
                Args::new(method, args, 0)?;
                Ok(Value::UInt(self.product_counter))
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
