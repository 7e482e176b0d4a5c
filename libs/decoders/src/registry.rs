//! Owner-gated dispatch registry: signing domain → decoder.
//!
//! The single point a caller uses to go from "I have a domain and a
//! blob" to "I have a canonical view". Writes are owner-only and
//! serialized behind a `RwLock`; readers observe either the old or the
//! new mapping atomically, never a partial entry. Decode dispatch itself
//! is stateless and safe to run from any number of threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use types::errors::{DecodeError, DispatchError, RegistryError};
use types::{Address, CanonicalOrderView, DomainSeparator};

use crate::oneinch::OneInchOrderDecoder;
use crate::rarible::RaribleOrderDecoder;
use crate::{oneinch, rarible, OrderDecoder};

/// A registry value: the decoder's on-chain implementation reference
/// plus the dispatchable decoder itself. The zero address is the null
/// reference and is never accepted by [`DecoderRegistry::register`].
#[derive(Clone)]
pub struct DecoderRef {
    implementation: Address,
    decoder: Arc<dyn OrderDecoder>,
}

impl DecoderRef {
    pub fn new(implementation: Address, decoder: Arc<dyn OrderDecoder>) -> Self {
        Self {
            implementation,
            decoder,
        }
    }

    pub fn implementation(&self) -> Address {
        self.implementation
    }

    pub fn decode(
        &self,
        payload: &[u8],
        domain: DomainSeparator,
    ) -> Result<CanonicalOrderView, DecodeError> {
        self.decoder.decode(payload, domain)
    }
}

impl fmt::Debug for DecoderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRef")
            .field("implementation", &self.implementation)
            .field("domain", &self.decoder.domain_separator())
            .finish()
    }
}

/// The domain→decoder mapping. Only the owner may mutate it; anyone may
/// resolve or dispatch through it.
pub struct DecoderRegistry {
    owner: RwLock<Address>,
    entries: RwLock<HashMap<DomainSeparator, DecoderRef>>,
}

impl DecoderRegistry {
    /// An empty registry with its initial owner assigned.
    pub fn new(owner: Address) -> Self {
        Self {
            owner: RwLock::new(owner),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn owner(&self) -> Address {
        *self.owner.read()
    }

    /// Register (or overwrite) the decoder for `domain`.
    ///
    /// Set semantics: no distinction between insert and update, the last
    /// write wins.
    pub fn register(
        &self,
        caller: Address,
        domain: DomainSeparator,
        decoder_ref: DecoderRef,
    ) -> Result<(), RegistryError> {
        self.check_owner(caller)?;
        if decoder_ref.implementation().is_zero() {
            return Err(RegistryError::InvalidImplementation);
        }

        tracing::debug!(
            %domain,
            implementation = ?decoder_ref.implementation(),
            "registered decoder"
        );
        self.entries.write().insert(domain, decoder_ref);
        Ok(())
    }

    /// Pure lookup. `None` means no decoder is registered — a valid,
    /// representable result the caller must check, not a failure.
    pub fn resolve(&self, domain: &DomainSeparator) -> Option<DecoderRef> {
        self.entries.read().get(domain).cloned()
    }

    /// Resolve and delegate in one step.
    pub fn decode(
        &self,
        payload: &[u8],
        domain: DomainSeparator,
    ) -> Result<CanonicalOrderView, DispatchError> {
        let decoder_ref = self
            .resolve(&domain)
            .ok_or(DispatchError::UnregisteredDomain(domain))?;
        Ok(decoder_ref.decode(payload, domain)?)
    }

    /// Hand the registry to a new owner. The zero address is rejected:
    /// that would brick registration forever.
    pub fn transfer_ownership(
        &self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        self.check_owner(caller)?;
        if new_owner.is_zero() {
            return Err(RegistryError::InvalidOwner);
        }
        tracing::info!(from = ?caller, to = ?new_owner, "registry ownership transferred");
        *self.owner.write() = new_owner;
        Ok(())
    }

    /// Wire the two shipped protocol decoders under their domain
    /// separators, at the given implementation references.
    pub fn register_known_protocols(
        &self,
        caller: Address,
        oneinch_impl: Address,
        rarible_impl: Address,
    ) -> Result<(), RegistryError> {
        self.register(
            caller,
            oneinch::DOMAIN_SEPARATOR,
            DecoderRef::new(oneinch_impl, Arc::new(OneInchOrderDecoder)),
        )?;
        self.register(
            caller,
            rarible::DOMAIN_SEPARATOR,
            DecoderRef::new(rarible_impl, Arc::new(RaribleOrderDecoder)),
        )
    }

    fn check_owner(&self, caller: Address) -> Result<(), RegistryError> {
        if caller != self.owner() {
            return Err(RegistryError::Unauthorized { caller });
        }
        Ok(())
    }
}
