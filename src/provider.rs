//! Wallet-like provider seam.
//!
//! The client reaches the ledger exclusively through this trait. Real
//! implementations wrap whatever wallet or node connection the host
//! application carries; tests implement it over an in-memory ledger.
//! The crate itself ships no implementation.
//!
//! All methods are suspension points and may take arbitrarily long,
//! notably [`WalletProvider::send_transaction`], which resolves only once
//! the network reports inclusion of the submitted call. The underlying
//! networks offer no cancellation primitive, so none is modeled here: a
//! caller may stop waiting, but a submitted mutation still lands and the
//! next refresh will reflect it.

use crate::error::Result;
use crate::ledger::types::{Address, NetworkId, TxReceipt};
use crate::ledger::wire::{CallRequest, CallResponse};
use async_trait::async_trait;

/// Connection to the ambient wallet-like provider.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Returns the active account address.
    async fn account(&self) -> Result<Address>;

    /// Returns the identifier of the connected network.
    async fn network_id(&self) -> Result<NetworkId>;

    /// Executes a read-only contract call against `target`.
    async fn call(&self, target: &Address, request: CallRequest) -> Result<CallResponse>;

    /// Submits a mutating contract call from `from` against `target` and
    /// waits for confirmation.
    ///
    /// Returns the receipt with emitted event data once the call is
    /// durably accepted. Any submission or confirmation failure is an
    /// error, and no partial remote effects are assumed.
    async fn send_transaction(
        &self,
        target: &Address,
        request: CallRequest,
        from: &Address,
    ) -> Result<TxReceipt>;
}
