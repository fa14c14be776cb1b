//! Ledger access layer.
//!
//! Everything the client knows about the remote contract lives here:
//! - `types`: validated domain newtypes, the `Post` entity, receipts
//! - `wire`: the method-name + JSON call seam the provider transports
//! - `artifact`: the read-only network → address deployment registry
//! - `binding`: the resolved, callable contract surface
//!
//! The contract itself is opaque to the client. The binding exposes four
//! read operations and three mutating operations and implements none of
//! them; execution belongs to the wallet-like provider.

pub mod artifact;
pub mod binding;
pub mod types;
pub mod wire;

pub use artifact::{DeploymentArtifact, NetworkDeployment};
pub use binding::ContractBinding;
pub use types::{Address, LedgerEvent, NetworkId, Post, PostId, TxReceipt};
pub use wire::{CallFault, CallRequest, CallResponse};
