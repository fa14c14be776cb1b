//! # chainpress - ledger-backed blogging CMS client
//!
//! A client library presenting a content-management view over posts
//! stored on an append-mostly, index-addressed ledger contract. The crate
//! keeps a local snapshot consistent with the remote authoritative state
//! across reads, writes, and deletions.
//!
//! ## Features
//!
//! - **Session identity**: one-shot account/network resolution from a
//!   wallet-like provider
//! - **Contract binding**: deployment-artifact lookup plus the typed
//!   read/write contract surface
//! - **Ordered directory**: dense `[0, count)` enumeration that respects
//!   index shift on deletion
//! - **Sync coordination**: whole-snapshot refresh after every mutation,
//!   single-in-flight serialization, watch-channel publication
//!
//! ## Example
//!
//! ```ignore
//! use chainpress::{DeploymentArtifact, PostId, SyncCoordinator};
//! use std::sync::Arc;
//!
//! # async fn run(provider: Arc<dyn chainpress::WalletProvider>) -> chainpress::Result<()> {
//! let artifact = DeploymentArtifact::from_json_file("build/contracts/BlogManager.json")?;
//! let coordinator = SyncCoordinator::new(provider, artifact);
//!
//! let snapshot = coordinator.bootstrap().await?;
//! println!("{} posts on chain", snapshot.post_count());
//!
//! for post in coordinator.fetch_directory().await? {
//!     println!("#{} {}", post.id, post.title);
//! }
//!
//! coordinator.delete_post(PostId::new(1)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The wallet provider, the rendering layer, and the contract itself are
//! external collaborators: the crate defines the [`WalletProvider`] seam
//! and ships no implementation of it.

pub mod directory;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod provider;
pub mod sync;

pub use error::{ChainpressError, Result};
pub use identity::{Identity, IdentityResolver};
pub use ledger::{
    Address, CallFault, CallRequest, CallResponse, ContractBinding, DeploymentArtifact,
    LedgerEvent, NetworkId, Post, PostId, TxReceipt,
};
pub use provider::WalletProvider;
pub use sync::{ApplicationSnapshot, ContractHandle, MutationOutcome, SyncCoordinator, SyncPhase};
