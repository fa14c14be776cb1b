//! Resolved contract binding and the typed ledger operations.
//!
//! A [`ContractBinding`] pairs the deployed address for the session
//! network with the provider connection and exposes the contract surface
//! as typed methods. Reads return snapshot values that go stale the
//! moment any mutating call confirms anywhere; callers are expected to
//! re-resolve and re-read rather than patch cached values.
//!
//! ## Usage
//!
//! ```ignore
//! let binding = ContractBinding::resolve(&artifact, &identity.network, provider)?;
//!
//! let owner = binding.read_owner().await?;
//! let count = binding.read_count().await?;
//!
//! let receipt = binding.add_post("Title", "bzz://...", &identity.account).await?;
//! ```

use crate::error::{ChainpressError, Result};
use crate::ledger::artifact::DeploymentArtifact;
use crate::ledger::types::{Address, NetworkId, Post, PostId, TxReceipt};
use crate::ledger::wire::{CallFault, CallRequest};
use crate::provider::WalletProvider;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Maximum accepted post title length in bytes.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum accepted comment length in bytes.
pub const MAX_COMMENT_LEN: usize = 4096;

// Contract surface method names.
const METHOD_OWNER: &str = "owner";
const METHOD_GET_POST_COUNT: &str = "getPostCount";
const METHOD_GET_POST: &str = "getPost";
const METHOD_ADD_POST: &str = "addPost";
const METHOD_DELETE_POST: &str = "deletePost";
const METHOD_COMMENT: &str = "comment";

/// A callable binding to the contract deployed on one network.
///
/// Cheap to construct; the coordinator re-resolves one per refresh so
/// reads are never issued against a binding from a previous network.
#[derive(Clone)]
pub struct ContractBinding {
    address: Address,
    provider: Arc<dyn WalletProvider>,
}

impl ContractBinding {
    /// Resolves the deployment address for `network` and constructs a
    /// binding over it.
    ///
    /// # Errors
    /// Returns [`ChainpressError::ContractNotDeployed`] if the artifact
    /// has no address registered for the network. This is recoverable:
    /// identity stays valid and only the contract-dependent state is
    /// affected.
    pub fn resolve(
        artifact: &DeploymentArtifact,
        network: &NetworkId,
        provider: Arc<dyn WalletProvider>,
    ) -> Result<Self> {
        let address = artifact.address_for(network).cloned().ok_or_else(|| {
            ChainpressError::ContractNotDeployed {
                network: network.to_string(),
            }
        })?;
        debug!(%address, %network, "resolved contract binding");
        Ok(Self { address, provider })
    }

    /// Returns the bound contract address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Reads the contract owner.
    pub async fn read_owner(&self) -> Result<Address> {
        let request = CallRequest::new(METHOD_OWNER, json!({}));
        let response = self.provider.call(&self.address, request).await?;
        let raw: String = response.into_typed_result()?;
        Address::new(raw)
    }

    /// Reads the current post count.
    pub async fn read_count(&self) -> Result<u64> {
        let request = CallRequest::new(METHOD_GET_POST_COUNT, json!({}));
        let response = self.provider.call(&self.address, request).await?;
        response.into_typed_result()
    }

    /// Reads a single post by its current ledger index.
    ///
    /// # Errors
    /// Returns [`ChainpressError::PostNotFound`] when `id` is outside
    /// `[0, count)` at call time, typically a race with a concurrent
    /// deletion. Callers treat this as skip/refresh, not as fatal.
    pub async fn read_post(&self, id: PostId) -> Result<Post> {
        let request = CallRequest::new(METHOD_GET_POST, json!({ "id": id.value() }));
        let response = self.provider.call(&self.address, request).await?;
        if response.fault_code() == Some(CallFault::POST_NOT_FOUND) {
            return Err(ChainpressError::PostNotFound { id: id.value() });
        }
        response.into_typed_result()
    }

    /// Submits a new post and waits for confirmation.
    pub async fn add_post(
        &self,
        title: &str,
        content_hash: &str,
        from: &Address,
    ) -> Result<TxReceipt> {
        if title.is_empty() {
            return Err(ChainpressError::invalid_input("Post title cannot be empty"));
        }
        if title.len() > MAX_TITLE_LEN {
            return Err(ChainpressError::invalid_input(format!(
                "Post title exceeds {} bytes",
                MAX_TITLE_LEN
            )));
        }
        if content_hash.is_empty() {
            return Err(ChainpressError::invalid_input(
                "Content hash cannot be empty",
            ));
        }

        let request = CallRequest::new(
            METHOD_ADD_POST,
            json!({ "title": title, "contentHash": content_hash }),
        );
        let receipt = self.send(request, from).await?;
        info!(tx_hash = %receipt.tx_hash, "post accepted");
        Ok(receipt)
    }

    /// Deletes the post at `id` and waits for confirmation.
    ///
    /// Confirmation re-addresses every post with a higher index to
    /// index − 1 on the remote side; any cached directory is invalid
    /// afterwards.
    pub async fn delete_post(&self, id: PostId, from: &Address) -> Result<TxReceipt> {
        let request = CallRequest::new(METHOD_DELETE_POST, json!({ "id": id.value() }));
        let receipt = self.send(request, from).await?;
        info!(%id, tx_hash = %receipt.tx_hash, "post deleted");
        Ok(receipt)
    }

    /// Submits a comment on the post at `id` and waits for confirmation.
    ///
    /// The receipt's `CommentAdded` event carries the ledger-assigned
    /// comment index (see [`TxReceipt::comment_index`]).
    pub async fn comment(&self, id: PostId, text: &str, from: &Address) -> Result<TxReceipt> {
        if text.is_empty() {
            return Err(ChainpressError::invalid_input("Comment cannot be empty"));
        }
        if text.len() > MAX_COMMENT_LEN {
            return Err(ChainpressError::invalid_input(format!(
                "Comment exceeds {} bytes",
                MAX_COMMENT_LEN
            )));
        }

        let request = CallRequest::new(METHOD_COMMENT, json!({ "id": id.value(), "text": text }));
        let receipt = self.send(request, from).await?;
        info!(%id, tx_hash = %receipt.tx_hash, "comment accepted");
        Ok(receipt)
    }

    /// Sends a mutating call, folding every failure into the transaction
    /// error kind so the underlying cause reaches the user verbatim.
    async fn send(&self, request: CallRequest, from: &Address) -> Result<TxReceipt> {
        self.provider
            .send_transaction(&self.address, request, from)
            .await
            .map_err(|e| match e {
                err @ ChainpressError::Transaction(_) => err,
                other => ChainpressError::transaction(other.to_string()),
            })
    }
}

impl std::fmt::Debug for ContractBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractBinding")
            .field("address", &self.address)
            .finish()
    }
}
