//! The synchronization coordinator.
//!
//! [`SyncCoordinator`] owns the canonical [`ApplicationSnapshot`] and is
//! its only writer. Every mutating operation runs through the coordinator
//! and is followed by a wholesale contract-state refresh: post IDs shift
//! on deletion, so the cached directory is discarded and re-derived, never
//! patched in place.
//!
//! ## Ordering guarantees
//!
//! - Within one mutate-and-refresh, the mutating call reaches confirmation
//!   strictly before the refresh reads begin, so the refresh always
//!   observes the mutation's effects.
//! - At most one mutating-or-refreshing operation is in flight. A second
//!   request is rejected immediately rather than queued: a queued delete
//!   could land against an index space that shifted after its caller
//!   computed the target ID.
//! - Plain directory reads run concurrently with each other but never
//!   with a mutation or refresh.
//!
//! ## Usage
//!
//! ```ignore
//! let coordinator = SyncCoordinator::new(provider, artifact);
//! let snapshot = coordinator.bootstrap().await?;
//!
//! let mut updates = coordinator.subscribe();
//! let posts = coordinator.fetch_directory().await?;
//!
//! let outcome = coordinator.comment(PostId::new(2), "Nice post").await?;
//! println!("comment index: {:?}", outcome.receipt.comment_index());
//! ```

use crate::directory;
use crate::error::{ChainpressError, Result};
use crate::identity::{Identity, IdentityResolver};
use crate::ledger::artifact::DeploymentArtifact;
use crate::ledger::binding::ContractBinding;
use crate::ledger::types::{Post, PostId, TxReceipt};
use crate::provider::WalletProvider;
use crate::sync::snapshot::{ApplicationSnapshot, ContractHandle};
use std::future::Future;
use std::sync::{Arc, OnceLock};
use tokio::sync::{watch, Mutex, RwLock};
use tracing::{info, warn};

/// Result of a completed mutate-and-refresh cycle.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    /// Receipt of the confirmed mutating call, with emitted event data.
    pub receipt: TxReceipt,
    /// The snapshot taken by the refresh that followed confirmation.
    pub snapshot: ApplicationSnapshot,
}

/// Orchestrates identity resolution, contract binding, and snapshot
/// refresh into one consistent published view.
pub struct SyncCoordinator {
    provider: Arc<dyn WalletProvider>,
    artifact: DeploymentArtifact,
    /// Session identity; set once by bootstrap, never re-resolved.
    identity: OnceLock<Identity>,
    /// Admission gate: at most one mutating-or-refreshing operation.
    busy: Mutex<()>,
    /// Read/write exclusion between directory reads and mutations.
    ledger_lock: RwLock<()>,
    publisher: watch::Sender<ApplicationSnapshot>,
}

impl SyncCoordinator {
    /// Creates a coordinator over a provider and deployment artifact.
    pub fn new(provider: Arc<dyn WalletProvider>, artifact: DeploymentArtifact) -> Self {
        let (publisher, _) = watch::channel(ApplicationSnapshot::default());
        Self {
            provider,
            artifact,
            identity: OnceLock::new(),
            busy: Mutex::new(()),
            ledger_lock: RwLock::new(()),
            publisher,
        }
    }

    /// Subscribes to snapshot replacements.
    ///
    /// Each published value is a complete snapshot; receivers never see
    /// intermediate states.
    pub fn subscribe(&self) -> watch::Receiver<ApplicationSnapshot> {
        self.publisher.subscribe()
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> ApplicationSnapshot {
        self.publisher.borrow().clone()
    }

    /// Returns the session identity, if bootstrap has resolved it.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.get()
    }

    /// Resolves identity (first call only), then pulls contract state
    /// into the first full snapshot.
    ///
    /// # Errors
    /// - [`ChainpressError::NoProvider`] if the wallet is unreachable:
    ///   fatal, nothing is published beyond the empty snapshot.
    /// - Contract-side failures degrade the snapshot to identity-only,
    ///   publish it, and return the typed error. No automatic retry.
    pub async fn bootstrap(&self) -> Result<ApplicationSnapshot> {
        let _admission = self
            .busy
            .try_lock()
            .map_err(|_| ChainpressError::OperationInProgress)?;
        let _exclusive = self.ledger_lock.write().await;

        let identity = match self.identity.get() {
            Some(existing) => existing.clone(),
            None => {
                let resolved = IdentityResolver::resolve(self.provider.as_ref()).await?;
                let identity = self.identity.get_or_init(|| resolved).clone();
                self.publish(ApplicationSnapshot {
                    identity: Some(identity.clone()),
                    contract: None,
                });
                identity
            }
        };

        self.pull_and_publish(&identity).await
    }

    /// Re-resolves the contract binding and replaces the contract handle
    /// wholesale with freshly read owner and count.
    ///
    /// On failure the contract portion of the snapshot is cleared (never
    /// left half-updated) and the typed error is returned.
    pub async fn refresh(&self) -> Result<ApplicationSnapshot> {
        let _admission = self
            .busy
            .try_lock()
            .map_err(|_| ChainpressError::OperationInProgress)?;
        let _exclusive = self.ledger_lock.write().await;

        let identity = self.session_identity()?;
        self.pull_and_publish(&identity).await
    }

    /// Runs exactly one mutating operation against a freshly resolved
    /// binding, then refreshes.
    ///
    /// The refresh begins only after the mutating call reaches
    /// confirmation, so the returned snapshot always reflects the
    /// mutation. A failed mutation aborts without refreshing: the remote
    /// state is assumed unchanged and mutations are never retried
    /// automatically.
    ///
    /// # Errors
    /// [`ChainpressError::OperationInProgress`] if another mutation or
    /// refresh is in flight; the in-flight operation is unaffected.
    pub async fn mutate_and_refresh<F, Fut>(&self, op: F) -> Result<MutationOutcome>
    where
        F: FnOnce(ContractBinding, Identity) -> Fut,
        Fut: Future<Output = Result<TxReceipt>>,
    {
        let _admission = self
            .busy
            .try_lock()
            .map_err(|_| ChainpressError::OperationInProgress)?;
        let _exclusive = self.ledger_lock.write().await;

        let identity = self.session_identity()?;
        let binding =
            ContractBinding::resolve(&self.artifact, &identity.network, self.provider.clone())?;

        let receipt = op(binding, identity.clone()).await?;
        let snapshot = self.pull_and_publish(&identity).await?;

        Ok(MutationOutcome { receipt, snapshot })
    }

    /// Adds a post authored by the session account.
    pub async fn add_post(&self, title: &str, content_hash: &str) -> Result<MutationOutcome> {
        self.mutate_and_refresh(|binding, identity| async move {
            binding
                .add_post(title, content_hash, &identity.account)
                .await
        })
        .await
    }

    /// Deletes the post at `id` on behalf of the session account.
    pub async fn delete_post(&self, id: PostId) -> Result<MutationOutcome> {
        self.mutate_and_refresh(|binding, identity| async move {
            binding.delete_post(id, &identity.account).await
        })
        .await
    }

    /// Comments on the post at `id` as the session account.
    ///
    /// The ledger-assigned comment index is available via
    /// `outcome.receipt.comment_index()`.
    pub async fn comment(&self, id: PostId, text: &str) -> Result<MutationOutcome> {
        self.mutate_and_refresh(|binding, identity| async move {
            binding.comment(id, text, &identity.account).await
        })
        .await
    }

    /// Fetches the ordered post directory from a fresh count.
    ///
    /// A read, not a mutation: runs concurrently with other reads but
    /// waits out any in-flight mutation or refresh. Posts that vanish
    /// mid-enumeration are skipped.
    pub async fn fetch_directory(&self) -> Result<Vec<Post>> {
        let _shared = self.ledger_lock.read().await;

        let identity = self.session_identity()?;
        let binding =
            ContractBinding::resolve(&self.artifact, &identity.network, self.provider.clone())?;
        let count = binding.read_count().await?;
        directory::fetch(&binding, count).await
    }

    fn session_identity(&self) -> Result<Identity> {
        self.identity
            .get()
            .cloned()
            .ok_or(ChainpressError::NotBootstrapped)
    }

    /// Pulls owner and count through a freshly resolved binding and
    /// publishes the resulting snapshot. Degrades to identity-only on any
    /// failure. Callers must hold the exclusive ledger lock.
    async fn pull_and_publish(&self, identity: &Identity) -> Result<ApplicationSnapshot> {
        match self.pull_contract(identity).await {
            Ok(contract) => {
                let snapshot = ApplicationSnapshot {
                    identity: Some(identity.clone()),
                    contract: Some(contract),
                };
                self.publish(snapshot.clone());
                info!(
                    post_count = snapshot.post_count(),
                    "contract state refreshed"
                );
                Ok(snapshot)
            }
            Err(err) => {
                warn!(error = %err, "contract refresh failed, clearing contract state");
                self.publish(ApplicationSnapshot {
                    identity: Some(identity.clone()),
                    contract: None,
                });
                Err(err)
            }
        }
    }

    async fn pull_contract(&self, identity: &Identity) -> Result<ContractHandle> {
        let binding =
            ContractBinding::resolve(&self.artifact, &identity.network, self.provider.clone())?;
        let owner = binding.read_owner().await?;
        let post_count = binding.read_count().await?;
        Ok(ContractHandle {
            address: binding.address().clone(),
            owner,
            post_count,
        })
    }

    fn publish(&self, snapshot: ApplicationSnapshot) {
        self.publisher.send_replace(snapshot);
    }
}

impl std::fmt::Debug for SyncCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncCoordinator")
            .field("contract", &self.artifact.contract_name)
            .field("identity", &self.identity.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::{Address, NetworkId};
    use crate::ledger::wire::{CallRequest, CallResponse};
    use crate::sync::snapshot::SyncPhase;
    use async_trait::async_trait;

    struct FixedProvider;

    #[async_trait]
    impl WalletProvider for FixedProvider {
        async fn account(&self) -> Result<Address> {
            Address::new("0xa1")
        }

        async fn network_id(&self) -> Result<NetworkId> {
            Ok(NetworkId::new("5777"))
        }

        async fn call(&self, _: &Address, request: CallRequest) -> Result<CallResponse> {
            match request.method.as_str() {
                "owner" => Ok(CallResponse::ok("0xa1")),
                "getPostCount" => Ok(CallResponse::ok(2u64)),
                other => Err(ChainpressError::provider(format!("unexpected {}", other))),
            }
        }

        async fn send_transaction(
            &self,
            _: &Address,
            _: CallRequest,
            _: &Address,
        ) -> Result<TxReceipt> {
            Ok(TxReceipt::new("0x01", vec![]))
        }
    }

    fn artifact() -> DeploymentArtifact {
        DeploymentArtifact::from_json(
            r#"{"contractName": "BlogManager", "networks": {"5777": {"address": "0xc0de"}}}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_refresh_before_bootstrap_is_rejected() {
        let coordinator = SyncCoordinator::new(Arc::new(FixedProvider), artifact());
        let err = coordinator.refresh().await.unwrap_err();

        assert!(matches!(err, ChainpressError::NotBootstrapped));
        assert_eq!(coordinator.snapshot().phase(), SyncPhase::Uninitialized);
    }

    #[tokio::test]
    async fn test_bootstrap_publishes_full_snapshot() {
        let coordinator = SyncCoordinator::new(Arc::new(FixedProvider), artifact());
        let mut updates = coordinator.subscribe();

        let snapshot = coordinator.bootstrap().await.unwrap();

        assert_eq!(snapshot.phase(), SyncPhase::ContractResolved);
        assert_eq!(snapshot.post_count(), 2);
        assert!(snapshot.is_owner());

        // The subscriber observes the final published value.
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow(), coordinator.snapshot());
    }

    #[tokio::test]
    async fn test_bootstrap_twice_keeps_identity() {
        let coordinator = SyncCoordinator::new(Arc::new(FixedProvider), artifact());

        let first = coordinator.bootstrap().await.unwrap();
        let second = coordinator.bootstrap().await.unwrap();

        assert_eq!(first.identity, second.identity);
    }
}
