//! Session identity resolution.
//!
//! Identity is resolved exactly once per session, at startup. It never
//! changes afterwards; picking up a different account or network requires
//! a fresh session.

use crate::error::{ChainpressError, Result};
use crate::ledger::types::{Address, NetworkId};
use crate::provider::WalletProvider;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The active account and network for this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Active account address.
    pub account: Address,
    /// Identifier of the connected network.
    pub network: NetworkId,
}

/// Resolves the session identity from the ambient provider.
pub struct IdentityResolver;

impl IdentityResolver {
    /// Queries the provider for the active account and network.
    ///
    /// # Errors
    /// Any provider failure maps to [`ChainpressError::NoProvider`]: with
    /// no reachable wallet the session cannot proceed, and the caller
    /// must present a persistent blocking error rather than retry
    /// silently.
    pub async fn resolve(provider: &dyn WalletProvider) -> Result<Identity> {
        let account = provider
            .account()
            .await
            .map_err(|e| ChainpressError::no_provider(e.to_string()))?;
        let network = provider
            .network_id()
            .await
            .map_err(|e| ChainpressError::no_provider(e.to_string()))?;

        info!(%account, %network, "session identity resolved");
        Ok(Identity { account, network })
    }
}
