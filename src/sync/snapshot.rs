//! The externally observable application state.

use crate::identity::Identity;
use crate::ledger::types::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contract-derived state captured at resolution or refresh time.
///
/// `owner` and `post_count` are snapshot values, not live reads: they go
/// stale the moment any mutating call confirms and must be refreshed
/// before being trusted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractHandle {
    /// Address of the bound contract deployment.
    pub address: Address,
    /// Contract owner at snapshot time.
    pub owner: Address,
    /// Post count at snapshot time.
    pub post_count: u64,
}

/// The coordinator's current consistent view of the session.
///
/// Absent fields model "not yet loaded", never a default or sentinel
/// value. Snapshots are replaced wholesale on every successful step;
/// consumers never observe a half-updated mix of old and new fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSnapshot {
    /// Session identity, present once resolved.
    pub identity: Option<Identity>,
    /// Contract-derived state, present while the contract side is healthy.
    pub contract: Option<ContractHandle>,
}

impl ApplicationSnapshot {
    /// Returns the lifecycle phase this snapshot represents.
    ///
    /// The transient refreshing state is coordinator-internal and never
    /// visible in a published snapshot.
    pub fn phase(&self) -> SyncPhase {
        match (&self.identity, &self.contract) {
            (None, _) => SyncPhase::Uninitialized,
            (Some(_), None) => SyncPhase::IdentityResolved,
            (Some(_), Some(_)) => SyncPhase::ContractResolved,
        }
    }

    /// True when the session account owns the contract.
    ///
    /// Rendering layers typically gate the add-post form on this.
    pub fn is_owner(&self) -> bool {
        match (&self.identity, &self.contract) {
            (Some(identity), Some(contract)) => identity.account == contract.owner,
            _ => false,
        }
    }

    /// Post count from the contract handle, zero while unresolved.
    pub fn post_count(&self) -> u64 {
        self.contract.as_ref().map_or(0, |c| c.post_count)
    }
}

/// Lifecycle phase of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncPhase {
    /// Nothing resolved yet.
    Uninitialized,
    /// Identity resolved; contract side absent or cleared.
    IdentityResolved,
    /// Identity and contract state both present.
    ContractResolved,
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncPhase::Uninitialized => write!(f, "Uninitialized"),
            SyncPhase::IdentityResolved => write!(f, "IdentityResolved"),
            SyncPhase::ContractResolved => write!(f, "ContractResolved"),
        }
    }
}
