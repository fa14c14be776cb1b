//! Deployment artifact: the network → address registry for the contract.
//!
//! The artifact is produced by the contract build pipeline and consumed
//! here strictly read-only. Its JSON shape follows the conventional build
//! output: a contract name, the ABI blob (kept opaque; the client frames
//! calls by method name, not ABI encoding), and a `networks` map keyed by
//! network identifier.
//!
//! ```json
//! {
//!   "contractName": "BlogManager",
//!   "abi": [ ... ],
//!   "networks": {
//!     "5777": { "address": "0x3c19..." }
//!   }
//! }
//! ```

use crate::error::{ChainpressError, Result};
use crate::ledger::types::{Address, NetworkId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Parsed deployment artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentArtifact {
    /// Contract name as declared in the source.
    #[serde(rename = "contractName")]
    pub contract_name: String,
    /// ABI blob, carried opaquely for consumers that need it.
    #[serde(default)]
    pub abi: Value,
    /// Deployments keyed by network identifier.
    #[serde(default)]
    pub networks: HashMap<String, NetworkDeployment>,
}

/// Per-network deployment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDeployment {
    /// Address the contract is deployed at on this network.
    pub address: Address,
}

impl DeploymentArtifact {
    /// Parses an artifact from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ChainpressError::artifact(format!("Malformed artifact: {}", e)))
    }

    /// Loads and parses an artifact file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Returns the deployed address for a network, if registered.
    pub fn address_for(&self, network: &NetworkId) -> Option<&Address> {
        self.networks.get(network.as_str()).map(|d| &d.address)
    }
}
