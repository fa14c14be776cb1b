//! Domain types for the post ledger.
//!
//! This module contains the value types shared across the client:
//! - `Address` / `NetworkId` / `PostId`: validated identifier newtypes
//! - `Post`: a single directory entry as read from the ledger
//! - `TxReceipt` / `LedgerEvent`: confirmation data returned by mutating calls

use crate::error::{ChainpressError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A ledger account or contract address.
///
/// Stored as the raw `0x`-prefixed hex string the provider hands out.
/// Construction through [`Address::new`] validates the format; values
/// deserialized from a deployment artifact are trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Creates an address, validating the `0x`-prefixed hex form.
    ///
    /// # Errors
    /// Returns an error if the prefix is missing or the remainder is not
    /// non-empty hex.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let digits = value.strip_prefix("0x").ok_or_else(|| {
            ChainpressError::invalid_input(format!("Address must be 0x-prefixed: {}", value))
        })?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChainpressError::invalid_input(format!(
                "Address must be hex after the 0x prefix: {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Returns the address as the raw string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the ledger network the provider is connected to.
///
/// Opaque to the client; used only to look up the deployment address in
/// the artifact. The reference artifact format keys networks by decimal
/// chain ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    /// Creates a network identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ledger-assigned index of a post.
///
/// IDs are dense indexes into the remote post array and are NOT stable
/// across deletions: deleting post K re-addresses every post with a
/// higher ID to ID − 1 on the remote side. Holders must not assume a
/// previously fetched `id → Post` mapping survives any delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Creates a post ID from a raw index.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw index value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single post as read from the ledger.
///
/// Ephemeral: recomputed on every directory refresh, with no identity
/// guarantee across refreshes. `content_hash` is the opaque storage
/// reference for the post body; the client never dereferences it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Current ledger index of the post.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Opaque content storage reference.
    pub content_hash: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub time_published: u64,
    /// Last update time, milliseconds since the Unix epoch.
    pub time_updated: u64,
}

/// An event emitted by a confirmed mutating call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// Event name as declared by the contract (e.g. `CommentAdded`).
    pub name: String,
    /// Event attributes as a JSON object.
    pub attributes: Value,
}

impl LedgerEvent {
    /// Creates an event from a name and attribute object.
    pub fn new(name: impl Into<String>, attributes: Value) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// Returns a numeric attribute by key, if present.
    pub fn attribute_u64(&self, key: &str) -> Option<u64> {
        self.attributes.get(key).and_then(Value::as_u64)
    }
}

/// Receipt returned once a mutating call reaches confirmation.
///
/// Carries the emitted event data so callers can surface ledger-assigned
/// values (such as the index of a newly accepted comment) without another
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Hash of the confirmed transaction.
    pub tx_hash: String,
    /// Events emitted during execution, in emission order.
    pub events: Vec<LedgerEvent>,
}

impl TxReceipt {
    /// Creates a receipt.
    pub fn new(tx_hash: impl Into<String>, events: Vec<LedgerEvent>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            events,
        }
    }

    /// Returns the first event with the given name.
    pub fn event(&self, name: &str) -> Option<&LedgerEvent> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Returns the comment index assigned by a confirmed `comment` call.
    pub fn comment_index(&self) -> Option<u64> {
        self.event("CommentAdded")
            .and_then(|e| e.attribute_u64("commentIndex"))
    }
}
