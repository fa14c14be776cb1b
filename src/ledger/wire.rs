//! Call seam between the client and the wallet-like provider.
//!
//! The client never speaks a concrete contract ABI. It frames every ledger
//! operation as a [`CallRequest`] (method name plus JSON parameters) and
//! reads back a [`CallResponse`] (result value or typed fault). The
//! provider owns the actual encoding and transport.
//!
//! ## Fault codes
//!
//! Providers distinguish failure classes with the numeric codes on
//! [`CallFault`]; the binding layer maps `POST_NOT_FOUND` to the typed
//! skip/refresh error and everything else to a provider error.

use crate::error::{ChainpressError, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// A single contract call to be executed by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    /// Contract method name.
    pub method: String,
    /// Method parameters as a JSON object.
    pub params: Value,
}

impl CallRequest {
    /// Creates a call request.
    pub fn new(method: impl Into<String>, params: impl Serialize) -> Self {
        Self {
            method: method.into(),
            params: serde_json::to_value(params).unwrap_or(Value::Null),
        }
    }
}

/// Provider response to a read call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResponse {
    /// Result value (present on success).
    pub result: Option<Value>,
    /// Fault (present on failure).
    pub fault: Option<CallFault>,
}

impl CallResponse {
    /// Creates a successful response wrapping a value.
    pub fn ok(value: impl Serialize) -> Self {
        Self {
            result: Some(serde_json::to_value(value).unwrap_or(Value::Null)),
            fault: None,
        }
    }

    /// Creates a failed response carrying a fault.
    pub fn fault(fault: CallFault) -> Self {
        Self {
            result: None,
            fault: Some(fault),
        }
    }

    /// Returns the fault code, if this response failed.
    pub fn fault_code(&self) -> Option<i32> {
        self.fault.as_ref().map(|f| f.code)
    }

    /// Extracts the result value, converting a fault into an error.
    pub fn into_result(self) -> Result<Value> {
        if let Some(fault) = self.fault {
            return Err(ChainpressError::provider(format!(
                "call fault {}: {}",
                fault.code, fault.message
            )));
        }

        self.result
            .ok_or_else(|| ChainpressError::provider("Empty call result".to_string()))
    }

    /// Extracts and deserializes the result as a specific type.
    pub fn into_typed_result<T: DeserializeOwned>(self) -> Result<T> {
        let value = self.into_result()?;
        serde_json::from_value(value).map_err(|e| {
            ChainpressError::serialization(format!("Failed to parse call result: {}", e))
        })
    }
}

/// Fault object for a failed call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallFault {
    /// Fault code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

impl CallFault {
    /// The requested post ID is outside the current index range (-40001).
    pub const POST_NOT_FOUND: i32 = -40001;
    /// The contract rejected the call (-40002).
    pub const REVERTED: i32 = -40002;
    /// The provider lost its connection mid-call (-40003).
    pub const CONNECTION_LOST: i32 = -40003;

    /// Creates a post-not-found fault.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            code: Self::POST_NOT_FOUND,
            message: msg.into(),
        }
    }

    /// Creates a reverted fault.
    pub fn reverted(msg: impl Into<String>) -> Self {
        Self {
            code: Self::REVERTED,
            message: msg.into(),
        }
    }

    /// Creates a connection-lost fault.
    pub fn connection_lost(msg: impl Into<String>) -> Self {
        Self {
            code: Self::CONNECTION_LOST,
            message: msg.into(),
        }
    }
}
