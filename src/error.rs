//! Error types for chainpress operations.

use thiserror::Error;

/// Result type alias for chainpress operations.
pub type Result<T> = std::result::Result<T, ChainpressError>;

/// Main error type for chainpress operations.
#[derive(Error, Debug)]
pub enum ChainpressError {
    /// No wallet-like provider is reachable. Fatal: the session cannot
    /// start and must present a persistent blocking error.
    #[error("No wallet provider reachable: {0}")]
    NoProvider(String),

    /// No contract address is registered for the session network.
    /// Recoverable: the contract portion of the snapshot is cleared while
    /// identity remains valid.
    #[error("Contract not deployed on network {network}")]
    ContractNotDeployed {
        /// The network identifier that has no registered deployment.
        network: String,
    },

    /// A post ID was outside `[0, count)` at call time, usually a race
    /// with a concurrent deletion. Recoverable: skip the item or refresh.
    #[error("Post {id} not found")]
    PostNotFound {
        /// The post ID that could not be read.
        id: u64,
    },

    /// A mutating call failed to submit or confirm. The remote state is
    /// assumed unchanged; the cause is surfaced verbatim and never
    /// retried automatically (mutations are not idempotent).
    #[error("Transaction failed: {0}")]
    Transaction(String),

    /// Another mutating or refreshing operation is already in flight.
    /// Recoverable: retry after the current operation settles.
    #[error("Operation already in progress")]
    OperationInProgress,

    /// The session has no resolved identity yet; bootstrap must complete
    /// before contract-side operations.
    #[error("Session not bootstrapped")]
    NotBootstrapped,

    /// Provider transport or read errors outside the taxonomy above.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Deployment artifact parsing or lookup errors.
    #[error("Deployment artifact error: {0}")]
    Artifact(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChainpressError {
    /// Creates a new no-provider error.
    pub fn no_provider<T: ToString>(msg: T) -> Self {
        Self::NoProvider(msg.to_string())
    }

    /// Creates a new transaction error.
    pub fn transaction<T: ToString>(msg: T) -> Self {
        Self::Transaction(msg.to_string())
    }

    /// Creates a new provider error.
    pub fn provider<T: ToString>(msg: T) -> Self {
        Self::Provider(msg.to_string())
    }

    /// Creates a new artifact error.
    pub fn artifact<T: ToString>(msg: T) -> Self {
        Self::Artifact(msg.to_string())
    }

    /// Creates a new invalid input error.
    pub fn invalid_input<T: ToString>(msg: T) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Creates a new serialization error.
    pub fn serialization<T: ToString>(msg: T) -> Self {
        Self::Serialization(msg.to_string())
    }

    /// Returns true if the session cannot continue after this error.
    ///
    /// Only a missing provider is fatal; everything else degrades the
    /// snapshot or aborts a single operation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoProvider(_))
    }
}
