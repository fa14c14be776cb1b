//! State synchronization between the local view and the remote ledger.
//!
//! The coordinator is the only writer of the published snapshot; every
//! other component returns data to it. See `coordinator` for the ordering
//! and single-in-flight guarantees.

pub mod coordinator;
pub mod snapshot;

pub use coordinator::{MutationOutcome, SyncCoordinator};
pub use snapshot::{ApplicationSnapshot, ContractHandle, SyncPhase};
