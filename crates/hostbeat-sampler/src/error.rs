//! Error types for hostbeat-sampler

use hostbeat_pkg::InventoryError;
use thiserror::Error;

/// Errors that can fail a sampling attempt
///
/// Any variant discards the whole attempt; a snapshot is never partially
/// populated.
#[derive(Error, Debug, Clone)]
pub enum SamplingError {
    /// The host's primary address could not be resolved
    #[error("address resolution failed: {0}")]
    Address(String),

    /// An OS query (hostname, memory, disk, OS identity) failed
    #[error("host probe failed: {0}")]
    Probe(String),

    /// The package inventory source failed and the policy says fail
    #[error("package inventory unavailable: {0}")]
    Inventory(#[from] InventoryError),
}
