//! Sampler trait

use async_trait::async_trait;
use hostbeat_core::Snapshot;

use crate::error::SamplingError;

/// Source of host state snapshots
#[async_trait]
pub trait Sampler: Send + Sync {
    /// Read current host facts into a fresh snapshot
    ///
    /// # Errors
    /// Returns an error if any sub-probe (address resolution, memory/CPU/disk
    /// query, OS identification, package inventory) cannot complete. The
    /// attempt is discarded as a whole; no partial snapshot is returned.
    async fn sample(&self) -> Result<Snapshot, SamplingError>;
}
