//! Package inventory traits and failure policy

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Source of the installed software inventory
#[async_trait]
pub trait PackageInventory: Send + Sync {
    /// List the identifiers of all installed packages
    ///
    /// # Errors
    /// Returns an error if the underlying package database or tool is missing
    /// or the query exits non-zero.
    async fn list_packages(&self) -> Result<BTreeSet<String>, InventoryError>;
}

/// Policy applied by the sampler when the package inventory is unavailable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryPolicy {
    /// Fail the whole sampling attempt
    ///
    /// The default: an empty substitute would be indistinguishable from every
    /// package being removed, and would get reported as such.
    #[default]
    FailSample,
    /// Substitute an empty set and log a warning
    EmptySet,
}

impl std::fmt::Display for InventoryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryPolicy::FailSample => write!(f, "fail_sample"),
            InventoryPolicy::EmptySet => write!(f, "empty_set"),
        }
    }
}
