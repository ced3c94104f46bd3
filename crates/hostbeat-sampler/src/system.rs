//! System sampler backed by sysinfo

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use hostbeat_core::Snapshot;
use hostbeat_pkg::{InventoryPolicy, PackageInventory};
use sysinfo::{Disks, System};
use tracing::{info, instrument, warn};

use crate::error::SamplingError;
use crate::traits::Sampler;

/// Samples the local host
///
/// Hardware and OS identity come from `sysinfo`, the primary address from
/// `local-ip-address`, the package set from the injected inventory source.
pub struct SystemSampler {
    /// Installed package source
    inventory: Arc<dyn PackageInventory>,
    /// What to do when the inventory source fails
    policy: InventoryPolicy,
}

impl SystemSampler {
    /// Create a sampler over a package inventory source
    pub fn new(inventory: Arc<dyn PackageInventory>, policy: InventoryPolicy) -> Self {
        Self { inventory, policy }
    }

    /// Collect the package set, applying the configured failure policy
    async fn collect_packages(&self) -> Result<BTreeSet<String>, SamplingError> {
        match self.inventory.list_packages().await {
            Ok(packages) => Ok(packages),
            Err(e) => match self.policy {
                InventoryPolicy::FailSample => Err(e.into()),
                InventoryPolicy::EmptySet => {
                    warn!(error = %e, "package inventory unavailable, substituting empty set");
                    Ok(BTreeSet::new())
                }
            },
        }
    }

    /// Resolve the host's primary address
    fn resolve_address() -> Result<String, SamplingError> {
        local_ip_address::local_ip()
            .map(|addr| addr.to_string())
            .map_err(|e| SamplingError::Address(e.to_string()))
    }

    /// Total capacity of the filesystem mounted at `/`
    fn root_disk_space() -> Result<u64, SamplingError> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))
            .map(sysinfo::Disk::total_space)
            .ok_or_else(|| SamplingError::Probe("root filesystem not found".to_string()))
    }
}

#[async_trait]
impl Sampler for SystemSampler {
    #[instrument(skip(self))]
    async fn sample(&self) -> Result<Snapshot, SamplingError> {
        let installed_packages = self.collect_packages().await?;

        let mut sys = System::new_all();
        sys.refresh_all();

        let hostname = System::host_name()
            .ok_or_else(|| SamplingError::Probe("hostname unavailable".to_string()))?;
        let os = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
        let os_version = System::kernel_version()
            .ok_or_else(|| SamplingError::Probe("kernel version unavailable".to_string()))?;

        let snapshot = Snapshot {
            ip_address: Self::resolve_address()?,
            hostname,
            total_memory: sys.total_memory(),
            cpu_count: sys.cpus().len() as u64,
            disk_space: Self::root_disk_space()?,
            os,
            os_version,
            installed_packages,
            sampled_at: Utc::now(),
        };

        info!(
            hostname = %snapshot.hostname,
            ip_address = %snapshot.ip_address,
            cpu_count = snapshot.cpu_count,
            total_memory = snapshot.total_memory,
            disk_space = snapshot.disk_space,
            packages = snapshot.installed_packages.len(),
            "sampled host state"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostbeat_pkg::InventoryError;

    struct FailingInventory;

    #[async_trait]
    impl PackageInventory for FailingInventory {
        async fn list_packages(&self) -> Result<BTreeSet<String>, InventoryError> {
            Err(InventoryError::ToolMissing("dpkg-query".to_string()))
        }
    }

    struct FixedInventory;

    #[async_trait]
    impl PackageInventory for FixedInventory {
        async fn list_packages(&self) -> Result<BTreeSet<String>, InventoryError> {
            Ok(["vim", "curl"].iter().map(ToString::to_string).collect())
        }
    }

    #[tokio::test]
    async fn test_fail_sample_policy_propagates_inventory_error() {
        let sampler =
            SystemSampler::new(Arc::new(FailingInventory), InventoryPolicy::FailSample);

        let result = sampler.collect_packages().await;

        assert!(matches!(result, Err(SamplingError::Inventory(_))));
    }

    #[tokio::test]
    async fn test_empty_set_policy_substitutes() {
        let sampler = SystemSampler::new(Arc::new(FailingInventory), InventoryPolicy::EmptySet);

        let packages = sampler.collect_packages().await.unwrap();

        assert!(packages.is_empty());
    }

    #[tokio::test]
    async fn test_working_inventory_is_passed_through() {
        let sampler = SystemSampler::new(Arc::new(FixedInventory), InventoryPolicy::FailSample);

        let packages = sampler.collect_packages().await.unwrap();

        assert_eq!(packages.len(), 2);
    }

    #[tokio::test]
    #[ignore = "requires a routable host environment"]
    async fn test_sample_local_host() {
        let sampler = SystemSampler::new(Arc::new(FixedInventory), InventoryPolicy::FailSample);

        let snapshot = sampler.sample().await.unwrap();

        assert!(!snapshot.hostname.is_empty());
        assert!(snapshot.total_memory > 0);
        assert!(snapshot.cpu_count > 0);
    }
}
