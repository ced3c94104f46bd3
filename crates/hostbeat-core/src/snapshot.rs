//! Snapshot type and the per-field comparator table

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable point-in-time capture of host facts
///
/// A snapshot is either fully populated or the sampling attempt that produced
/// it has failed as a whole; partial snapshots do not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Primary resolved network address of the host
    pub ip_address: String,
    /// Hostname
    pub hostname: String,
    /// Total memory in bytes
    pub total_memory: u64,
    /// Logical core count
    pub cpu_count: u64,
    /// Total capacity of the root filesystem in bytes
    pub disk_space: u64,
    /// OS family name
    pub os: String,
    /// Kernel/release identifier
    pub os_version: String,
    /// Installed package identifiers
    pub installed_packages: BTreeSet<String>,
    /// When this snapshot was taken (capture metadata, never compared)
    pub sampled_at: DateTime<Utc>,
}

/// The comparable fields of a [`Snapshot`], in declaration order
///
/// Each field's comparison semantics is declared once, here: scalar fields
/// compare by value, `installed_packages` by set membership. Both the change
/// detector and its tests iterate [`SnapshotField::ALL`] so reporting order
/// always matches snapshot field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotField {
    IpAddress,
    Hostname,
    TotalMemory,
    CpuCount,
    DiskSpace,
    Os,
    OsVersion,
    InstalledPackages,
}

impl SnapshotField {
    /// All comparable fields, in snapshot declaration order
    pub const ALL: [SnapshotField; 8] = [
        SnapshotField::IpAddress,
        SnapshotField::Hostname,
        SnapshotField::TotalMemory,
        SnapshotField::CpuCount,
        SnapshotField::DiskSpace,
        SnapshotField::Os,
        SnapshotField::OsVersion,
        SnapshotField::InstalledPackages,
    ];

    /// Wire name of the field, as used in report payloads
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SnapshotField::IpAddress => "ip_address",
            SnapshotField::Hostname => "hostname",
            SnapshotField::TotalMemory => "total_memory",
            SnapshotField::CpuCount => "cpu_count",
            SnapshotField::DiskSpace => "disk_space",
            SnapshotField::Os => "os",
            SnapshotField::OsVersion => "os_version",
            SnapshotField::InstalledPackages => "installed_packages",
        }
    }

    /// Extract this field's value from a snapshot
    #[must_use]
    pub fn value_of(self, snapshot: &Snapshot) -> FieldValue {
        match self {
            SnapshotField::IpAddress => FieldValue::Text(snapshot.ip_address.clone()),
            SnapshotField::Hostname => FieldValue::Text(snapshot.hostname.clone()),
            SnapshotField::TotalMemory => FieldValue::Unsigned(snapshot.total_memory),
            SnapshotField::CpuCount => FieldValue::Unsigned(snapshot.cpu_count),
            SnapshotField::DiskSpace => FieldValue::Unsigned(snapshot.disk_space),
            SnapshotField::Os => FieldValue::Text(snapshot.os.clone()),
            SnapshotField::OsVersion => FieldValue::Text(snapshot.os_version.clone()),
            SnapshotField::InstalledPackages => {
                FieldValue::Packages(snapshot.installed_packages.clone())
            }
        }
    }
}

impl std::fmt::Display for SnapshotField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of a single snapshot field
///
/// Serializes untagged, so a report payload body reads `{"hostname": "h1"}`
/// or `{"installed_packages": ["curl", "vim"]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Textual fields (address, hostname, OS identity)
    Text(String),
    /// Numeric fields (memory, cores, disk capacity)
    Unsigned(u64),
    /// The installed package set
    Packages(BTreeSet<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            ip_address: "192.0.2.10".to_string(),
            hostname: "node-1".to_string(),
            total_memory: 8_589_934_592,
            cpu_count: 4,
            disk_space: 512_000_000_000,
            os: "Debian GNU/Linux".to_string(),
            os_version: "6.1.0-18-amd64".to_string(),
            installed_packages: ["vim", "curl"].iter().map(ToString::to_string).collect(),
            sampled_at: Utc::now(),
        }
    }

    #[test]
    fn test_field_table_covers_every_field() {
        let names: Vec<&str> = SnapshotField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            [
                "ip_address",
                "hostname",
                "total_memory",
                "cpu_count",
                "disk_space",
                "os",
                "os_version",
                "installed_packages",
            ]
        );
    }

    #[test]
    fn test_value_extraction() {
        let snap = snapshot();

        assert_eq!(
            SnapshotField::Hostname.value_of(&snap),
            FieldValue::Text("node-1".to_string())
        );
        assert_eq!(
            SnapshotField::CpuCount.value_of(&snap),
            FieldValue::Unsigned(4)
        );
        assert_eq!(
            SnapshotField::InstalledPackages.value_of(&snap),
            FieldValue::Packages(snap.installed_packages.clone())
        );
    }

    #[test]
    fn test_field_value_serializes_untagged() {
        let text = serde_json::to_value(FieldValue::Text("node-1".to_string())).unwrap();
        assert_eq!(text, serde_json::json!("node-1"));

        let num = serde_json::to_value(FieldValue::Unsigned(2000)).unwrap();
        assert_eq!(num, serde_json::json!(2000));

        let packages: BTreeSet<String> =
            ["vim", "curl"].iter().map(ToString::to_string).collect();
        let set = serde_json::to_value(FieldValue::Packages(packages)).unwrap();
        // BTreeSet serializes in sorted order
        assert_eq!(set, serde_json::json!(["curl", "vim"]));
    }
}
