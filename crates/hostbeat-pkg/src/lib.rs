//! hostbeat-pkg: Package inventory source
//!
//! Provides the `PackageInventory` trait, the dpkg-based implementation and
//! the policy applied when the package database is unavailable.

pub mod dpkg;
pub mod error;
pub mod runner;
pub mod traits;

pub use dpkg::DpkgInventory;
pub use error::InventoryError;
pub use runner::{CommandOutput, CommandRunner, LocalRunner};
pub use traits::{InventoryPolicy, PackageInventory};
