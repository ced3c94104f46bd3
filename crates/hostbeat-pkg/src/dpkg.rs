//! dpkg package inventory (Debian/Ubuntu)

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::InventoryError;
use crate::runner::{CommandRunner, LocalRunner};
use crate::traits::PackageInventory;

/// Package inventory backed by `dpkg-query`
pub struct DpkgInventory {
    /// Runner for the dpkg-query invocation
    runner: Arc<dyn CommandRunner>,
}

impl DpkgInventory {
    /// Create a dpkg inventory over a custom runner
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Create a dpkg inventory querying the local host
    #[must_use]
    pub fn local() -> Self {
        Self::new(Arc::new(LocalRunner::new()))
    }

    /// Parse dpkg-query output, one package identifier per line
    fn parse_package_lines(output: &str) -> BTreeSet<String> {
        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

#[async_trait]
impl PackageInventory for DpkgInventory {
    #[instrument(skip(self))]
    async fn list_packages(&self) -> Result<BTreeSet<String>, InventoryError> {
        let output = self
            .runner
            .run("dpkg-query", &["-W", "-f=${binary:Package}\n"])
            .await?;

        if !output.success() {
            return Err(InventoryError::QueryFailed {
                status: output.status,
                message: output.stderr,
            });
        }

        let packages = Self::parse_package_lines(&output.stdout);
        debug!(count = packages.len(), "listed installed packages");

        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CommandOutput;

    struct ScriptedRunner {
        output: CommandOutput,
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(
            &self,
            _program: &str,
            _args: &[&str],
        ) -> Result<CommandOutput, InventoryError> {
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_parse_package_lines() {
        let output = "adduser\napt\nbase-files\nvim\n";

        let packages = DpkgInventory::parse_package_lines(output);

        assert_eq!(packages.len(), 4);
        assert!(packages.contains("vim"));
        assert!(packages.contains("base-files"));
    }

    #[test]
    fn test_parse_skips_blank_lines_and_collapses_duplicates() {
        let output = "vim\n\nvim\n  \ncurl\n";

        let packages = DpkgInventory::parse_package_lines(output);

        assert_eq!(packages.len(), 2);
    }

    #[tokio::test]
    async fn test_list_packages() {
        let inventory = DpkgInventory::new(Arc::new(ScriptedRunner {
            output: CommandOutput {
                status: 0,
                stdout: "curl\nvim\n".to_string(),
                stderr: String::new(),
            },
        }));

        let packages = inventory.list_packages().await.unwrap();

        assert_eq!(packages.len(), 2);
        assert!(packages.contains("curl"));
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_query_failure() {
        let inventory = DpkgInventory::new(Arc::new(ScriptedRunner {
            output: CommandOutput {
                status: 2,
                stdout: String::new(),
                stderr: "dpkg-query: error".to_string(),
            },
        }));

        let result = inventory.list_packages().await;

        assert!(matches!(
            result,
            Err(InventoryError::QueryFailed { status: 2, .. })
        ));
    }
}
