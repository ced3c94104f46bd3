//! Error types for hostbeat-pkg

use thiserror::Error;

/// Errors that can occur while listing the installed package inventory
#[derive(Error, Debug, Clone)]
pub enum InventoryError {
    /// The package query tool is not installed on this host
    #[error("package tool not found: {0}")]
    ToolMissing(String),

    /// The package query ran but exited non-zero
    #[error("package query failed: {status} - {message}")]
    QueryFailed {
        /// Exit status
        status: i32,
        /// stderr of the failed query
        message: String,
    },

    /// I/O error while running the package query
    #[error("I/O error: {0}")]
    Io(String),
}

impl InventoryError {
    /// Check if the error means the tool needs to be installed
    #[must_use]
    pub fn tool_missing(&self) -> bool {
        matches!(self, InventoryError::ToolMissing(_))
    }
}
