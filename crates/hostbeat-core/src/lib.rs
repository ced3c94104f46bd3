//! hostbeat-core: Snapshot data model and change detection
//!
//! Defines the host fact snapshot, the per-field comparator table and the
//! diff between consecutive snapshots, plus the agent lifecycle state machine.

pub mod diff;
pub mod snapshot;
pub mod state;

pub use diff::{ChangeSet, diff};
pub use snapshot::{FieldValue, Snapshot, SnapshotField};
pub use state::AgentState;
