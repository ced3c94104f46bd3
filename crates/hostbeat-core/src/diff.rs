//! Field-level change detection between consecutive snapshots

use crate::snapshot::{FieldValue, Snapshot, SnapshotField};

/// The subset of fields whose value differs between two consecutive snapshots
///
/// Entries keep snapshot field declaration order, so the reporter emits
/// changes in a stable, documented order. A change set is ephemeral: it is
/// produced by [`diff`], handed to the reporter and dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    entries: Vec<(SnapshotField, FieldValue)>,
}

impl ChangeSet {
    /// True when no field changed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of changed fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate changed fields in snapshot field order
    pub fn iter(&self) -> impl Iterator<Item = (SnapshotField, &FieldValue)> {
        self.entries.iter().map(|(field, value)| (*field, value))
    }

    /// New value for a field, if it changed
    #[must_use]
    pub fn get(&self, field: SnapshotField) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value)
    }
}

/// Compare two consecutive snapshots field by field
///
/// Equality is structural: value equality for scalars, set equality for
/// `installed_packages`. Deterministic: the same pair of snapshots always
/// yields the same change set.
#[must_use]
pub fn diff(previous: &Snapshot, current: &Snapshot) -> ChangeSet {
    let mut entries = Vec::new();

    for field in SnapshotField::ALL {
        let new_value = field.value_of(current);
        if field.value_of(previous) != new_value {
            entries.push((field, new_value));
        }
    }

    ChangeSet { entries }
}
