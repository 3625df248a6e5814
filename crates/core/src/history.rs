use std::slice;

use crate::{Error, Snapshot, StateHolder, Subject};

/// An append-only log of snapshots taken from a [`Subject`].
///
/// Snapshots are stored in save order and indexed from zero. A history is an
/// ordinary owned value: create one per subject (or per group of subjects)
/// that needs checkpointing and pass it where it is needed.
///
/// The log grows without bound. There is no deletion or eviction.
#[derive(Debug)]
pub struct History<T> {
    snapshots: Vec<Snapshot<T>>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }
}

impl<T> History<T> {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of saved snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been saved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Snapshot<T>> {
        self.snapshots.get(index)
    }

    /// Returns the most recently saved snapshot, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot<T>> {
        self.snapshots.last()
    }

    /// Iterates over the snapshots in save order.
    pub fn iter(&self) -> slice::Iter<'_, Snapshot<T>> {
        self.snapshots.iter()
    }
}

impl<T: StateHolder> History<T> {
    /// Captures the subject's current state and appends it to the log.
    ///
    /// Returns the index of the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsetState`] if the subject has no state.
    pub fn save(&mut self, subject: &Subject<T>) -> Result<usize, Error> {
        let snapshot = subject.create_snapshot()?;
        let index = self.snapshots.len();
        self.snapshots.push(snapshot);

        tracing::debug!(index, len = self.snapshots.len(), "saved snapshot");
        Ok(index)
    }

    /// Restores the subject to the snapshot saved at `index`.
    ///
    /// The subject is left untouched when the index is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than [`len`].
    ///
    /// [`len`]: History::len
    pub fn restore(&self, subject: &mut Subject<T>, index: usize) -> Result<(), Error> {
        let len = self.snapshots.len();
        let Some(snapshot) = self.snapshots.get(index) else {
            tracing::warn!(index, len, "restore requested past end of history");
            return Err(Error::OutOfRange { index, len });
        };

        subject.restore_from_snapshot(snapshot);
        tracing::debug!(index, len, "restored snapshot");
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a Snapshot<T>;
    type IntoIter = slice::Iter<'a, Snapshot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
