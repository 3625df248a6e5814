use crate::StateHolder;

/// An immutable copy of a state value captured at one point in time.
///
/// A snapshot deep-copies its input on construction and never hands out
/// mutable access afterward, so its contents cannot change once created.
/// Snapshots are normally produced by [`Subject::create_snapshot`] and owned
/// by a [`History`].
///
/// [`Subject::create_snapshot`]: crate::Subject::create_snapshot
/// [`History`]: crate::History
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot<T> {
    state: T,
}

impl<T: StateHolder> Snapshot<T> {
    /// Creates a snapshot holding a deep copy of `state`.
    #[must_use]
    pub fn new(state: &T) -> Self {
        Self {
            state: state.deep_copy(),
        }
    }

    /// Returns a fresh deep copy of the stored state.
    ///
    /// The returned value is owned by the caller and may be mutated freely.
    #[must_use]
    pub fn to_state(&self) -> T {
        self.state.deep_copy()
    }

    /// Consumes the snapshot and returns the stored state.
    #[must_use]
    pub fn into_state(self) -> T {
        self.state
    }
}

impl<T> Snapshot<T> {
    /// Returns a shared reference to the stored state.
    #[must_use]
    pub fn state(&self) -> &T {
        &self.state
    }
}
