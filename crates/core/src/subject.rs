use std::{
    fmt,
    io::{self, Write},
};

use crate::{Error, Snapshot, StateHolder};

/// Holds the live, mutable state whose history is being tracked.
///
/// A subject starts out unset and receives its value through [`set_state`].
/// It can export its current value as a [`Snapshot`] and overwrite it again
/// from one. In both directions the value is deep-copied, so the live state
/// and every snapshot stay independent of each other.
///
/// [`set_state`]: Subject::set_state
#[derive(Debug)]
pub struct Subject<T> {
    state: Option<T>,
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self { state: None }
    }
}

impl<T> Subject<T> {
    /// Creates a subject with no state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subject holding `state`.
    #[must_use]
    pub fn with_state(state: T) -> Self {
        Self { state: Some(state) }
    }

    /// Replaces the current state with `state`, taking ownership of it.
    pub fn set_state(&mut self, state: T) {
        self.state = Some(state);
    }

    /// Returns the current state, if one has been set.
    #[must_use]
    pub fn state(&self) -> Option<&T> {
        self.state.as_ref()
    }

    /// Returns mutable access to the current state, if one has been set.
    pub fn state_mut(&mut self) -> Option<&mut T> {
        self.state.as_mut()
    }

    /// Removes and returns the current state, leaving the subject unset.
    pub fn take_state(&mut self) -> Option<T> {
        self.state.take()
    }

    /// Returns `true` if the subject currently holds a state.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.state.is_some()
    }
}

impl<T: StateHolder> Subject<T> {
    /// Captures the current state in a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsetState`] if no state has been set.
    pub fn create_snapshot(&self) -> Result<Snapshot<T>, Error> {
        let state = self.state.as_ref().ok_or(Error::UnsetState)?;
        tracing::trace!("capturing subject state");
        Ok(Snapshot::new(state))
    }

    /// Replaces the current state with a deep copy of the snapshot's state.
    pub fn restore_from_snapshot(&mut self, snapshot: &Snapshot<T>) {
        self.state = Some(snapshot.to_state());
    }
}

impl<T: fmt::Display> Subject<T> {
    /// Writes the current state followed by a newline.
    ///
    /// An unset subject writes an empty line.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the writer.
    pub fn write_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Prints the current state to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn show(&self) -> io::Result<()> {
        self.write_state(&mut io::stdout().lock())
    }
}

impl<T: fmt::Display> fmt::Display for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => fmt::Display::fmt(state, f),
            None => Ok(()),
        }
    }
}
