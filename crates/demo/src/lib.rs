//! Demonstration of saving and restoring a record's state.
//!
//! [`run`] drives a single [`Subject`] through three saved states and then
//! rolls it back to the first one, printing the subject after every step.
//! The `memento-demo` binary runs it against stdout.

use std::{fmt, io::Write};

use memento_core::{History, StateHolder, Subject};
use thiserror::Error;

/// A small record used as the tracked state in the demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i32,
    pub name: String,
}

impl Record {
    /// Creates a record with the given id and name.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl StateHolder for Record {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id = {} Name = {}", self.id, self.name)
    }
}

/// Errors that can occur while running the demonstration.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("history operation failed: {0}")]
    History(#[from] memento_core::Error),

    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

/// Runs the demonstration, writing one line per step to `out`.
///
/// Three records are set and saved in turn, then the subject is restored to
/// the first saved snapshot. Returns the history so callers can inspect it.
///
/// # Errors
///
/// Returns an error if a history operation fails or `out` cannot be written.
pub fn run<W: Write>(out: &mut W) -> Result<History<Record>, DemoError> {
    let mut subject = Subject::new();
    let mut history = History::new();

    for id in 1..=3 {
        subject.set_state(Record::new(id, format!("Object {id}")));
        history.save(&subject)?;
        subject.write_state(out)?;
    }

    history.restore(&mut subject, 0)?;
    subject.write_state(out)?;

    tracing::info!(saved = history.len(), "demonstration complete");
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_display_format() {
        let record = Record::new(4, "Object 4");
        assert_eq!(record.to_string(), "Id = 4 Name = Object 4");
    }

    #[test]
    fn record_deep_copy_is_independent() {
        let original = Record::new(1, "one");
        let mut copy = original.deep_copy();
        copy.name.push_str(" (edited)");

        assert_eq!(original.name, "one");
        assert_eq!(copy, Record::new(1, "one (edited)"));
    }

    #[test]
    fn run_saves_three_snapshots() {
        let mut out = Vec::new();
        let history = run(&mut out).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.latest().map(|s| s.state().name.as_str()),
            Some("Object 3")
        );
    }
}
