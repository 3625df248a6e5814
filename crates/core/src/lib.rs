//! Core types for capturing and restoring state.
//!
//! This crate separates the value being tracked from the code that keeps its
//! history:
//!
//! - [`StateHolder`] — a value that can produce a fully independent copy
//! - [`Snapshot`] — an immutable, isolated copy of a value at one point in time
//! - [`Subject`] — holds the live value and converts it to and from snapshots
//! - [`History`] — an append-only log of snapshots with save and restore
//!
//! # Example
//!
//! ```rust
//! use memento_core::{History, Subject};
//!
//! let mut subject = Subject::with_state(String::from("draft"));
//! let mut history = History::new();
//!
//! history.save(&subject)?;
//! subject.set_state(String::from("final"));
//! history.save(&subject)?;
//!
//! history.restore(&mut subject, 0)?;
//! assert_eq!(subject.state().map(String::as_str), Some("draft"));
//! # Ok::<(), memento_core::Error>(())
//! ```

mod error;
mod history;
mod snapshot;
mod state;
mod subject;

pub use error::Error;
pub use history::History;
pub use snapshot::Snapshot;
pub use state::StateHolder;
pub use subject::Subject;
