//! State - Editing Session State
//!
//! The controller owning snapshot and draft, and the dirty tracker it
//! recomputes on every change.

pub mod config_state;
pub mod dirty;

pub use config_state::{CommitOutcome, CommitTicket, ConfigController, SnapshotOutcome};
pub use dirty::{changed_sections, is_dirty};
