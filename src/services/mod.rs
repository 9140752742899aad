//! Services Layer
//!
//! Collaborators behind the editor: where snapshots come from and where
//! committed documents go.

mod file_store;
mod store;

pub use file_store::FileStore;
pub use store::{ConfigStore, MemoryStore, Persistence, WriteMode};
