//! Domain - Configuration Document Model
//!
//! The typed document, its sections and the factory defaults.

pub mod config;
pub mod defaults;
pub mod section;

pub use config::*;
pub use defaults::factory_document;
pub use section::{Section, SectionKey};
