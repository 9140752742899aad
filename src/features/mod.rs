//! Features - Section Editors
//!
//! One editor per document section. An editor sees a read-only view of its
//! section and turns a field edit into a replacement section; it never holds
//! the document. Editor-local state (validity flags, expanded panels) stays
//! out of the document.

pub mod capture;
pub mod discord;
pub mod general;
pub mod shop;
pub mod stats;

use crate::domain::Section;

pub use capture::{CatchEdit, CatchEditor};
pub use discord::{DiscordEdit, DiscordEditor};
pub use general::{GeneralEdit, GeneralEditor};
pub use shop::{ShopEdit, ShopEditor};
pub use stats::{StatsEdit, StatsEditor};

/// Field-level editing of one section
pub trait SectionEditor {
    type Section: Section;
    type Edit;

    /// Copy `current`, overwrite the field named by `edit`, return the copy
    fn apply(&mut self, current: &Self::Section, edit: Self::Edit) -> Self::Section;
}
