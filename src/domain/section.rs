//! Sections - Typed Slices of the Document
//!
//! Each section has exactly one owning type. Replacing a section writes that
//! slot and nothing else, so an edit in one section can never clobber another.

use std::fmt;

use super::config::{
    CatchConfig, ConfigDocument, DiscordConfig, GeneralConfig, ShopConfig, StatsBallsConfig,
};

/// Names of the document sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    /// language / theme / channel
    General,
    Shop,
    Catch,
    StatsBalls,
    Discord,
}

impl SectionKey {
    pub const ALL: [SectionKey; 5] = [
        SectionKey::General,
        SectionKey::Shop,
        SectionKey::Catch,
        SectionKey::StatsBalls,
        SectionKey::Discord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionKey::General => "general",
            SectionKey::Shop => "shop",
            SectionKey::Catch => "catch",
            SectionKey::StatsBalls => "stats_balls",
            SectionKey::Discord => "discord",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A section type and where it lives in the document
pub trait Section: Clone + PartialEq + fmt::Debug {
    const KEY: SectionKey;

    fn slot(doc: &ConfigDocument) -> &Self;

    fn slot_mut(doc: &mut ConfigDocument) -> &mut Self;
}

macro_rules! impl_section {
    ($ty:ty, $key:expr, $field:ident) => {
        impl Section for $ty {
            const KEY: SectionKey = $key;

            fn slot(doc: &ConfigDocument) -> &Self {
                &doc.$field
            }

            fn slot_mut(doc: &mut ConfigDocument) -> &mut Self {
                &mut doc.$field
            }
        }
    };
}

impl_section!(GeneralConfig, SectionKey::General, general);
impl_section!(ShopConfig, SectionKey::Shop, shop);
impl_section!(CatchConfig, SectionKey::Catch, catch);
impl_section!(StatsBallsConfig, SectionKey::StatsBalls, stats_balls);
impl_section!(DiscordConfig, SectionKey::Discord, discord);

impl ConfigDocument {
    /// Read-only view of one section
    pub fn section<S: Section>(&self) -> &S {
        S::slot(self)
    }

    /// Replace one section wholesale, returning the previous value
    pub fn replace_section<S: Section>(&mut self, value: S) -> S {
        std::mem::replace(S::slot_mut(self), value)
    }

    /// Whether the two documents differ in the given section
    pub fn section_differs(&self, other: &ConfigDocument, key: SectionKey) -> bool {
        match key {
            SectionKey::General => self.general != other.general,
            SectionKey::Shop => self.shop != other.shop,
            SectionKey::Catch => self.catch != other.catch,
            SectionKey::StatsBalls => self.stats_balls != other.stats_balls,
            SectionKey::Discord => self.discord != other.discord,
        }
    }
}
