//! Agent Config Editor Library
//!
//! Draft/snapshot editing of the capture agent's configuration document:
//! section editors stage changes on a draft, a dirty flag tracks divergence
//! from the persisted snapshot, and commits are confirmed only by the
//! store's echo.

rust_i18n::i18n!("locales", fallback = "en-us");

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod settings;
pub mod state;
pub mod theme;
pub mod validation;
