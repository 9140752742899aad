//! Application Layer
//!
//! Shell startup, command parsing, the editing session and the page model.

pub mod application;
pub mod command;
pub mod page;
pub mod session;
