//! Scratchpad - a minimalist plain-text scratchpad with line-aware editing,
//! cross-session persistence and a small set of pluggable text tools.
//!
//! The crate is split into two layers:
//!
//! - [`app`] - the editing and tool-orchestration engine. Pure logic, no
//!   widget types in its data model, unit-tested headless.
//! - [`ui`] - the FLTK surface: window construction and theming.
//!
//! The binary in `src/main.rs` wires the two together through an
//! `fltk::app::channel` message loop.

pub mod app;
#[cfg(feature = "gui")]
pub mod ui;
