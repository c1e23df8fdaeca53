//! Loading and saving the scratchpad across sessions.
//!
//! The adapter sits between the editing engine and the [`KeyValueStore`].
//! Saving is keystroke-granular and unconditional; after each write the
//! workspace's registered save hook runs synchronously so any open panel is
//! re-rendered from the new content within the same event turn.

use super::store::KeyValueStore;
use super::workspace::Workspace;

/// Store key for the scratchpad text.
pub const TEXT_KEY: &str = "scratchpad";
/// Store key for the display mode.
pub const MODE_KEY: &str = "mode";

/// The binary day/night presentation state, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Day,
    Night,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Day => DisplayMode::Night,
            DisplayMode::Night => DisplayMode::Day,
        }
    }

    pub fn as_store_value(self) -> &'static str {
        match self {
            DisplayMode::Day => "day",
            DisplayMode::Night => "night",
        }
    }

    /// Parse a stored mode value; anything unrecognized falls back to day.
    pub fn from_store_value(value: &str) -> Self {
        match value {
            "night" => DisplayMode::Night,
            _ => DisplayMode::Day,
        }
    }

    pub fn is_night(self) -> bool {
        self == DisplayMode::Night
    }
}

/// State read from the store at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    /// `None` means the text key was absent: leave the buffer untouched
    /// rather than overwriting it with an empty string.
    pub text: Option<String>,
    pub mode: DisplayMode,
}

pub struct Persistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted text and display mode.
    pub fn load(&self) -> LoadedState {
        LoadedState {
            text: self.store.get(TEXT_KEY),
            mode: self
                .store
                .get(MODE_KEY)
                .map(|v| DisplayMode::from_store_value(&v))
                .unwrap_or_default(),
        }
    }

    /// Write the current text, then run the registered save hook so a live
    /// panel stays in sync with the buffer.
    pub fn save(&mut self, workspace: &mut Workspace) {
        self.store.set(TEXT_KEY, &workspace.buffer.text);
        workspace.run_save_hook();
    }

    /// Persist the display mode.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.store.set(MODE_KEY, mode.as_store_value());
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
