use super::buffer::Buffer;
use super::panel::{PanelManager, SaveHook};
use super::persistence::{DisplayMode, LoadedState};
use super::reporter::ErrorReporter;
use super::tools::{lint, markdown};

/// The one live editing session: buffer, display mode, panel and banner
/// state, constructed at startup from persisted values and passed by
/// reference into every component call.
pub struct Workspace {
    pub buffer: Buffer,
    pub mode: DisplayMode,
    pub panels: PanelManager,
    pub reporter: ErrorReporter,
    renderer: markdown::Renderer,
}

impl Workspace {
    pub fn new(loaded: LoadedState) -> Self {
        Self {
            buffer: loaded.text.map(Buffer::with_text).unwrap_or_default(),
            mode: loaded.mode,
            panels: PanelManager::new(),
            reporter: ErrorReporter::new(),
            renderer: markdown::Renderer::new(),
        }
    }

    /// Re-render the panel owned by `hook` from the current buffer.
    pub fn refresh_panel(&mut self, hook: SaveHook) {
        let (id, html) = match hook {
            SaveHook::MarkdownPreview => {
                (markdown::PANEL_ID, self.renderer.render(&self.buffer.text))
            }
            SaveHook::StyleLint => (lint::PANEL_ID, lint::annotate(&self.buffer.text)),
        };
        self.panels.set_content(id, html);
    }

    /// Run the registered save hook, if any.
    pub fn run_save_hook(&mut self) {
        if let Some(hook) = self.panels.save_hook() {
            self.refresh_panel(hook);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_persisted_text() {
        let workspace = Workspace::new(LoadedState {
            text: Some("saved".to_string()),
            mode: DisplayMode::Night,
        });
        assert_eq!(workspace.buffer.text, "saved");
        assert_eq!(workspace.buffer.cursor, 0);
        assert_eq!(workspace.mode, DisplayMode::Night);
    }

    #[test]
    fn test_new_without_persisted_text_leaves_buffer_empty() {
        let workspace = Workspace::new(LoadedState {
            text: None,
            mode: DisplayMode::Day,
        });
        assert_eq!(workspace.buffer.text, "");
    }

    #[test]
    fn test_run_save_hook_without_panel_is_noop() {
        let mut workspace = Workspace::new(LoadedState {
            text: Some("text".to_string()),
            mode: DisplayMode::Day,
        });
        workspace.run_save_hook();
        assert!(workspace.panels.panel().is_none());
    }

    #[test]
    fn test_refresh_markdown_panel() {
        let mut workspace = Workspace::new(LoadedState {
            text: Some("*em*".to_string()),
            mode: DisplayMode::Day,
        });
        workspace.panels.open(markdown::PANEL_ID);
        workspace.refresh_panel(SaveHook::MarkdownPreview);
        assert!(workspace
            .panels
            .panel()
            .unwrap()
            .content
            .contains("<em>em</em>"));
    }
}
