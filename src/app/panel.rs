//! The dismissable panel lifecycle.
//!
//! At most one panel is alive at any time, and the save hook that keeps a
//! panel in sync with the buffer lives exactly as long as that panel. Both
//! invariants are enforced here: opening a panel dismisses whatever was open,
//! and dismissing clears the hook.

/// The panel-producing tool registered to re-render after each save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveHook {
    MarkdownPreview,
    StyleLint,
}

/// A single transient overlay holding a tool's rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: &'static str,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct PanelManager {
    panel: Option<Panel>,
    save_hook: Option<SaveHook>,
}

impl PanelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an empty panel with the given id, dismissing any existing panel
    /// (and with it, its save hook) first.
    pub fn open(&mut self, id: &'static str) {
        self.dismiss_all();
        self.panel = Some(Panel {
            id,
            content: String::new(),
        });
    }

    /// Remove any live panel and clear the save hook. Idempotent.
    pub fn dismiss_all(&mut self) {
        self.panel = None;
        self.save_hook = None;
    }

    /// Replace the content of the live panel, if its id matches.
    pub fn set_content(&mut self, id: &str, content: String) {
        if let Some(panel) = &mut self.panel {
            if panel.id == id {
                panel.content = content;
            }
        }
    }

    pub fn install_hook(&mut self, hook: SaveHook) {
        self.save_hook = Some(hook);
    }

    pub fn save_hook(&self) -> Option<SaveHook> {
        self.save_hook
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_empty_panel() {
        let mut panels = PanelManager::new();
        panels.open("markdownOutput");
        let panel = panels.panel().unwrap();
        assert_eq!(panel.id, "markdownOutput");
        assert_eq!(panel.content, "");
    }

    #[test]
    fn test_at_most_one_panel() {
        let mut panels = PanelManager::new();
        panels.open("markdownOutput");
        panels.open("writeGoodOutput");
        assert_eq!(panels.panel().unwrap().id, "writeGoodOutput");
    }

    #[test]
    fn test_open_clears_previous_hook() {
        let mut panels = PanelManager::new();
        panels.open("markdownOutput");
        panels.install_hook(SaveHook::MarkdownPreview);
        panels.open("writeGoodOutput");
        assert_eq!(panels.save_hook(), None);
    }

    #[test]
    fn test_dismiss_all_clears_panel_and_hook() {
        let mut panels = PanelManager::new();
        panels.open("markdownOutput");
        panels.install_hook(SaveHook::MarkdownPreview);
        panels.dismiss_all();
        assert!(panels.panel().is_none());
        assert_eq!(panels.save_hook(), None);
    }

    #[test]
    fn test_dismiss_all_is_idempotent() {
        let mut panels = PanelManager::new();
        panels.dismiss_all();
        panels.dismiss_all();
        assert!(panels.panel().is_none());
    }

    #[test]
    fn test_set_content_matches_on_id() {
        let mut panels = PanelManager::new();
        panels.open("markdownOutput");
        panels.set_content("writeGoodOutput", "<p>wrong</p>".to_string());
        assert_eq!(panels.panel().unwrap().content, "");
        panels.set_content("markdownOutput", "<p>right</p>".to_string());
        assert_eq!(panels.panel().unwrap().content, "<p>right</p>");
    }

    #[test]
    fn test_set_content_without_panel_is_noop() {
        let mut panels = PanelManager::new();
        panels.set_content("markdownOutput", "<p>x</p>".to_string());
        assert!(panels.panel().is_none());
    }
}
