//! The tool registry and activation protocol.
//!
//! Tools are a fixed ordered list created at startup; the toolbar renders one
//! affordance per entry in registry order and clicks dispatch through
//! [`activate`]. Activation and persistence are coupled: every activation
//! ends with a save, whether or not the tool touched the buffer.

pub mod lint;
pub mod markdown;
pub mod reformat;

use super::error::Result;
use super::panel::SaveHook;
use super::persistence::Persistence;
use super::store::KeyValueStore;
use super::workspace::Workspace;

/// A named, user-triggerable unit of buffer inspection or transformation.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub name: &'static str,
    pub kind: ToolKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Re-serialize the buffer as indented JSON.
    Reformat,
    /// Flip the day/night display mode.
    DarkMode,
    /// Toggle the live Markdown preview panel.
    MarkdownPreview,
    /// Toggle the prose-lint panel.
    StyleLint,
}

/// The fixed tool list, in toolbar order.
pub const REGISTRY: [Tool; 4] = [
    Tool { name: "jq", kind: ToolKind::Reformat },
    Tool { name: "dark", kind: ToolKind::DarkMode },
    Tool { name: "md", kind: ToolKind::MarkdownPreview },
    Tool { name: "write-good", kind: ToolKind::StyleLint },
];

/// Run a tool's action, then unconditionally save.
///
/// An action error is caught here: the buffer is guaranteed unmodified by a
/// failing action, and the message lands on the error banner.
pub fn activate<S: KeyValueStore>(
    tool: &Tool,
    workspace: &mut Workspace,
    persistence: &mut Persistence<S>,
) {
    if let Err(err) = run_action(tool.kind, workspace, persistence) {
        workspace.reporter.show(err.to_string());
    }
    persistence.save(workspace);
}

fn run_action<S: KeyValueStore>(
    kind: ToolKind,
    workspace: &mut Workspace,
    persistence: &mut Persistence<S>,
) -> Result<()> {
    match kind {
        ToolKind::Reformat => reformat::apply(&mut workspace.buffer),
        ToolKind::DarkMode => {
            workspace.mode = workspace.mode.toggled();
            persistence.set_mode(workspace.mode);
            Ok(())
        }
        ToolKind::MarkdownPreview => {
            toggle_panel(workspace, SaveHook::MarkdownPreview);
            Ok(())
        }
        ToolKind::StyleLint => {
            toggle_panel(workspace, SaveHook::StyleLint);
            Ok(())
        }
    }
}

fn panel_id(hook: SaveHook) -> &'static str {
    match hook {
        SaveHook::MarkdownPreview => markdown::PANEL_ID,
        SaveHook::StyleLint => lint::PANEL_ID,
    }
}

/// Panel-producing tools are binary toggles keyed on the presence of their
/// panel, not on remembered state: if this tool's panel is open, dismiss it;
/// otherwise open it (implicitly closing any other panel and its hook),
/// render the first content, and register for save updates.
fn toggle_panel(workspace: &mut Workspace, hook: SaveHook) {
    let id = panel_id(hook);
    if workspace.panels.panel().map(|p| p.id) == Some(id) {
        workspace.panels.dismiss_all();
    } else {
        workspace.panels.open(id);
        workspace.refresh_panel(hook);
        workspace.panels.install_hook(hook);
    }
}

/// Minimal HTML escaping for text destined for panel markup.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
