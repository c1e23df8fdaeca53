use fltk::{
    button::Button,
    frame::Frame,
    group::{Flex, Group},
    misc::HelpView,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::line_edit;
use super::messages::Message;
use super::persistence::Persistence;
use super::store::FileStore;
use super::tools;
use super::workspace::Workspace;
use crate::ui::main_window::{BANNER_HEIGHT, MainWidgets, TOOLBAR_HEIGHT, wrap_for_helpview};
use crate::ui::theme::apply_theme;

/// FLTK-side coordinator: owns the widgets, the live [`Workspace`] and the
/// persistence adapter, and handles every channel message.
///
/// Each handler follows the same shape: pull the buffer out of the editor,
/// run the engine, push the result back if it changed, save, sync widgets.
/// No component keeps a reference to the buffer across handlers.
pub struct AppState {
    pub editor: TextEditor,
    pub window: Window,
    pub flex: Flex,
    pub toolbar_buttons: Vec<Button>,
    pub panel_group: Group,
    pub panel_view: HelpView,
    pub banner: Frame,
    pub workspace: Workspace,
    pub persistence: Persistence<FileStore>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        workspace: Workspace,
        persistence: Persistence<FileStore>,
    ) -> Self {
        let mut state = Self {
            editor: widgets.editor,
            window: widgets.wind,
            flex: widgets.flex,
            toolbar_buttons: widgets.toolbar_buttons,
            panel_group: widgets.panel_group,
            panel_view: widgets.panel_view,
            banner: widgets.banner,
            workspace,
            persistence,
        };
        state.push_buffer();
        state.sync_all();
        state
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::TabPressed { shift } => self.handle_tab(shift),
            Message::KeyReleased { enter, shift } => self.handle_key_released(enter, shift),
            Message::ActivateTool(index) => self.activate_tool(index),
            Message::DismissPanel => {
                self.workspace.panels.dismiss_all();
                self.sync_panel();
            }
            Message::DismissError => {
                self.workspace.reporter.dismiss();
                self.sync_banner();
            }
        }
    }

    /// Tab indents at the cursor; Shift+Tab unindents the current line.
    /// The matching key-up will trigger the save.
    fn handle_tab(&mut self, shift: bool) {
        self.pull_buffer();
        let (text, cursor) = (
            self.workspace.buffer.text.clone(),
            self.workspace.buffer.cursor,
        );
        let edit = if shift {
            line_edit::unindent_line(&text, cursor)
        } else {
            line_edit::insert_indent(&text, cursor)
        };
        if edit.0 != text || edit.1 != cursor {
            self.workspace.buffer.apply(edit);
            self.push_buffer();
        }
    }

    /// Every key release persists the buffer; releasing Enter first runs
    /// auto-indent, and list continuation unless the break was forced with
    /// Shift.
    fn handle_key_released(&mut self, enter: bool, shift: bool) {
        self.pull_buffer();
        if enter {
            let edit = line_edit::indent_newline(
                &self.workspace.buffer.text,
                self.workspace.buffer.cursor,
            );
            let edit = if shift {
                edit
            } else {
                line_edit::continue_list(&edit.0, edit.1)
            };
            if edit.0 != self.workspace.buffer.text || edit.1 != self.workspace.buffer.cursor {
                self.workspace.buffer.apply(edit);
                self.push_buffer();
            }
        }
        self.persistence.save(&mut self.workspace);
        self.sync_panel();
    }

    fn activate_tool(&mut self, index: usize) {
        let Some(tool) = tools::REGISTRY.get(index) else {
            return;
        };
        self.pull_buffer();
        let before = self.workspace.buffer.clone();
        tools::activate(tool, &mut self.workspace, &mut self.persistence);
        if self.workspace.buffer != before {
            self.push_buffer();
        }
        self.sync_all();
    }

    /// Copy editor text and cursor into the workspace buffer for this
    /// handler invocation.
    fn pull_buffer(&mut self) {
        let text = self.editor.buffer().map(|b| b.text()).unwrap_or_default();
        let mut cursor = (self.editor.insert_position().max(0) as usize).min(text.len());
        while cursor > 0 && !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        let selection_end = self
            .editor
            .buffer()
            .and_then(|mut b| b.selection_position())
            .map(|(_, end)| (end.max(0) as usize).min(text.len()));
        self.workspace.buffer.text = text;
        self.workspace.buffer.cursor = cursor;
        self.workspace.buffer.selection_end = selection_end;
    }

    /// Write the workspace buffer back into the editor, restoring the
    /// cursor's apparent position.
    pub fn push_buffer(&mut self) {
        if let Some(mut buffer) = self.editor.buffer() {
            buffer.set_text(&self.workspace.buffer.text);
        }
        self.editor
            .set_insert_position(self.workspace.buffer.cursor as i32);
        self.editor.show_insert_position();
    }

    pub fn sync_all(&mut self) {
        self.apply_mode();
        self.sync_panel();
        self.sync_banner();
    }

    pub fn apply_mode(&mut self) {
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.toolbar_buttons,
            &mut self.panel_view,
            &mut self.banner,
            self.workspace.mode.is_night(),
        );
    }

    /// Show the live panel over the right half of the editor, or hide the
    /// host when no panel exists.
    fn sync_panel(&mut self) {
        match self.workspace.panels.panel() {
            Some(panel) => {
                self.panel_view.set_value(&wrap_for_helpview(&panel.content));
                let (w, h) = (self.window.w(), self.window.h());
                self.panel_group
                    .resize(w / 2, TOOLBAR_HEIGHT, w / 2, h - TOOLBAR_HEIGHT);
                self.panel_group.show();
            }
            None => self.panel_group.hide(),
        }
        self.window.redraw();
    }

    fn sync_banner(&mut self) {
        match self.workspace.reporter.message() {
            Some(message) => {
                self.banner.set_label(message);
                let (w, h) = (self.window.w(), self.window.h());
                self.banner.resize(0, h - BANNER_HEIGHT, w, BANNER_HEIGHT);
                self.banner.show();
            }
            None => self.banner.hide(),
        }
        self.window.redraw();
    }
}
