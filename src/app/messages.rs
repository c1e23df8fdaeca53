/// All messages that can be sent through the FLTK channel.
/// The editor key handler and the toolbar callbacks send one of these; the
/// dispatch loop in main hands them to `AppState`.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Tab went down in the editor; the default focus navigation was
    /// suppressed and an indent/unindent edit is due.
    TabPressed { shift: bool },

    /// A key came up in the editor. Enter drives the newline edits; every
    /// release triggers a save.
    KeyReleased { enter: bool, shift: bool },

    /// A toolbar affordance was clicked; index into the tool registry.
    ActivateTool(usize),

    /// The panel's close affordance was clicked.
    DismissPanel,

    /// The error banner was clicked.
    DismissError,
}
