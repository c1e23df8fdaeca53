#[cfg(feature = "gui")]
use fltk::{
    app,
    enums::{Event, Key},
    prelude::*,
};

#[cfg(feature = "gui")]
use scratchpad::app::messages::Message;
#[cfg(feature = "gui")]
use scratchpad::app::persistence::Persistence;
#[cfg(feature = "gui")]
use scratchpad::app::state::AppState;
#[cfg(feature = "gui")]
use scratchpad::app::store::FileStore;
#[cfg(feature = "gui")]
use scratchpad::app::workspace::Workspace;
#[cfg(feature = "gui")]
use scratchpad::ui::main_window::build_main_window;

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("scratchpad was built without the `gui` feature; the GUI binary is unavailable.");
}

#[cfg(feature = "gui")]
fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let persistence = Persistence::new(FileStore::open_default());
    let workspace = Workspace::new(persistence.load());

    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets, workspace, persistence);

    // Key-down intercepts Tab (suppressing focus navigation) before the
    // editor sees it; key-up runs the newline edits and the per-keystroke
    // save, after the editor has committed the character.
    let mut editor = state.editor.clone();
    editor.handle({
        let s = sender;
        move |_, event| match event {
            Event::KeyDown if app::event_key() == Key::Tab => {
                s.send(Message::TabPressed {
                    shift: app::is_event_shift(),
                });
                true
            }
            Event::KeyUp => {
                s.send(Message::KeyReleased {
                    enter: app::event_key() == Key::Enter,
                    shift: app::is_event_shift(),
                });
                false
            }
            _ => false,
        }
    });

    state.window.show();
    let _ = state.editor.take_focus();

    while fltk_app.wait() {
        if let Some(message) = receiver.recv() {
            state.handle(message);
        }
    }
}
